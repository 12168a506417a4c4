//! `lift-core`: foundational types for the `lift_sim` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PersonId`, `ElevatorId`                              |
//! | [`floor`]       | `Floor` (1-based floor number)                        |
//! | [`direction`]   | `Direction` (`Up`, `Down`, `Idle`)                    |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (seeded admission RNG)                       |
//! | [`config`]      | `LiftConfig`, `CAPACITY`                              |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CAPACITY, LiftConfig};
pub use direction::Direction;
pub use error::{ConfigError, ConfigResult};
pub use floor::Floor;
pub use ids::{ElevatorId, PersonId};
pub use rng::SimRng;
pub use time::Tick;
