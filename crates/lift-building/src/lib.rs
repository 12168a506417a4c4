//! `lift-building`: passengers, wait queues, and shared building state.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`person`]      | `Person`: one immutable transport request                |
//! | [`queue`]       | `FloorQueue`: up/down wait queues of a single floor      |
//! | [`building`]    | `Building` (lock owner), `BuildingState` (guarded data)   |
//! | [`event`]       | `LiftEvent`: one observable action                       |
//!
//! # Ownership of passengers
//!
//! A `Person` is moved between a floor's `FloorQueue` and a car's manifest.
//! Delivery drops it and bumps `people_done`.  The only copy is the one
//! `Building::admit` hands back for the request event.
//!
//! # Locking
//!
//! All queue and counter state lives in [`BuildingState`] behind one
//! `Mutex`.  Elevators take the lock for each critical section of their tick
//! and never hold it across ticks.  The elevator fleet itself is *not* inside
//! the lock: each car's state is private to the car and is stepped through
//! `&mut`, so cars can run concurrently against a shared `&Building`.

pub mod building;
pub mod event;
pub mod person;
pub mod queue;

#[cfg(test)]
mod tests;

pub use building::{Building, BuildingState};
pub use event::LiftEvent;
pub use person::Person;
pub use queue::FloorQueue;
