//! Configuration error type.
//!
//! Configuration problems are detected before the first tick and surface to
//! the caller; nothing in the running engine produces a `ConfigError`.

use thiserror::Error;

use crate::Floor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a building needs at least 2 floors, got {0}")]
    TooFewFloors(u32),

    #[error("at least one elevator is required")]
    NoElevators,

    #[error("floor {floor} is outside 1..={floors}")]
    FloorOutOfRange { floor: Floor, floors: u32 },
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
