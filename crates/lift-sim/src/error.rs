use lift_core::{ConfigError, Tick};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{got} starting floors supplied for {expected} elevators")]
    FleetSizeMismatch {
        expected: usize,
        got:      usize,
    },

    /// More deliveries than passengers: admission or delivery bookkeeping is
    /// broken.  Fatal; the run stops at the tick it was detected.
    #[error(
        "consistency violation at {tick}: {people_done} passengers delivered \
         but only {total_people} exist"
    )]
    ConsistencyViolation {
        tick:         Tick,
        people_done:  u32,
        total_people: u32,
    },
}

pub type SimResult<T> = Result<T, SimError>;
