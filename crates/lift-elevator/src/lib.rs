//! `lift-elevator`: one car and its per-tick state machine.
//!
//! # Tick algorithm
//!
//! ```text
//! step(building, now):
//!   ① Skip     idle, empty, and nobody waiting anywhere → do nothing.
//!   ② Alight   drop every passenger whose destination is this floor.
//!   ③ Board    take passengers from this floor's queue for the current
//!              direction (both queues when idle) until the car is full.
//!   ④ Dwell    if ② or ③ did anything, the tick is spent here.
//!   ⑤ Redirect recompute direction from riders, else nearest demand.
//!   ⑥ Move     one floor in that direction, within 1..=floors.
//! ```
//!
//! ② and ③ run in a single critical section of the building lock; ⑤ takes
//! the lock again only for its queue scan.  Cars never lock each other, so
//! any number of them may step concurrently against one `&Building`.

pub mod elevator;

#[cfg(test)]
mod tests;

pub use elevator::{Elevator, ElevatorStats, StepOutcome};
