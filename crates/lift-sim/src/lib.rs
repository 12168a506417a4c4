//! `lift-sim`: the dispatcher tick loop for the lift_sim elevator simulator.
//!
//! # Tick loop
//!
//! ```text
//! loop:
//!   ① Admit     while the quota lasts, create one passenger and queue them.
//!   ② Assign    snapshot waiting floors; give each car (in id order) the
//!               nearest unclaimed floor it can reach without reversing.
//!   ③ Step      every car runs Elevator::step concurrently; join.
//!   ④ Advance   bump the tick counter, check people_done <= total_people.
//!   ⑤ Finish?   quota admitted, every car idle and empty, all delivered.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs step ③ on Rayon's thread pool (default).          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::LiftConfig;
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(LiftConfig::reference()).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("all passengers delivered after {} ticks", report.elapsed);
//! ```

pub mod assign;
pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use assign::pre_assign;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{CarReport, RunReport, TickSummary};
pub use sim::Sim;
