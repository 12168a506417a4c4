//! `lift-output`: observers that log or record a simulation run.
//!
//! | Observer              | Output                                                   |
//! |-----------------------|----------------------------------------------------------|
//! | [`TracingObserver`]   | One structured `tracing` event per simulation event      |
//! | [`SimOutputObserver`] | Rows for any [`OutputWriter`]; [`CsvWriter`] creates `events.csv` and `tick_summaries.csv` |
//!
//! Observers compose by wrapping: an application that wants both logs and
//! files forwards each hook to two inner observers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod log;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use log::TracingObserver;
pub use observer::SimOutputObserver;
pub use row::{EventRow, TickSummaryRow};
pub use writer::OutputWriter;
