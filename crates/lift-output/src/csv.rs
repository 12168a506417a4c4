//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EventRow, OutputResult, TickSummaryRow};

pub const EVENT_HEADERS: [&str; 7] =
    ["tick", "kind", "elevator", "floor", "person", "destination", "passengers"];

pub const SUMMARY_HEADERS: [&str; 6] =
    ["tick", "admitted", "waiting", "riding", "people_done", "moved"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(EVENT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self {
            events,
            summaries,
            finished: false,
        })
    }
}

/// Empty cell for `None`.
fn opt(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.kind.to_owned(),
            opt(row.elevator),
            row.floor.to_string(),
            opt(row.person),
            opt(row.destination),
            opt(row.passengers),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.admitted.to_string(),
            row.waiting.to_string(),
            row.riding.to_string(),
            row.people_done.to_string(),
            row.moved.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
