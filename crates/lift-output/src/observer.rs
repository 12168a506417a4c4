//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use lift_building::LiftEvent;
use lift_sim::{RunReport, SimObserver, TickSummary};

use crate::writer::OutputWriter;
use crate::{EventRow, OutputError, TickSummaryRow};

/// A [`SimObserver`] that writes events and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Observer hooks cannot fail, so the first writer error is parked here and
/// every later one is dropped.  Collect it with
/// [`take_error`][Self::take_error] once the run is over.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    first_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            first_error: None,
        }
    }

    /// The first write error, if any.  Later calls return `None`.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.first_error.take()
    }

    /// Flush the writer.  Needed when the run ended with an error and
    /// `on_sim_end` was never called.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.keep_first(result);
    }

    /// Give back the writer, for instance to inspect what it collected.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn keep_first(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            self.first_error.get_or_insert(e);
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, event: &LiftEvent) {
        let result = self.writer.write_event(&EventRow::from(event));
        self.keep_first(result);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.keep_first(result);
    }

    fn on_sim_end(&mut self, _report: &RunReport) {
        self.finish();
    }
}
