//! Simulation observer trait for logging and data collection.

use lift_building::LiftEvent;
use lift_core::{LiftConfig, Tick};

use crate::{RunReport, TickSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: delivery counter
///
/// ```rust,ignore
/// struct Deliveries(usize);
///
/// impl SimObserver for Deliveries {
///     fn on_event(&mut self, event: &LiftEvent) {
///         if matches!(event, LiftEvent::Disembarked { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_start(&mut self, _config: &LiftConfig) {}

    /// Called at the very start of each tick, before admission.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every event, in order: the admission first, then each
    /// car's events in elevator id order.
    ///
    /// Car events are buffered during the concurrent step and replayed here
    /// after the barrier, so this is always called from the dispatcher thread.
    fn on_event(&mut self, _event: &LiftEvent) {}

    /// Called at the end of each tick, after the clock advanced.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once after the termination predicate holds.
    fn on_sim_end(&mut self, _report: &RunReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
#[derive(Debug, Default)]
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
