//! Simulation observer trait for progress reporting and data collection.

use sy_core::Tick;
use sy_events::ScheduledEvent;
use sy_state::Snapshot;

use crate::{EventOutcome, StepReport};

/// Callbacks invoked by the step loop at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, report: &StepReport) {
///         println!("{}: {} completed", report.ended_at, report.counts.completed);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any agent runs.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after each agent's `act` returns.
    fn on_agent_done(&mut self, _tick: Tick, _agent: &str) {}

    /// Called once per drained event, after its effect was applied.
    fn on_event_applied(&mut self, _tick: Tick, _event: &ScheduledEvent, _outcome: &EventOutcome) {}

    /// Called after the clock advanced.
    fn on_step_end(&mut self, _report: &StepReport) {}

    /// Called every `config.snapshot_interval` steps, after `on_step_end`.
    ///
    /// The snapshot borrows the engine's state; take
    /// [`Snapshot::cloned`] to keep it.
    fn on_snapshot(&mut self, _snapshot: Snapshot<'_>) {}

    /// Called once when a `start` loop ends.
    fn on_sim_end(&mut self, _final_time: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
