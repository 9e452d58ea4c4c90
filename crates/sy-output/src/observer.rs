//! `SimOutputObserver<W>`: feeds step reports and snapshots to an `OutputWriter`.

use sy_core::Tick;
use sy_sim::{SimObserver, StepReport};
use sy_state::Snapshot;
use tracing::{debug, warn};

use crate::row::{StepSummaryRow, WorkOrderRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a summary row per step and the work-order
/// table at every snapshot to any [`OutputWriter`] backend.
///
/// `SimObserver` hooks cannot return errors, so the first write failure is
/// kept here.  After the run, check for errors with
/// [`take_error`][Self::take_error].  `Sim::start` finishes the writer
/// through `on_sim_end`; after `Sim::run_steps`, call
/// [`finish`][Self::finish].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// `None` when every write so far succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, returning the first error of the run if there was
    /// one.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.finish();
        self.store_err(result);
        match self.take_error() {
            Some(e) => Err(e),
            None    => Ok(()),
        }
    }

    /// Hand back the backend, e.g. to inspect what it collected.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, report: &StepReport) {
        let row = StepSummaryRow {
            step:           report.step,
            start_time:     report.started_at.0,
            end_time:       report.ended_at.0,
            pending:        report.counts.pending as u64,
            in_progress:    report.counts.in_progress as u64,
            delayed:        report.counts.delayed as u64,
            completed:      report.counts.completed as u64,
            events_applied: report.events_applied as u64,
            events_queued:  report.events_queued as u64,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: Snapshot<'_>) {
        let rows: Vec<WorkOrderRow> = snapshot
            .work_orders
            .iter()
            .map(|order| WorkOrderRow::new(snapshot.steps, snapshot.current_time.0, order))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_work_orders(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, final_time: Tick) {
        debug!(time = %final_time, "flushing output");
        let result = self.writer.finish();
        self.store_err(result);
    }
}
