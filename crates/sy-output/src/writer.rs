//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, StepSummaryRow, WorkOrderRow};

/// Trait implemented by output backends.
///
/// The observer never propagates these errors.  It stores the first one,
/// retrievable with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of work-order rows from one snapshot.
    fn write_work_orders(&mut self, rows: &[WorkOrderRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
