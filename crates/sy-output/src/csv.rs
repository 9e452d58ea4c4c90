//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `work_orders.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StepSummaryRow, WorkOrderRow};

pub const WORK_ORDERS_FILE: &str = "work_orders.csv";
pub const STEP_SUMMARIES_FILE: &str = "step_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    work_orders: Writer<File>,
    summaries:   Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files, and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut work_orders = Writer::from_path(dir.join(WORK_ORDERS_FILE))?;
        work_orders.write_record([
            "step", "time", "work_order_id", "task_status", "linked_shipyard_event",
            "crane_id", "agv_id", "forklift_id",
        ])?;

        let mut summaries = Writer::from_path(dir.join(STEP_SUMMARIES_FILE))?;
        summaries.write_record([
            "step", "start_time", "end_time", "pending", "in_progress", "delayed",
            "completed", "events_applied", "events_queued",
        ])?;

        Ok(Self { work_orders, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_work_orders(&mut self, rows: &[WorkOrderRow]) -> OutputResult<()> {
        for row in rows {
            self.work_orders.write_record([
                row.step.to_string().as_str(),
                row.time.to_string().as_str(),
                row.work_order_id.as_str(),
                row.status.label(),
                row.linked_event.as_str(),
                row.crane_id.as_str(),
                row.agv_id.as_str(),
                row.forklift_id.as_str(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.start_time.to_string(),
            row.end_time.to_string(),
            row.pending.to_string(),
            row.in_progress.to_string(),
            row.delayed.to_string(),
            row.completed.to_string(),
            row.events_applied.to_string(),
            row.events_queued.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.work_orders.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
