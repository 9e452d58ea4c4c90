//! Integration tests for sy-output.

#[cfg(test)]
mod csv_tests {
    use sy_core::WorkOrderStatus;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{StepSummaryRow, WorkOrderRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn order_row(id: &str, status: WorkOrderStatus) -> WorkOrderRow {
        WorkOrderRow {
            step:          1,
            time:          1,
            work_order_id: id.into(),
            status,
            linked_event:  String::new(),
            crane_id:      "crane1".into(),
            agv_id:        String::new(),
            forklift_id:   String::new(),
        }
    }

    fn summary_row(step: u64) -> StepSummaryRow {
        StepSummaryRow {
            step,
            start_time:     step - 1,
            end_time:       step,
            pending:        2,
            in_progress:    1,
            delayed:        0,
            completed:      step,
            events_applied: 0,
            events_queued:  1,
        }
    }

    fn headers(path: &std::path::Path) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn files_created_in_new_dir() {
        let dir = tmp();
        let out = dir.path().join("nested").join("run1");
        let _w = CsvWriter::new(&out).unwrap();
        assert!(out.join("work_orders.csv").exists());
        assert!(out.join("step_summaries.csv").exists());
    }

    #[test]
    fn headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir.path().join("work_orders.csv")),
            ["step", "time", "work_order_id", "task_status", "linked_shipyard_event", "crane_id", "agv_id", "forklift_id"]
        );
        assert_eq!(
            headers(&dir.path().join("step_summaries.csv")),
            ["step", "start_time", "end_time", "pending", "in_progress", "delayed", "completed", "events_applied", "events_queued"]
        );
    }

    #[test]
    fn work_order_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_work_orders(&[
            order_row("1", WorkOrderStatus::InProgress),
            order_row("2", WorkOrderStatus::Delayed),
        ])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("work_orders.csv")).unwrap();
        let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][2], "1");
        assert_eq!(&records[0][3], "In Progress");
        assert_eq!(&records[0][5], "crane1");
        assert_eq!(&records[1][3], "Delayed");
        assert_eq!(&records[1][6], "");
    }

    #[test]
    fn summaries_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        for step in 1..=3 {
            w.write_step_summary(&summary_row(step)).unwrap();
        }
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let steps: Vec<u64> = rdr.records().map(|r| r.unwrap()[0].parse().unwrap()).collect();
        assert_eq!(steps, [1, 2, 3]);
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── SimOutputObserver ─────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use sy_core::{SimConfig, WorkOrderId, WorkOrderStatus};
    use sy_sim::{NoopObserver, SimBuilder};
    use sy_state::{SupplyChainTable, WorkOrder, WorkOrderTable};

    use crate::row::{StepSummaryRow, WorkOrderRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, SimOutputObserver};

    /// Collects rows in memory.
    #[derive(Default)]
    struct MemWriter {
        orders:    Vec<WorkOrderRow>,
        summaries: Vec<StepSummaryRow>,
        finishes:  usize,
        fail:      bool,
    }

    impl OutputWriter for MemWriter {
        fn write_work_orders(&mut self, rows: &[WorkOrderRow]) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.orders.extend_from_slice(rows);
            Ok(())
        }

        fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
            self.summaries.push(*row);
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    fn table() -> WorkOrderTable {
        WorkOrderTable::from_rows([
            WorkOrder::new(WorkOrderId::parse("1").unwrap()).with_completion(true, false),
            WorkOrder::new(WorkOrderId::parse("2").unwrap()),
            WorkOrder::unidentified(),
        ])
        .unwrap()
    }

    #[test]
    fn rows_per_step_and_snapshot() {
        let mut sim = SimBuilder::new(table(), SupplyChainTable::new()).build().unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.run_steps(2, &mut obs);
        obs.finish().unwrap();

        let w = obs.into_writer();
        assert_eq!(w.summaries.len(), 2);
        assert_eq!(w.summaries[1].step, 2);
        assert_eq!(w.summaries[1].completed, 1);
        assert_eq!(w.orders.len(), 6);
        assert_eq!(w.orders[3].work_order_id, "1");
        assert_eq!(w.orders[3].status, WorkOrderStatus::Completed);
        assert_eq!(w.orders[5].work_order_id, "");
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn start_finishes_writer() {
        let config = SimConfig { max_steps: Some(3), snapshot_interval: 0, ..SimConfig::default() };
        let mut sim = SimBuilder::new(table(), SupplyChainTable::new()).config(config).build().unwrap();
        let mut obs = SimOutputObserver::new(MemWriter::default());
        sim.start(&mut obs);

        assert!(obs.take_error().is_none());
        let w = obs.into_writer();
        assert_eq!(w.summaries.len(), 3);
        assert!(w.orders.is_empty());
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn first_error_kept() {
        let mut sim = SimBuilder::new(table(), SupplyChainTable::new()).build().unwrap();
        let mut obs = SimOutputObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        sim.run_steps(3, &mut obs);
        assert!(matches!(obs.finish(), Err(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn csv_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut sim = SimBuilder::new(table(), SupplyChainTable::new()).build().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run_steps(4, &mut obs);
        sim.run_steps(1, &mut NoopObserver);
        obs.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 4);
        let mut rdr = csv::Reader::from_path(dir.path().join("work_orders.csv")).unwrap();
        assert_eq!(rdr.records().count(), 12);
    }
}
