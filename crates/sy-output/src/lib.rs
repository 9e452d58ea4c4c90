//! `sy-output` — simulation output writers for the shipyard digital twin.
//!
//! | Backend | Files created                              |
//! |---------|--------------------------------------------|
//! | CSV     | `work_orders.csv`, `step_summaries.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `sy_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sy_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run_steps(20, &mut obs);
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{StepSummaryRow, WorkOrderRow};
pub use writer::OutputWriter;
