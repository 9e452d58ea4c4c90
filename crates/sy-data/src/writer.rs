//! Dataset writers producing the format read by [`crate::loader`].

use std::io::Write;

use sy_core::ResourceKind;
use sy_state::{SupplyChainTable, WorkOrderTable};

use crate::DataResult;

const WORK_ORDER_HEADER: [&str; 10] = [
    "work_order_id",
    "task_status",
    "linked_shipyard_event",
    "crane_id",
    "agv_id",
    "forklift_id",
    "required_resources",
    "prerequisite_tasks",
    "tasks_done",
    "pending_issues",
];

/// Write a work-order table as CSV.
pub fn write_work_orders<W: Write>(table: &WorkOrderTable, out: W) -> DataResult<()> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(WORK_ORDER_HEADER)?;
    for order in table {
        let required = order
            .required_resources
            .iter()
            .map(|(kind, qty)| format!("{kind}:{qty}"))
            .collect::<Vec<_>>()
            .join(";");
        let prerequisites = order
            .prerequisite_tasks
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(";");
        let unit = |kind: ResourceKind| {
            order.assignment(kind).map(|u| u.to_string()).unwrap_or_default()
        };

        w.write_record([
            order.id().map(|id| id.to_string()).unwrap_or_default(),
            order.status.label().to_owned(),
            order.linked_event.clone().unwrap_or_default(),
            unit(ResourceKind::Crane),
            unit(ResourceKind::Agv),
            unit(ResourceKind::Forklift),
            required,
            prerequisites,
            order.tasks_done.to_string(),
            order.pending_issues.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Write a supply-chain table as CSV.
pub fn write_supply_chain<W: Write>(table: &SupplyChainTable, out: W) -> DataResult<()> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(["event_id", "linked_shipyard_event", "delay_reason"])?;
    for event in table {
        w.write_record([
            event.id().as_str(),
            event.linked_shipyard_event.as_deref().unwrap_or_default(),
            event.delay_reason.as_deref().unwrap_or_default(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
