//! Plain data row types written by output backends.

use sy_core::WorkOrderStatus;
use sy_state::WorkOrder;

/// One work order's state at a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrderRow {
    pub step:          u64,
    pub time:          u64,
    /// Empty for rows loaded without an ID.
    pub work_order_id: String,
    pub status:        WorkOrderStatus,
    pub linked_event:  String,
    pub crane_id:      String,
    pub agv_id:        String,
    pub forklift_id:   String,
}

impl WorkOrderRow {
    pub fn new(step: u64, time: u64, order: &WorkOrder) -> Self {
        let text = |v: Option<&sy_core::ResourceUnitId>| v.map(|u| u.to_string()).unwrap_or_default();
        Self {
            step,
            time,
            work_order_id: order.id().map(|id| id.to_string()).unwrap_or_default(),
            status:        order.status,
            linked_event:  order.linked_event.clone().unwrap_or_default(),
            crane_id:      text(order.crane_id.as_ref()),
            agv_id:        text(order.agv_id.as_ref()),
            forklift_id:   text(order.forklift_id.as_ref()),
        }
    }
}

/// Summary statistics for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:           u64,
    pub start_time:     u64,
    pub end_time:       u64,
    pub pending:        u64,
    pub in_progress:    u64,
    pub delayed:        u64,
    pub completed:      u64,
    pub events_applied: u64,
    pub events_queued:  u64,
}
