//! Read-only views of simulation state for presentation layers.

use sy_core::{SimClock, Tick, WorkOrderStatus};

use crate::{
    ResourcePool, ResourceUnit, ShipyardState, SupplyChainEvent, SupplyChainTable, WorkOrder,
    WorkOrderTable,
};

// ── StatusCounts ──────────────────────────────────────────────────────────────

/// Number of work orders in each status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusCounts {
    pub pending:     usize,
    pub in_progress: usize,
    pub delayed:     usize,
    pub completed:   usize,
}

impl StatusCounts {
    pub fn tally(statuses: impl IntoIterator<Item = WorkOrderStatus>) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            *counts.slot(status) += 1;
        }
        counts
    }

    pub fn get(&self, status: WorkOrderStatus) -> usize {
        match status {
            WorkOrderStatus::Pending    => self.pending,
            WorkOrderStatus::InProgress => self.in_progress,
            WorkOrderStatus::Delayed    => self.delayed,
            WorkOrderStatus::Completed  => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.delayed + self.completed
    }

    fn slot(&mut self, status: WorkOrderStatus) -> &mut usize {
        match status {
            WorkOrderStatus::Pending    => &mut self.pending,
            WorkOrderStatus::InProgress => &mut self.in_progress,
            WorkOrderStatus::Delayed    => &mut self.delayed,
            WorkOrderStatus::Completed  => &mut self.completed,
        }
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// A borrowed, read-only view of the state at one point in time.
///
/// The borrow checker guarantees no step can run while a `Snapshot` is
/// alive.  Call [`cloned`](Self::cloned) for a copy that outlives it.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    pub current_time: Tick,
    pub steps:        u64,
    pub work_orders:  &'a WorkOrderTable,
    pub supply_chain: &'a SupplyChainTable,
    pub resources:    &'a ResourcePool,
}

impl<'a> Snapshot<'a> {
    pub fn new(clock: &SimClock, state: &'a ShipyardState) -> Self {
        Self {
            current_time: clock.current,
            steps:        clock.steps,
            work_orders:  &state.work_orders,
            supply_chain: &state.supply_chain,
            resources:    &state.resources,
        }
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.work_orders.status_counts()
    }

    /// Deep copy of every table.
    pub fn cloned(&self) -> OwnedSnapshot {
        OwnedSnapshot {
            current_time: self.current_time,
            steps:        self.steps,
            work_orders:  self.work_orders.rows().to_vec(),
            supply_chain: self.supply_chain.rows().to_vec(),
            resources:    self.resources.units().to_vec(),
            counts:       self.status_counts(),
        }
    }
}

/// An owned copy of a [`Snapshot`], safe to send across threads or serialize.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnedSnapshot {
    pub current_time: Tick,
    pub steps:        u64,
    pub work_orders:  Vec<WorkOrder>,
    pub supply_chain: Vec<SupplyChainEvent>,
    pub resources:    Vec<ResourceUnit>,
    pub counts:       StatusCounts,
}
