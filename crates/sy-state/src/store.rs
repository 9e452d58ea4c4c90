//! `ShipyardState` — the single mutable state instance for a run.

use sy_core::ResourceKind;
use tracing::warn;

use crate::{ResourcePool, SupplyChainTable, WorkOrderTable};

/// All mutable simulation state, owned by the engine and lent to each agent
/// for the duration of its `act` call.
///
/// Fields are public so that callers can split-borrow them (e.g. iterate work
/// orders while allocating from the pool).
#[derive(Clone, Debug, Default)]
pub struct ShipyardState {
    pub work_orders:  WorkOrderTable,
    pub supply_chain: SupplyChainTable,
    pub resources:    ResourcePool,
}

impl ShipyardState {
    pub fn new(
        work_orders:  WorkOrderTable,
        supply_chain: SupplyChainTable,
        resources:    ResourcePool,
    ) -> Self {
        Self { work_orders, supply_chain, resources }
    }

    /// Align the pool with assignments already present in the work-order
    /// table (e.g. loaded from a dataset).
    ///
    /// Each assigned unit is claimed for its order.  Assignments naming an
    /// unknown unit, a unit of the wrong kind, or a unit held elsewhere are
    /// cleared with a warning.  Rows without an ID are left untouched.
    ///
    /// Returns the number of assignments cleared.
    pub fn reconcile_assignments(&mut self) -> usize {
        let mut cleared = 0;
        let Self { work_orders, resources, .. } = self;

        for order in work_orders.iter_mut() {
            let Some(owner) = order.id().cloned() else {
                continue;
            };
            for kind in ResourceKind::ALL {
                let Some(unit) = order.assignment(kind).cloned() else {
                    continue;
                };
                if let Err(e) = resources.claim(unit.as_str(), kind, &owner) {
                    warn!(work_order = %owner, %kind, "clearing assignment: {e}");
                    *order.assignment_mut(kind) = None;
                    cleared += 1;
                }
            }
        }
        cleared
    }
}
