//! Work-order lifecycle agent.

use sy_core::{SimPolicy, WorkOrderId, WorkOrderStatus};
use sy_state::{
    ResourcePool, ShipyardState, StateResult, SupplyChainTable, WorkOrder, WorkOrderTable,
};
use tracing::{debug, info, warn};

use crate::{Agent, AgentContext};

const UNKNOWN_DELAY: &str = "Unknown delay";

/// Advances each work order through its status lifecycle, at most one
/// transition per order per step.
///
/// Evaluation for an identified order, in priority order:
///
/// 1. A supply-chain row whose `linked_shipyard_event` equals the order's
///    `linked_event` moves it to `Delayed`, whatever its current status.
///    With `redelay_completed = false` a `Completed` order is exempt.
/// 2. `Pending` becomes `InProgress` when every required resource kind has
///    enough units available to the order and every prerequisite exists and
///    is `Completed`.  The required units are claimed for the order as it
///    starts.
/// 3. `InProgress` becomes `Completed` when `tasks_done` is set and
///    `pending_issues` is not.
/// 4. `Delayed` and `Completed` are left as they are.
///
/// Rows are visited in table order and each decision sees the writes already
/// made this step, so a prerequisite completed earlier in the same pass
/// unblocks its dependants immediately.
#[derive(Clone, Debug)]
pub struct WorkOrderCoordinator {
    redelay_completed: bool,
}

impl Default for WorkOrderCoordinator {
    fn default() -> Self {
        Self::new(&SimPolicy::default())
    }
}

impl WorkOrderCoordinator {
    pub fn new(policy: &SimPolicy) -> Self {
        Self { redelay_completed: policy.redelay_completed }
    }

    /// Status `order` should have after this step.
    fn next_status(&self, id: &WorkOrderId, order: &WorkOrder, state: &ShipyardState) -> WorkOrderStatus {
        if let Some(reason) = delay_reason(order, &state.supply_chain) {
            if order.status == WorkOrderStatus::Completed && !self.redelay_completed {
                debug!(work_order = %id, "ignoring delay on completed order: {reason}");
                return WorkOrderStatus::Completed;
            }
            warn!("work order {id} delayed: {reason}");
            return WorkOrderStatus::Delayed;
        }

        match order.status {
            WorkOrderStatus::Pending => {
                if resources_available(id, order, &state.resources)
                    && dependencies_met(id, order, &state.work_orders)
                {
                    WorkOrderStatus::InProgress
                } else {
                    WorkOrderStatus::Pending
                }
            }
            WorkOrderStatus::InProgress => {
                if can_complete(id, order) {
                    WorkOrderStatus::Completed
                } else {
                    WorkOrderStatus::InProgress
                }
            }
            other => other,
        }
    }
}

impl Agent for WorkOrderCoordinator {
    fn name(&self) -> &str {
        "work_order_coordinator"
    }

    fn act(&mut self, ctx: &mut AgentContext<'_>) {
        info!(tick = %ctx.tick, "processing work orders");
        let state = &mut *ctx.state;

        for pos in 0..state.work_orders.len() {
            let order = state.work_orders.row(pos);
            let Some(id) = order.id().cloned() else {
                warn!(row = pos, "work order ID missing, skipping");
                continue;
            };
            let current = order.status;
            let next = self.next_status(&id, order, state);

            if next != current {
                if next == WorkOrderStatus::InProgress {
                    if let Err(e) = reserve_required(&id, pos, state) {
                        warn!(work_order = %id, "could not reserve resources, staying {current}: {e}");
                        continue;
                    }
                }
                state.work_orders.row_mut(pos).status = next;
                info!(work_order = %id, from = %current, to = %next, "status updated");
            } else {
                debug!(work_order = %id, status = %current, "status unchanged");
            }
        }
    }
}

/// Reason of the first supply-chain row linked to the order's event, if any.
fn delay_reason<'a>(order: &WorkOrder, supply_chain: &'a SupplyChainTable) -> Option<&'a str> {
    let linked = order.linked_event.as_deref()?;
    let event = supply_chain.find_linked(linked)?;
    Some(event.delay_reason.as_deref().unwrap_or(UNKNOWN_DELAY))
}

fn resources_available(id: &WorkOrderId, order: &WorkOrder, pool: &ResourcePool) -> bool {
    for (&kind, &quantity) in &order.required_resources {
        let available = pool.available_to(kind, id.as_str());
        if available < quantity as usize {
            warn!(available, required = quantity, "insufficient {kind} for work order {id}");
            return false;
        }
    }
    true
}

/// Claim the units an order needs as it starts, so a later pending order
/// cannot take them first.  Unset assignment fields point at a held unit.
fn reserve_required(id: &WorkOrderId, pos: usize, state: &mut ShipyardState) -> StateResult<()> {
    let ShipyardState { work_orders, resources, .. } = state;
    let order = work_orders.row_mut(pos);
    let required = order.required_resources.clone();

    for (kind, quantity) in required {
        let taken = resources.reserve(kind, id, quantity)?;
        if !taken.is_empty() {
            debug!(work_order = %id, units = taken.len(), "reserved {kind}");
        }
        if order.assignment(kind).is_none() {
            *order.assignment_mut(kind) =
                resources.held_by(id.as_str()).find(|u| u.kind == kind).map(|u| u.id().clone());
        }
    }
    Ok(())
}

fn dependencies_met(id: &WorkOrderId, order: &WorkOrder, orders: &WorkOrderTable) -> bool {
    for prereq in &order.prerequisite_tasks {
        match orders.get(prereq.as_str()) {
            Some(p) if p.status == WorkOrderStatus::Completed => {}
            Some(_) => {
                warn!("prerequisite task {prereq} for work order {id} is not completed");
                return false;
            }
            None => {
                warn!("prerequisite task {prereq} for work order {id} does not exist");
                return false;
            }
        }
    }
    true
}

fn can_complete(id: &WorkOrderId, order: &WorkOrder) -> bool {
    if !order.tasks_done {
        debug!(work_order = %id, "tasks not done");
        return false;
    }
    if order.pending_issues {
        debug!(work_order = %id, "pending issues outstanding");
        return false;
    }
    true
}
