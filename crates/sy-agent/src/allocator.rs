//! Resource allocation agent.

use sy_core::{ResourceKind, WorkOrderStatus};
use tracing::{info, warn};

use crate::{Agent, AgentContext};

/// Equips active work orders from the resource pool and returns the units of
/// completed ones.
///
/// For every identified order:
///
/// - `Pending` or `InProgress`: each unset assignment field (crane, AGV,
///   forklift, in that order) is filled with the first free unit of that
///   kind.  When none is free the field stays unset and a warning is logged.
/// - `Completed`: every unit the order holds goes back to the pool and its
///   assignment fields are cleared.
/// - `Delayed`: left alone; the order keeps what it holds.
///
/// Completed orders are released first, then `InProgress` orders are
/// equipped, then `Pending` ones, each group in table order.  A started
/// order therefore outranks a pending order that sits above it in the table.
#[derive(Clone, Debug, Default)]
pub struct ResourceAllocator;

impl ResourceAllocator {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for ResourceAllocator {
    fn name(&self) -> &str {
        "resource_allocator"
    }

    fn act(&mut self, ctx: &mut AgentContext<'_>) {
        info!(tick = %ctx.tick, "allocating resources");
        let state = &mut *ctx.state;
        let (orders, pool) = (&mut state.work_orders, &mut state.resources);

        for (pos, order) in orders.iter_mut().enumerate() {
            let Some(id) = order.id().cloned() else {
                warn!(row = pos, "work order ID missing, skipping");
                continue;
            };
            if order.status != WorkOrderStatus::Completed {
                continue;
            }
            let released = pool.release_all(id.as_str());
            for kind in ResourceKind::ALL {
                *order.assignment_mut(kind) = None;
            }
            if !released.is_empty() {
                info!(work_order = %id, units = released.len(), "released resources");
            }
        }

        for status in [WorkOrderStatus::InProgress, WorkOrderStatus::Pending] {
            for order in orders.iter_mut().filter(|o| o.status == status) {
                let Some(id) = order.id().cloned() else {
                    continue;
                };
                for kind in ResourceKind::ALL {
                    if order.assignment(kind).is_some() {
                        continue;
                    }
                    match pool.allocate(kind, &id) {
                        Some(unit) => {
                            info!("assigned {kind} {unit} to work order {id}");
                            *order.assignment_mut(kind) = Some(unit);
                        }
                        None => warn!("no {kind}s available for work order {id}"),
                    }
                }
            }
        }
    }
}
