//! Seeded synthetic shipyard datasets.
//!
//! Produces a work-order table and a supply-chain table that exercise every
//! coordinator path: linked delays, prerequisite chains, resource
//! requirements, and in-progress orders ready (or not) to complete.  The
//! same `seed` always yields identical tables.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use sy_core::{ResourceKind, SupplyEventId, WorkOrderId, WorkOrderStatus};
use sy_state::{SupplyChainEvent, SupplyChainTable, WorkOrder, WorkOrderTable};

use crate::DataResult;

const DELAY_REASONS: [&str; 5] = [
    "Supply Delay",
    "Equipment Failure",
    "Severe Weather",
    "Customs Hold",
    "Vendor Backorder",
];

#[derive(Clone, Debug)]
pub struct SynthConfig {
    pub work_orders:   usize,
    pub supply_events: usize,
    /// Number of distinct shipyard event keys (`EV-1..=n`) to draw links
    /// from.  Keys without a supply-chain row never cause a delay.
    pub event_keys:    usize,
    pub seed:          u64,
    /// Probability that a work order carries a `linked_shipyard_event`.
    pub link_rate:     f64,
    /// Probability that a work order depends on an earlier one.
    pub prerequisite_rate: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            work_orders:       100,
            supply_events:     10,
            event_keys:        40,
            seed:              42,
            link_rate:         0.3,
            prerequisite_rate: 0.2,
        }
    }
}

/// Generate a work-order table and a supply-chain table.
pub fn generate(config: &SynthConfig) -> DataResult<(WorkOrderTable, SupplyChainTable)> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let event_keys = config.event_keys.max(1);

    let mut orders = WorkOrderTable::new();
    let mut ids: Vec<WorkOrderId> = Vec::with_capacity(config.work_orders);
    for n in 1..=config.work_orders {
        let Some(id) = WorkOrderId::parse(&format!("WO-{n:05}")) else {
            continue;
        };
        let status = match rng.gen_range(0..10) {
            0..=6 => WorkOrderStatus::Pending,
            7..=8 => WorkOrderStatus::InProgress,
            _     => WorkOrderStatus::Completed,
        };
        let mut order = WorkOrder::new(id.clone())
            .with_status(status)
            .with_completion(rng.gen_bool(0.5), rng.gen_bool(0.1));

        if rng.gen_bool(config.link_rate.clamp(0.0, 1.0)) {
            order.linked_event = Some(format!("EV-{}", rng.gen_range(1..=event_keys)));
        }
        for kind in ResourceKind::ALL {
            let qty = rng.gen_range(0..=1);
            if qty > 0 {
                order.required_resources.insert(kind, qty);
            }
        }
        if !ids.is_empty() && rng.gen_bool(config.prerequisite_rate.clamp(0.0, 1.0)) {
            if let Some(prereq) = ids.choose(&mut rng) {
                order.prerequisite_tasks.push(prereq.clone());
            }
        }

        orders.push(order)?;
        ids.push(id);
    }

    let mut supply = SupplyChainTable::new();
    for n in 1..=config.supply_events {
        let Some(id) = SupplyEventId::parse(&format!("SC-{n:05}")) else {
            continue;
        };
        let reason = DELAY_REASONS.choose(&mut rng).copied().unwrap_or("Unknown delay");
        supply.push(
            SupplyChainEvent::new(id)
                .with_link(format!("EV-{}", rng.gen_range(1..=event_keys)))
                .with_reason(reason),
        )?;
    }

    Ok((orders, supply))
}
