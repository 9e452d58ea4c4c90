//! Event-effect dispatcher: applies a due event to shared state.

use sy_core::{ResourceUnitId, SupplyEventId, WorkOrderId};
use sy_events::{EventKind, ScheduledEvent};
use sy_state::{ShipyardState, StateError, SupplyChainEvent};
use tracing::{error, info, warn};

/// What applying one event did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Supply-chain rows updated, or a new row recorded when none matched.
    DelayRecorded { updated: usize, inserted: bool },

    /// A unit went out of service.  `released_from` is the work order that
    /// was holding it.
    EquipmentFailed { unit: ResourceUnitId, released_from: Option<WorkOrderId> },

    /// A unit was repaired.  `restored` is `false` if it was not out of service.
    EquipmentRepaired { unit: ResourceUnitId, restored: bool },

    /// A failure or repair named a unit the pool does not know.
    UnknownEquipment(String),

    /// No effect: the type is unrecognized or the payload unusable.  The
    /// event is consumed all the same.
    Discarded,
}

/// Apply `event` to `state`.
///
/// Never fails: anything that cannot be applied is logged and reported as
/// [`EventOutcome::Discarded`] or [`EventOutcome::UnknownEquipment`].
pub fn apply_event(event: &ScheduledEvent, state: &mut ShipyardState) -> EventOutcome {
    match &event.kind {
        EventKind::SupplyChainDelay { event_id, reason } => {
            record_delay(state, event_id, reason.as_deref())
        }
        EventKind::EquipmentFailure { equipment_id } => fail_equipment(state, equipment_id),
        EventKind::EquipmentRepair { equipment_id } => repair_equipment(state, equipment_id),
        EventKind::Incomplete { field, .. } => {
            warn!(%event, field = field.as_str(), "event missing required field, discarding");
            EventOutcome::Discarded
        }
        EventKind::Unrecognized(_) => {
            warn!(%event, "unhandled event type, discarding");
            EventOutcome::Discarded
        }
    }
}

/// Update every supply-chain row addressed by `key`, or record a new one
/// linked to it.  Work orders linked to `key` pick the delay up on the next
/// coordinator pass.
fn record_delay(state: &mut ShipyardState, key: &str, reason: Option<&str>) -> EventOutcome {
    let mut updated = 0;
    for row in state.supply_chain.matching_mut(key) {
        if let Some(reason) = reason {
            row.delay_reason = Some(reason.to_owned());
        }
        updated += 1;
    }
    if updated > 0 {
        info!(key, updated, reason = reason.unwrap_or_default(), "supply chain delay updated");
        return EventOutcome::DelayRecorded { updated, inserted: false };
    }

    let Some(id) = SupplyEventId::parse(key) else {
        warn!(key, "supply chain delay without a usable event id, discarding");
        return EventOutcome::Discarded;
    };
    let mut row = SupplyChainEvent::new(id).with_link(key);
    row.delay_reason = reason.map(str::to_owned);
    match state.supply_chain.push(row) {
        Ok(_) => {
            info!(key, reason = reason.unwrap_or_default(), "supply chain delay recorded");
            EventOutcome::DelayRecorded { updated: 0, inserted: true }
        }
        Err(e) => {
            warn!(key, "could not record supply chain delay: {e}");
            EventOutcome::Discarded
        }
    }
}

fn fail_equipment(state: &mut ShipyardState, unit_id: &str) -> EventOutcome {
    let Some(unit) = state.resources.get(unit_id) else {
        warn!(unit = unit_id, "failure reported for unknown equipment");
        return EventOutcome::UnknownEquipment(unit_id.to_owned());
    };
    let (id, kind) = (unit.id().clone(), unit.kind);

    let holder = match state.resources.mark_out_of_service(unit_id) {
        Ok(holder) => holder,
        Err(StateError::UnknownResourceUnit(_)) => {
            return EventOutcome::UnknownEquipment(unit_id.to_owned());
        }
        Err(e) => {
            warn!(unit = unit_id, "could not take equipment out of service: {e}");
            return EventOutcome::Discarded;
        }
    };

    if let Some(owner) = &holder {
        if let Some(order) = state.work_orders.get_mut(owner.as_str()) {
            let slot = order.assignment_mut(kind);
            if slot.as_ref() == Some(&id) {
                *slot = None;
            }
        }
        error!(unit = %id, work_order = %owner, "equipment failure, unit withdrawn from work order");
    } else {
        error!(unit = %id, "equipment failure");
    }
    EventOutcome::EquipmentFailed { unit: id, released_from: holder }
}

fn repair_equipment(state: &mut ShipyardState, unit_id: &str) -> EventOutcome {
    match state.resources.restore(unit_id) {
        Ok(restored) => {
            let Some(unit) = state.resources.get(unit_id) else {
                return EventOutcome::UnknownEquipment(unit_id.to_owned());
            };
            if restored {
                info!(unit = unit_id, "equipment repaired");
            } else {
                warn!(unit = unit_id, "repair reported for equipment that was in service");
            }
            EventOutcome::EquipmentRepaired { unit: unit.id().clone(), restored }
        }
        Err(_) => {
            warn!(unit = unit_id, "repair reported for unknown equipment");
            EventOutcome::UnknownEquipment(unit_id.to_owned())
        }
    }
}
