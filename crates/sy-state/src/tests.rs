//! Unit tests for sy-state.

use sy_core::{ResourceKind, ResourceUnitId, SimClock, SupplyEventId, WorkOrderId, WorkOrderStatus};

use crate::{
    PoolConfig, ResourcePool, ShipyardState, Snapshot, StateError, SupplyChainEvent,
    SupplyChainTable, UnitState, WorkOrder, WorkOrderTable,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn wo(id: &str) -> WorkOrderId {
    WorkOrderId::parse(id).unwrap()
}

fn unit(id: &str) -> ResourceUnitId {
    ResourceUnitId::parse(id).unwrap()
}

fn sce(id: &str) -> SupplyEventId {
    SupplyEventId::parse(id).unwrap()
}

// ── WorkOrderTable ────────────────────────────────────────────────────────────

#[cfg(test)]
mod work_order_tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        let table = WorkOrderTable::from_rows([
            WorkOrder::new(wo("1")),
            WorkOrder::new(wo("2")).with_status(WorkOrderStatus::Completed),
        ])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("2").unwrap().status, WorkOrderStatus::Completed);
        assert_eq!(table.position("1"), Some(0));
        assert!(table.get("3").is_none());
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = WorkOrderTable::from_rows([WorkOrder::new(wo("1")), WorkOrder::new(wo("1"))])
            .unwrap_err();
        assert_eq!(err, StateError::DuplicateWorkOrder(wo("1")));
    }

    #[test]
    fn unidentified_rows_are_kept_but_not_indexed() {
        let table = WorkOrderTable::from_rows([
            WorkOrder::unidentified(),
            WorkOrder::unidentified(),
            WorkOrder::new(wo("7")),
        ])
        .unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.row(0).id().is_none());
        assert_eq!(table.position("7"), Some(2));
    }

    #[test]
    fn new_order_defaults() {
        let order = WorkOrder::new(wo("1"));
        assert_eq!(order.status, WorkOrderStatus::Pending);
        assert!(order.linked_event.is_none());
        assert!(!order.holds_resources());
        assert!(order.required_resources.is_empty());
        assert!(order.prerequisite_tasks.is_empty());
    }

    #[test]
    fn assignment_slots_map_to_fields() {
        let mut order = WorkOrder::new(wo("1"));
        *order.assignment_mut(ResourceKind::Agv) = Some(unit("agv2"));
        assert_eq!(order.agv_id, Some(unit("agv2")));
        assert_eq!(order.assignment(ResourceKind::Agv), Some(&unit("agv2")));
        assert!(order.assignment(ResourceKind::Crane).is_none());
        assert!(order.holds_resources());
    }

    #[test]
    fn status_counts() {
        let table = WorkOrderTable::from_rows([
            WorkOrder::new(wo("1")),
            WorkOrder::new(wo("2")),
            WorkOrder::new(wo("3")).with_status(WorkOrderStatus::Delayed),
        ])
        .unwrap();
        let counts = table.status_counts();
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.delayed, 1);
        assert_eq!(counts.total(), 3);
    }
}

// ── SupplyChainTable ──────────────────────────────────────────────────────────

#[cfg(test)]
mod supply_chain_tests {
    use super::*;

    fn table() -> SupplyChainTable {
        SupplyChainTable::from_rows([
            SupplyChainEvent::new(sce("sc1")).with_link("event1").with_reason("Supply Delay"),
            SupplyChainEvent::new(sce("sc2")).with_link("event2").with_reason("Equipment Failure"),
            SupplyChainEvent::new(sce("sc3")).with_link("event1").with_reason("Second"),
        ])
        .unwrap()
    }

    #[test]
    fn find_linked_returns_first_match() {
        let t = table();
        assert_eq!(t.find_linked("event1").unwrap().id().as_str(), "sc1");
        assert!(t.find_linked("event9").is_none());
    }

    #[test]
    fn matching_covers_id_and_link() {
        let mut t = table();
        assert_eq!(t.matching_mut("event1").count(), 2);
        assert_eq!(t.matching_mut("sc2").count(), 1);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut t = table();
        let err = t.push(SupplyChainEvent::new(sce("sc1"))).unwrap_err();
        assert_eq!(err, StateError::DuplicateSupplyEvent(sce("sc1")));
    }
}

// ── ResourcePool ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod pool_tests {
    use super::*;

    fn pool() -> ResourcePool {
        ResourcePool::from_config(&PoolConfig { cranes: 2, agvs: 1, forklifts: 0 })
    }

    #[test]
    fn from_config_numbers_units() {
        let p = pool();
        assert_eq!(p.len(), 3);
        assert_eq!(p.get("crane2").unwrap().kind, ResourceKind::Crane);
        assert_eq!(p.get("agv1").unwrap().kind, ResourceKind::Agv);
        assert!(p.get("forklift1").is_none());
    }

    #[test]
    fn allocate_takes_first_free_in_order() {
        let mut p = pool();
        assert_eq!(p.allocate(ResourceKind::Crane, &wo("a")), Some(unit("crane1")));
        assert_eq!(p.allocate(ResourceKind::Crane, &wo("b")), Some(unit("crane2")));
        assert_eq!(p.allocate(ResourceKind::Crane, &wo("c")), None);
        assert_eq!(p.allocate(ResourceKind::Forklift, &wo("c")), None);
    }

    #[test]
    fn release_frees_and_reports_owner() {
        let mut p = pool();
        p.allocate(ResourceKind::Crane, &wo("a"));
        assert_eq!(p.release("crane1"), Some(wo("a")));
        assert!(p.get("crane1").unwrap().is_free());
        // Releasing a free unit is a no-op.
        assert_eq!(p.release("crane1"), None);
        assert_eq!(p.release("nope"), None);
    }

    #[test]
    fn release_all_only_touches_owner() {
        let mut p = pool();
        p.allocate(ResourceKind::Crane, &wo("a"));
        p.allocate(ResourceKind::Crane, &wo("b"));
        p.allocate(ResourceKind::Agv, &wo("a"));
        let released = p.release_all("a");
        assert_eq!(released, vec![unit("crane1"), unit("agv1")]);
        assert!(p.get("crane2").unwrap().is_held_by("b"));
    }

    #[test]
    fn available_to_counts_free_and_owned() {
        let mut p = pool();
        p.allocate(ResourceKind::Crane, &wo("a"));
        assert_eq!(p.free_count(ResourceKind::Crane), 1);
        assert_eq!(p.available_to(ResourceKind::Crane, "a"), 2);
        assert_eq!(p.available_to(ResourceKind::Crane, "b"), 1);
    }

    #[test]
    fn out_of_service_blocks_allocation_until_restored() {
        let mut p = pool();
        p.allocate(ResourceKind::Agv, &wo("a"));
        assert_eq!(p.mark_out_of_service("agv1").unwrap(), Some(wo("a")));
        assert_eq!(p.get("agv1").unwrap().state, UnitState::OutOfService);
        assert_eq!(p.allocate(ResourceKind::Agv, &wo("b")), None);
        // Release does not resurrect a failed unit.
        assert_eq!(p.release("agv1"), None);
        assert_eq!(p.get("agv1").unwrap().state, UnitState::OutOfService);

        assert!(p.restore("agv1").unwrap());
        assert!(!p.restore("agv1").unwrap());
        assert_eq!(p.allocate(ResourceKind::Agv, &wo("b")), Some(unit("agv1")));
    }

    #[test]
    fn unknown_unit_errors() {
        let mut p = pool();
        assert_eq!(
            p.mark_out_of_service("crane9"),
            Err(StateError::UnknownResourceUnit("crane9".into()))
        );
    }

    #[test]
    fn claim_rules() {
        let mut p = pool();
        p.claim("crane1", ResourceKind::Crane, &wo("a")).unwrap();
        // Idempotent for the same owner.
        p.claim("crane1", ResourceKind::Crane, &wo("a")).unwrap();
        assert!(matches!(
            p.claim("crane1", ResourceKind::Crane, &wo("b")),
            Err(StateError::UnitUnavailable { .. })
        ));
        assert!(matches!(
            p.claim("agv1", ResourceKind::Crane, &wo("b")),
            Err(StateError::KindMismatch { .. })
        ));
    }

    #[test]
    fn reserve_tops_up_to_quantity() {
        let mut p = pool();
        p.allocate(ResourceKind::Crane, &wo("a"));
        assert_eq!(p.reserve(ResourceKind::Crane, &wo("a"), 2).unwrap(), vec![unit("crane2")]);
        // Already holding enough.
        assert!(p.reserve(ResourceKind::Crane, &wo("a"), 2).unwrap().is_empty());
        assert!(p.reserve(ResourceKind::Forklift, &wo("a"), 0).unwrap().is_empty());
    }

    #[test]
    fn reserve_is_all_or_nothing() {
        let mut p = pool();
        p.allocate(ResourceKind::Crane, &wo("a"));
        assert_eq!(
            p.reserve(ResourceKind::Crane, &wo("b"), 2),
            Err(StateError::InsufficientUnits {
                kind:   ResourceKind::Crane,
                owner:  wo("b"),
                needed: 2,
                free:   1,
            })
        );
        assert!(p.get("crane2").unwrap().is_free());
    }

    #[test]
    fn units_added_after_config_are_indexed() {
        let mut p = pool();
        p.add_unit(unit("forklift1"), ResourceKind::Forklift).unwrap();
        assert_eq!(p.len(), 4);
        assert_eq!(p.get("forklift1").unwrap().kind, ResourceKind::Forklift);
        assert_eq!(p.get("crane1").unwrap().kind, ResourceKind::Crane);
    }

    #[test]
    fn duplicate_unit_rejected() {
        let mut p = pool();
        assert_eq!(
            p.add_unit(unit("crane1"), ResourceKind::Crane),
            Err(StateError::DuplicateResourceUnit(unit("crane1")))
        );
    }
}

// ── ShipyardState ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod store_tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    #[traced_test]
    fn reconcile_claims_valid_and_clears_invalid() {
        let mut a = WorkOrder::new(wo("a"));
        a.crane_id = Some(unit("crane1"));
        a.agv_id = Some(unit("agv7")); // unknown unit
        let mut b = WorkOrder::new(wo("b"));
        b.crane_id = Some(unit("crane1")); // already claimed by a
        let mut nameless = WorkOrder::unidentified();
        nameless.forklift_id = Some(unit("forklift1"));

        let orders = WorkOrderTable::from_rows([a, b, nameless]).unwrap();
        let pool = ResourcePool::from_config(&PoolConfig::default());
        let mut state = ShipyardState::new(orders, SupplyChainTable::new(), pool);

        assert_eq!(state.reconcile_assignments(), 2);
        assert!(state.resources.get("crane1").unwrap().is_held_by("a"));
        assert_eq!(state.work_orders.get("a").unwrap().crane_id, Some(unit("crane1")));
        assert!(state.work_orders.get("a").unwrap().agv_id.is_none());
        assert!(state.work_orders.get("b").unwrap().crane_id.is_none());
        // The unidentified row keeps its field and claims nothing.
        assert!(state.work_orders.row(2).forklift_id.is_some());
        assert!(state.resources.get("forklift1").unwrap().is_free());
        assert!(logs_contain("clearing assignment"));
    }

    #[test]
    fn snapshot_copy_is_detached() {
        let orders = WorkOrderTable::from_rows([WorkOrder::new(wo("1"))]).unwrap();
        let mut state = ShipyardState::new(orders, SupplyChainTable::new(), ResourcePool::new());
        let mut clock = SimClock::new(3);
        clock.advance();

        let copy = Snapshot::new(&clock, &state).cloned();
        state.work_orders.get_mut("1").unwrap().status = WorkOrderStatus::Completed;

        assert_eq!(copy.current_time.0, 3);
        assert_eq!(copy.steps, 1);
        assert_eq!(copy.work_orders[0].status, WorkOrderStatus::Pending);
        assert_eq!(copy.counts.pending, 1);
        let fresh = Snapshot::new(&clock, &state);
        assert_eq!(fresh.status_counts().completed, 1);
    }
}
