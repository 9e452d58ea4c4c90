//! Unit tests for sy-events.

use serde_json::json;
use sy_core::{SimPolicy, Tick, UnknownEventPolicy, UntimedEventPolicy};

use crate::{EventError, EventKind, EventQueue, ScheduledEvent};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn failure(unit: &str, at: u64) -> ScheduledEvent {
    ScheduledEvent::equipment_failure(unit).at(Tick(at))
}

fn units(events: &[ScheduledEvent]) -> Vec<String> {
    events
        .iter()
        .map(|e| match &e.kind {
            EventKind::EquipmentFailure { equipment_id } => equipment_id.clone(),
            other => other.type_name().to_owned(),
        })
        .collect()
}

// ── JSON parsing ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn supply_chain_delay() {
        let ev = ScheduledEvent::from_json(&json!({
            "type": "supply_chain_delay", "time": 3, "event_id": "event1", "reason": "Customs Hold"
        }))
        .unwrap();
        assert_eq!(
            ev.kind,
            EventKind::SupplyChainDelay { event_id: "event1".into(), reason: Some("Customs Hold".into()) }
        );
        assert_eq!(ev.trigger, Some(Tick(3)));
        assert_eq!(ev.payload["event_id"], "event1");
    }

    #[test]
    fn delay_reason_alias_and_numeric_id() {
        let ev = ScheduledEvent::from_json(&json!({
            "type": "supply_chain_delay", "time": 1, "event_id": 7, "delay_reason": "Weather"
        }))
        .unwrap();
        assert_eq!(
            ev.kind,
            EventKind::SupplyChainDelay { event_id: "7".into(), reason: Some("Weather".into()) }
        );
    }

    #[test]
    fn equipment_events() {
        let fail = ScheduledEvent::from_json_str(
            r#"{"type": "shipyard_equipment_failure", "time": 2, "equipment_id": "crane1"}"#,
        )
        .unwrap();
        assert_eq!(fail.kind, EventKind::EquipmentFailure { equipment_id: "crane1".into() });

        let repair = ScheduledEvent::from_json_str(
            r#"{"type": "shipyard_equipment_repair", "time": 4, "equipment_id": "crane1"}"#,
        )
        .unwrap();
        assert_eq!(repair.kind, EventKind::EquipmentRepair { equipment_id: "crane1".into() });
    }

    #[test]
    fn time_forms() {
        let time = |v: serde_json::Value| {
            ScheduledEvent::from_json(&json!({ "type": "x", "time": v })).unwrap().trigger
        };
        assert_eq!(time(json!(5)), Some(Tick(5)));
        assert_eq!(time(json!(2.1)), Some(Tick(3)));
        assert_eq!(time(json!(4.0)), Some(Tick(4)));
        assert_eq!(time(json!(-3)), Some(Tick(0)));
        assert_eq!(time(json!(-0.5)), Some(Tick(0)));
        assert_eq!(time(json!(null)), None);

        let missing = ScheduledEvent::from_json(&json!({ "type": "x" })).unwrap();
        assert_eq!(missing.trigger, None);
    }

    #[test]
    fn non_numeric_time_rejected() {
        let err = ScheduledEvent::from_json(&json!({ "type": "x", "time": "soon" })).unwrap_err();
        assert!(matches!(err, EventError::InvalidTime(_)));
    }

    #[test]
    fn unknown_and_missing_type() {
        let ev = ScheduledEvent::from_json(&json!({ "type": "hull_breach", "time": 1 })).unwrap();
        assert_eq!(ev.kind, EventKind::Unrecognized(Some("hull_breach".into())));
        assert!(!ev.kind.is_recognized());

        let ev = ScheduledEvent::from_json(&json!({ "time": 1 })).unwrap();
        assert_eq!(ev.kind, EventKind::Unrecognized(None));
    }

    #[test]
    fn required_field_missing_parses_incomplete() {
        let ev = ScheduledEvent::from_json(&json!({ "type": "shipyard_equipment_failure", "time": 1 }))
            .unwrap();
        assert_eq!(
            ev.kind,
            EventKind::Incomplete {
                event_type: "shipyard_equipment_failure".into(),
                field:      "equipment_id".into(),
            }
        );
        assert_eq!(ev.to_string(), "shipyard_equipment_failure@T1");

        let ev = ScheduledEvent::from_json(&json!({ "type": "supply_chain_delay", "time": 1, "reason": "Weather" }))
            .unwrap();
        assert!(matches!(ev.kind, EventKind::Incomplete { ref field, .. } if field == "event_id"));
    }

    #[test]
    fn non_object_rejected() {
        assert!(matches!(
            ScheduledEvent::from_json(&json!([1, 2])).unwrap_err(),
            EventError::Malformed(_)
        ));
    }

    #[test]
    fn display() {
        assert_eq!(failure("crane1", 4).to_string(), "shipyard_equipment_failure@T4");
        assert_eq!(ScheduledEvent::equipment_repair("crane1").to_string(), "shipyard_equipment_repair@untimed");
    }
}

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue_tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn drains_only_due_events() {
        let mut q = EventQueue::new();
        q.enqueue(failure("a", 2)).unwrap();
        q.enqueue(failure("b", 5)).unwrap();

        assert!(q.drain_due(Tick(1)).is_empty());
        assert_eq!(units(&q.drain_due(Tick(2))), ["a"]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_trigger(), Some(Tick(5)));
    }

    #[test]
    fn late_drain_catches_up() {
        let mut q = EventQueue::new();
        q.enqueue(failure("a", 1)).unwrap();
        q.enqueue(failure("b", 3)).unwrap();
        assert_eq!(units(&q.drain_due(Tick(10))), ["a", "b"]);
        assert!(q.is_empty());
    }

    #[test]
    fn order_is_trigger_then_enqueue() {
        let mut q = EventQueue::new();
        q.enqueue(failure("late", 3)).unwrap();
        q.enqueue(failure("first", 1)).unwrap();
        q.enqueue(failure("second", 1)).unwrap();
        q.enqueue(failure("future", 9)).unwrap();
        assert_eq!(units(&q.drain_due(Tick(3))), ["first", "second", "late"]);
        assert_eq!(units(&q.iter().cloned().collect::<Vec<_>>()), ["future"]);
    }

    #[test]
    fn drained_once_only() {
        let mut q = EventQueue::new();
        q.enqueue(failure("a", 0)).unwrap();
        assert_eq!(q.drain_due(Tick(0)).len(), 1);
        assert!(q.drain_due(Tick(0)).is_empty());
        assert!(q.drain_due(Tick(100)).is_empty());
    }

    #[test]
    fn drain_at_max_tick() {
        let mut q = EventQueue::new();
        q.enqueue(failure("a", u64::MAX)).unwrap();
        assert_eq!(q.drain_due(Tick::MAX).len(), 1);
    }

    #[test]
    #[traced_test]
    fn untimed_retained_forever() {
        let mut q = EventQueue::new();
        q.enqueue(ScheduledEvent::equipment_failure("a")).unwrap();
        for t in [0, 1, 1_000, u64::MAX] {
            assert!(q.drain_due(Tick(t)).is_empty());
        }
        assert_eq!(q.len(), 1);
        assert_eq!(q.untimed_len(), 1);
        assert!(logs_contain("will never fire"));
    }

    #[test]
    fn untimed_rejected_under_strict_policy() {
        let policy = SimPolicy { untimed_events: UntimedEventPolicy::Reject, ..SimPolicy::default() };
        let mut q = EventQueue::with_policy(&policy);
        let err = q.enqueue(ScheduledEvent::equipment_failure("a")).unwrap_err();
        assert!(matches!(err, EventError::MissingTriggerTime(_)));
        assert!(q.is_empty());
    }

    #[test]
    fn untimed_fires_at_next_drain() {
        let policy =
            SimPolicy { untimed_events: UntimedEventPolicy::FireImmediately, ..SimPolicy::default() };
        let mut q = EventQueue::with_policy(&policy);
        q.enqueue(failure("timed", 0)).unwrap();
        q.enqueue(ScheduledEvent::equipment_failure("now")).unwrap();
        assert_eq!(units(&q.drain_due(Tick(0))), ["now", "timed"]);
        assert!(q.is_empty());
    }

    #[test]
    fn unknown_type_accepted_by_default() {
        let mut q = EventQueue::new();
        q.enqueue(ScheduledEvent::new(EventKind::Unrecognized(Some("x".into()))).at(Tick(1)))
            .unwrap();
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn unknown_type_rejected_under_strict_policy() {
        let policy = SimPolicy { unknown_events: UnknownEventPolicy::Reject, ..SimPolicy::default() };
        let mut q = EventQueue::with_policy(&policy);
        let err = q
            .enqueue(ScheduledEvent::new(EventKind::Unrecognized(Some("x".into()))).at(Tick(1)))
            .unwrap_err();
        assert!(matches!(err, EventError::UnknownType(t) if t == "x"));
        assert!(q.is_empty());
    }

    #[test]
    fn incomplete_event_accepted_by_default() {
        let mut q = EventQueue::new();
        q.enqueue(ScheduledEvent::from_json(&json!({ "type": "supply_chain_delay", "time": 1 })).unwrap())
            .unwrap();
        assert_eq!(q.drain_due(Tick(1)).len(), 1);
    }

    #[test]
    fn incomplete_event_rejected_under_strict_policy() {
        let policy = SimPolicy { unknown_events: UnknownEventPolicy::Reject, ..SimPolicy::default() };
        let mut q = EventQueue::with_policy(&policy);
        let ev = ScheduledEvent::from_json(&json!({ "type": "shipyard_equipment_repair", "time": 1 })).unwrap();
        match q.enqueue(ev).unwrap_err() {
            EventError::Malformed(msg) => assert!(msg.contains("equipment_id"), "{msg}"),
            other => panic!("wrong error: {other:?}"),
        }
        assert!(q.is_empty());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use super::*;
    use crate::{load_events_json, load_events_reader};

    #[test]
    fn array_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[
                {"type": "supply_chain_delay", "time": 2, "event_id": "event3", "reason": "Customs Hold"},
                {"type": "shipyard_equipment_failure", "time": 4, "equipment_id": "crane1"}
            ]"#,
        )
        .unwrap();
        let events = load_events_json(&path).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].trigger, Some(Tick(4)));
    }

    #[test]
    fn single_object_file() {
        let events =
            load_events_reader(Cursor::new(r#"{"type": "shipyard_equipment_repair", "time": 1, "equipment_id": "agv2"}"#))
                .unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn bad_entry_names_its_index() {
        let err = load_events_reader(Cursor::new(
            r#"[{"type": "x", "time": 1}, 42]"#,
        ))
        .unwrap_err();
        match err {
            EventError::Malformed(msg) => assert!(msg.starts_with("event 1:"), "{msg}"),
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn entry_without_id_still_loads() {
        let events = load_events_reader(Cursor::new(
            r#"[{"type": "supply_chain_delay", "time": 1}, {"type": "shipyard_equipment_failure", "time": 2, "equipment_id": "crane1"}]"#,
        ))
        .unwrap();
        assert_eq!(events.len(), 2);
        assert!(!matches!(events[0].kind, EventKind::SupplyChainDelay { .. }));
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(load_events_reader(Cursor::new("[")).unwrap_err(), EventError::Json(_)));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_events_json(&dir.path().join("nope.json")).unwrap_err(),
            EventError::Io(_)
        ));
    }
}
