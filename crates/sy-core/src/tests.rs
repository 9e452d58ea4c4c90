//! Unit tests for sy-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ResourceUnitId, WorkOrderId};

    #[test]
    fn parse_trims_whitespace() {
        let id = WorkOrderId::parse("  WO-7 ").unwrap();
        assert_eq!(id.as_str(), "WO-7");
    }

    #[test]
    fn blank_is_none() {
        assert!(WorkOrderId::parse("").is_none());
        assert!(WorkOrderId::parse("   ").is_none());
    }

    #[test]
    fn display_is_raw_text() {
        assert_eq!(ResourceUnitId::parse("crane1").unwrap().to_string(), "crane1");
    }

    #[test]
    fn borrow_as_str_for_map_lookup() {
        let mut map = std::collections::HashMap::new();
        map.insert(WorkOrderId::parse("7").unwrap(), 1);
        assert_eq!(map.get("7"), Some(&1));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn clock_advances_by_step() {
        let mut clock = SimClock::new(5);
        for _ in 0..4 {
            clock.advance();
        }
        assert_eq!(clock.current, Tick(20));
        assert_eq!(clock.steps, 4);
    }

    #[test]
    fn tick_offset_saturates() {
        assert_eq!(Tick::MAX.offset(10), Tick::MAX);
        assert_eq!(Tick(3) + 4, Tick(7));
    }

    #[test]
    fn zero_time_step_rejected() {
        assert!(SimConfig::with_time_step(0).validate().is_err());
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn display() {
        let mut clock = SimClock::new(2);
        clock.advance();
        assert_eq!(clock.to_string(), "T2 (step 1)");
    }
}

#[cfg(test)]
mod status {
    use crate::{ResourceKind, TwinError, WorkOrderStatus};

    #[test]
    fn parses_dataset_labels() {
        assert_eq!("Pending".parse::<WorkOrderStatus>().unwrap(), WorkOrderStatus::Pending);
        assert_eq!("In Progress".parse::<WorkOrderStatus>().unwrap(), WorkOrderStatus::InProgress);
        assert_eq!("in_progress".parse::<WorkOrderStatus>().unwrap(), WorkOrderStatus::InProgress);
        assert_eq!("COMPLETED".parse::<WorkOrderStatus>().unwrap(), WorkOrderStatus::Completed);
    }

    #[test]
    fn unknown_status_errors() {
        assert_eq!(
            "Cancelled".parse::<WorkOrderStatus>(),
            Err(TwinError::UnknownStatus("Cancelled".into()))
        );
    }

    #[test]
    fn label_round_trips() {
        for status in WorkOrderStatus::ALL {
            assert_eq!(status.label().parse::<WorkOrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn resource_kind_plural_and_case() {
        assert_eq!("Cranes".parse::<ResourceKind>().unwrap(), ResourceKind::Crane);
        assert_eq!("AGV".parse::<ResourceKind>().unwrap(), ResourceKind::Agv);
        assert!("tugboat".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn only_pending_and_in_progress_are_active() {
        assert!(WorkOrderStatus::Pending.is_active());
        assert!(WorkOrderStatus::InProgress.is_active());
        assert!(!WorkOrderStatus::Delayed.is_active());
        assert!(!WorkOrderStatus::Completed.is_active());
    }
}
