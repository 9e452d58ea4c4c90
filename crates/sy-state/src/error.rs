use sy_core::{ResourceKind, ResourceUnitId, SupplyEventId, WorkOrderId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("duplicate work order id {0}")]
    DuplicateWorkOrder(WorkOrderId),

    #[error("duplicate supply-chain event id {0}")]
    DuplicateSupplyEvent(SupplyEventId),

    #[error("duplicate resource unit id {0}")]
    DuplicateResourceUnit(ResourceUnitId),

    #[error("resource unit {0} not found")]
    UnknownResourceUnit(String),

    #[error("resource unit {unit} is a {actual}, not a {expected}")]
    KindMismatch {
        unit:     ResourceUnitId,
        expected: ResourceKind,
        actual:   ResourceKind,
    },

    #[error("work order {owner} needs {needed} more {kind} unit(s), {free} free")]
    InsufficientUnits {
        kind:   ResourceKind,
        owner:  WorkOrderId,
        needed: usize,
        free:   usize,
    },

    #[error("resource unit {unit} is unavailable ({reason})")]
    UnitUnavailable {
        unit:   ResourceUnitId,
        reason: String,
    },
}

pub type StateResult<T> = Result<T, StateError>;
