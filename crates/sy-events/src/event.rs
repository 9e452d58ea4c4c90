//! Scheduled events and their JSON form.
//!
//! # JSON schema
//!
//! ```json
//! { "type": "supply_chain_delay",         "time": 3, "event_id": "event1", "reason": "Customs Hold" }
//! { "type": "shipyard_equipment_failure", "time": 5, "equipment_id": "crane1" }
//! { "type": "shipyard_equipment_repair",  "time": 9, "equipment_id": "crane1" }
//! ```
//!
//! `time` may be an integer or a float; floats are rounded up to the next
//! whole tick and negative values clamp to 0.  A missing or `null` `time`
//! makes the event untimed (see `UntimedEventPolicy`).  Any other `type`, or
//! none at all, parses as [`EventKind::Unrecognized`]; a known type without
//! its id field parses as [`EventKind::Incomplete`].  Either way the queue
//! policy decides its fate.

use std::fmt;

use serde_json::{Map, Value};
use sy_core::Tick;

use crate::{EventError, EventResult};

pub const SUPPLY_CHAIN_DELAY: &str = "supply_chain_delay";
pub const EQUIPMENT_FAILURE: &str = "shipyard_equipment_failure";
pub const EQUIPMENT_REPAIR: &str = "shipyard_equipment_repair";

// ── EventKind ─────────────────────────────────────────────────────────────────

/// What an event does once it fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// Record a delay against a supply-chain row, addressed by its own ID or
    /// by the shipyard event it is linked to.
    SupplyChainDelay { event_id: String, reason: Option<String> },

    /// Take a resource unit out of service.
    EquipmentFailure { equipment_id: String },

    /// Return an out-of-service unit to the pool.
    EquipmentRepair { equipment_id: String },

    /// A known type missing the field it acts on.  Consumed without effect.
    Incomplete { event_type: String, field: String },

    /// A type this build does not handle; carries the raw type name.
    Unrecognized(Option<String>),
}

impl EventKind {
    /// The `type` string this kind is written as.
    pub fn type_name(&self) -> &str {
        match self {
            EventKind::SupplyChainDelay { .. } => SUPPLY_CHAIN_DELAY,
            EventKind::EquipmentFailure { .. } => EQUIPMENT_FAILURE,
            EventKind::EquipmentRepair { .. }  => EQUIPMENT_REPAIR,
            EventKind::Incomplete { event_type, .. } => event_type,
            EventKind::Unrecognized(Some(t))   => t,
            EventKind::Unrecognized(None)      => "<untyped>",
        }
    }

    #[inline]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, EventKind::Unrecognized(_))
    }
}

// ── ScheduledEvent ────────────────────────────────────────────────────────────

/// A time-triggered effect waiting to be applied to shared state.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledEvent {
    pub kind: EventKind,

    /// Earliest simulation time at which the event fires.  `None` = untimed.
    pub trigger: Option<Tick>,

    /// The full JSON object the event was parsed from (empty when built in
    /// code).  Kept for logging and for effects that want extra fields.
    pub payload: Map<String, Value>,
}

impl ScheduledEvent {
    /// An untimed event of the given kind.
    pub fn new(kind: EventKind) -> Self {
        Self { kind, trigger: None, payload: Map::new() }
    }

    /// Set the trigger time.
    pub fn at(mut self, tick: Tick) -> Self {
        self.trigger = Some(tick);
        self
    }

    pub fn supply_chain_delay(event_id: impl Into<String>, reason: Option<&str>) -> Self {
        Self::new(EventKind::SupplyChainDelay {
            event_id: event_id.into(),
            reason:   reason.map(str::to_owned),
        })
    }

    pub fn equipment_failure(equipment_id: impl Into<String>) -> Self {
        Self::new(EventKind::EquipmentFailure { equipment_id: equipment_id.into() })
    }

    pub fn equipment_repair(equipment_id: impl Into<String>) -> Self {
        Self::new(EventKind::EquipmentRepair { equipment_id: equipment_id.into() })
    }

    /// Parse one event from a JSON value.
    ///
    /// Fails only on structural problems: a non-object or an unusable
    /// `time`.
    pub fn from_json(value: &Value) -> EventResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| EventError::Malformed(format!("expected a JSON object, got {value}")))?;

        let type_name = obj.get("type").and_then(Value::as_str);
        let kind = match type_name {
            Some(SUPPLY_CHAIN_DELAY) => match optional_str(obj, "event_id") {
                Some(event_id) => EventKind::SupplyChainDelay {
                    event_id,
                    reason: optional_str(obj, "reason").or_else(|| optional_str(obj, "delay_reason")),
                },
                None => incomplete(SUPPLY_CHAIN_DELAY, "event_id"),
            },
            Some(EQUIPMENT_FAILURE) => match optional_str(obj, "equipment_id") {
                Some(equipment_id) => EventKind::EquipmentFailure { equipment_id },
                None => incomplete(EQUIPMENT_FAILURE, "equipment_id"),
            },
            Some(EQUIPMENT_REPAIR) => match optional_str(obj, "equipment_id") {
                Some(equipment_id) => EventKind::EquipmentRepair { equipment_id },
                None => incomplete(EQUIPMENT_REPAIR, "equipment_id"),
            },
            other => EventKind::Unrecognized(other.map(str::to_owned)),
        };

        Ok(Self {
            kind,
            trigger: parse_time(obj.get("time"))?,
            payload: obj.clone(),
        })
    }

    /// Parse a JSON string holding one event object.
    pub fn from_json_str(s: &str) -> EventResult<Self> {
        Self::from_json(&serde_json::from_str(s)?)
    }
}

impl fmt::Display for ScheduledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.type_name())?;
        match self.trigger {
            Some(t) => write!(f, "@{t}"),
            None    => f.write_str("@untimed"),
        }
    }
}

// ── Field helpers ─────────────────────────────────────────────────────────────

/// Trigger time from a `time` field.
fn parse_time(value: Option<&Value>) -> EventResult<Option<Tick>> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Ok(Some(Tick(u)))
            } else if n.as_i64().is_some() {
                // Only negative integers fail as_u64.
                Ok(Some(Tick::ZERO))
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() => Ok(Some(Tick(f.max(0.0).ceil() as u64))),
                    _ => Err(EventError::InvalidTime(n.to_string())),
                }
            }
        }
        other => Err(EventError::InvalidTime(other.to_string())),
    }
}

/// A string field, accepting numbers as their decimal text.
fn optional_str(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn incomplete(event_type: &str, field: &str) -> EventKind {
    EventKind::Incomplete { event_type: event_type.to_owned(), field: field.to_owned() }
}
