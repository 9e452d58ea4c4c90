//! JSON event-file loader.
//!
//! The file holds a JSON array of event objects in the schema described in
//! [`crate::event`]:
//!
//! ```json
//! [
//!   { "type": "supply_chain_delay", "time": 2, "event_id": "event3", "reason": "Customs Hold" },
//!   { "type": "shipyard_equipment_failure", "time": 4, "equipment_id": "crane1" }
//! ]
//! ```
//!
//! A single top-level object is accepted as a one-event file.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::{EventError, EventResult, ScheduledEvent};

/// Load events from a JSON file.
pub fn load_events_json(path: &Path) -> EventResult<Vec<ScheduledEvent>> {
    load_events_reader(std::fs::File::open(path)?)
}

/// Like [`load_events_json`] but accepts any `Read` source.
pub fn load_events_reader<R: Read>(reader: R) -> EventResult<Vec<ScheduledEvent>> {
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                ScheduledEvent::from_json(item).map_err(|e| match e {
                    EventError::Malformed(msg) => EventError::Malformed(format!("event {i}: {msg}")),
                    other => other,
                })
            })
            .collect(),
        obj @ Value::Object(_) => Ok(vec![ScheduledEvent::from_json(&obj)?]),
        other => Err(EventError::Malformed(format!(
            "expected an array of events, got {}",
            type_label(&other)
        ))),
    }
}

fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Null      => "null",
        Value::Bool(_)   => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_)  => "an array",
        Value::Object(_) => "an object",
    }
}
