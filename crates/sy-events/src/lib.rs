//! `sy-events` — scheduled events and the event queue.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`event`]  | `ScheduledEvent`, `EventKind`, JSON parsing                   |
//! | [`queue`]  | `EventQueue` — trigger-ordered, policy-aware                  |
//! | [`loader`] | `load_events_json` — JSON array files                         |
//! | [`error`]  | `EventError`, `EventResult<T>`                                |
//!
//! Applying an event to shared state is the engine's job (sy-sim); this
//! crate only decides *when* an event is due.

pub mod error;
pub mod event;
pub mod loader;
pub mod queue;

#[cfg(test)]
mod tests;

pub use error::{EventError, EventResult};
pub use event::{EventKind, ScheduledEvent};
pub use loader::{load_events_json, load_events_reader};
pub use queue::EventQueue;
