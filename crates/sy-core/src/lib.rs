//! `sy-core` — foundational types for the shipyard digital twin.
//!
//! This crate is a dependency of every other `sy-*` crate.  It has no `sy-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `WorkOrderId`, `SupplyEventId`, `ResourceUnitId`          |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                           |
//! | [`status`]  | `WorkOrderStatus`, `ResourceKind`                         |
//! | [`policy`]  | `SimPolicy`, `UntimedEventPolicy`, `UnknownEventPolicy`   |
//! | [`error`]   | `TwinError`, `TwinResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod policy;
pub mod status;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TwinError, TwinResult};
pub use ids::{ResourceUnitId, SupplyEventId, WorkOrderId};
pub use policy::{SimPolicy, UnknownEventPolicy, UntimedEventPolicy};
pub use status::{ResourceKind, WorkOrderStatus};
pub use time::{SimClock, SimConfig, Tick};
