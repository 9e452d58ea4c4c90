//! `sy-state` — the shared state store mutated by agents and the engine.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                |
//! |------------------|---------------------------------------------------------|
//! | [`work_order`]   | `WorkOrder` row, `WorkOrderTable` (ID-indexed)          |
//! | [`supply_chain`] | `SupplyChainEvent` row, `SupplyChainTable`              |
//! | [`pool`]         | `ResourcePool`, `ResourceUnit`, `UnitState`, `PoolConfig` |
//! | [`store`]        | `ShipyardState` — the single mutable instance per run   |
//! | [`snapshot`]     | `Snapshot<'a>` (borrowed view), `OwnedSnapshot` (copy)  |
//! | [`error`]        | `StateError`, `StateResult<T>`                          |
//!
//! # Ownership model
//!
//! The engine owns exactly one `ShipyardState`.  Agents receive `&mut` access
//! for the duration of their `act` call and hold no copy between calls, so a
//! later agent in the same step always sees an earlier agent's writes.

pub mod error;
pub mod pool;
pub mod snapshot;
pub mod store;
pub mod supply_chain;
pub mod work_order;

#[cfg(test)]
mod tests;

pub use error::{StateError, StateResult};
pub use pool::{PoolConfig, ResourcePool, ResourceUnit, UnitState};
pub use snapshot::{OwnedSnapshot, Snapshot, StatusCounts};
pub use store::ShipyardState;
pub use supply_chain::{SupplyChainEvent, SupplyChainTable};
pub use work_order::{WorkOrder, WorkOrderTable};
