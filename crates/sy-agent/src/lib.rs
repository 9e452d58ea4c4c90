//! `sy-agent` — the agent trait and the shipyard's built-in agents.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`model`]       | `Agent` trait                                               |
//! | [`context`]     | `AgentContext<'a>` — tick plus `&mut ShipyardState`         |
//! | [`coordinator`] | `WorkOrderCoordinator` — status lifecycle                   |
//! | [`allocator`]   | `ResourceAllocator` — equips orders from the resource pool  |
//! | [`noop`]        | `NoopAgent` — placeholder that never acts                   |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                              |
//!
//! # Design notes
//!
//! Agents run sequentially inside one engine step, each with exclusive
//! access to the shared state.  Registration order matters: with the
//! default order (coordinator, then allocator) the allocator sees the
//! statuses the coordinator wrote in the same step.

pub mod allocator;
pub mod context;
pub mod coordinator;
pub mod error;
pub mod model;
pub mod noop;


pub use allocator::ResourceAllocator;
pub use context::AgentContext;
pub use coordinator::WorkOrderCoordinator;
pub use error::{AgentError, AgentResult};
pub use model::Agent;
pub use noop::NoopAgent;

use sy_core::SimPolicy;

/// The default agent line-up, in registration order.
pub fn default_agents(policy: &SimPolicy) -> Vec<Box<dyn Agent>> {
    vec![
        Box::new(WorkOrderCoordinator::new(policy)),
        Box::new(ResourceAllocator::new()),
    ]
}

/// Construct a built-in agent from its configuration name.
///
/// Accepts `work_order_coordinator` (or `coordinator`), `resource_allocator`
/// (or `allocator`) and `noop`.
pub fn agent_by_name(name: &str, policy: &SimPolicy) -> AgentResult<Box<dyn Agent>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "work_order_coordinator" | "coordinator" => Ok(Box::new(WorkOrderCoordinator::new(policy))),
        "resource_allocator" | "allocator"       => Ok(Box::new(ResourceAllocator::new())),
        "noop"                                   => Ok(Box::new(NoopAgent)),
        _ => Err(AgentError::UnknownKind(name.to_owned())),
    }
}

/// Construct agents for every name in `names`, preserving order.
///
/// An empty list is rejected: a run without agents never changes state.
pub fn agents_by_name<S: AsRef<str>>(
    names:  &[S],
    policy: &SimPolicy,
) -> AgentResult<Vec<Box<dyn Agent>>> {
    if names.is_empty() {
        return Err(AgentError::Config("agent list is empty".into()));
    }
    names.iter().map(|n| agent_by_name(n.as_ref(), policy)).collect()
}
