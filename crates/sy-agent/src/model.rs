//! The `Agent` trait — the main extension point for user code.

use crate::AgentContext;

/// An autonomous unit invoked once per simulation step.
///
/// The engine calls [`act`][Self::act] on every registered agent in
/// registration order.  Agents communicate only through the shared state in
/// the context; they hold no copy of it between calls.
///
/// Data-integrity problems (missing IDs, unknown prerequisites, exhausted
/// resources) are logged and the affected row is left alone.  `act` has no
/// error channel because no such problem is fatal to a step.
///
/// # Example
///
/// ```rust,ignore
/// struct CountPending;
///
/// impl Agent for CountPending {
///     fn name(&self) -> &str { "count_pending" }
///
///     fn act(&mut self, ctx: &mut AgentContext<'_>) {
///         let n = ctx.state.work_orders.status_counts().pending;
///         tracing::info!(tick = %ctx.tick, pending = n);
///     }
/// }
/// ```
pub trait Agent: Send + 'static {
    /// Stable name used in logs and observer callbacks.
    fn name(&self) -> &str;

    /// Read and mutate shared state for one step.
    fn act(&mut self, ctx: &mut AgentContext<'_>);
}
