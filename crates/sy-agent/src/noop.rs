//! A no-op agent — never touches state.

use crate::{Agent, AgentContext};

/// An [`Agent`] that does nothing.
///
/// Useful as a placeholder in tests or to pad a registration order.
pub struct NoopAgent;

impl Agent for NoopAgent {
    fn name(&self) -> &str {
        "noop"
    }

    fn act(&mut self, _ctx: &mut AgentContext<'_>) {}
}
