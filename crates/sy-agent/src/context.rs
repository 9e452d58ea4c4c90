//! Mutable state handle passed to every agent callback.

use sy_core::Tick;
use sy_state::ShipyardState;

/// What an [`Agent`][crate::Agent] sees during one `act` call.
///
/// Built by sy-sim once per agent per step.  `state` is the engine's single
/// `ShipyardState`, borrowed exclusively for the duration of the call, so an
/// agent observes every write made by the agents that ran before it in the
/// same step.
pub struct AgentContext<'a> {
    /// Simulation time at the start of the current step.
    pub tick: Tick,

    /// Simulated time units the current step covers.
    pub time_step: u64,

    pub state: &'a mut ShipyardState,
}

impl<'a> AgentContext<'a> {
    #[inline]
    pub fn new(tick: Tick, time_step: u64, state: &'a mut ShipyardState) -> Self {
        Self { tick, time_step, state }
    }
}
