//! The `Sim` struct and its step loop.

use std::time::Duration;

use serde_json::Value;
use sy_agent::{Agent, AgentContext};
use sy_core::{SimClock, SimConfig, Tick};
use sy_events::{EventQueue, ScheduledEvent};
use sy_state::{OwnedSnapshot, ShipyardState, Snapshot, StatusCounts};
use tracing::{debug, info, info_span};

use crate::{NoopObserver, RunState, SimObserver, SimResult, StopHandle, apply_event};

// ── StepReport ────────────────────────────────────────────────────────────────

/// Summary of one completed step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Steps completed so far, including this one.
    pub step: u64,
    /// Clock value while agents ran and events drained.
    pub started_at: Tick,
    /// Clock value after the advance.
    pub ended_at: Tick,
    pub events_applied: usize,
    /// Events still queued after the drain, untimed ones included.
    pub events_queued: usize,
    pub counts: StatusCounts,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// Owns the single [`ShipyardState`], the event queue, and the agents.  Each
/// step:
///
/// 1. **Agents**: call [`Agent::act`] on every agent in registration order,
///    each with exclusive access to the state.
/// 2. **Events**: drain events due at the current time (trigger <= now) and
///    apply them in trigger, then enqueue, order.
/// 3. **Clock**: advance `current_time` by `time_step`.
///
/// After `N` steps with step size `S`, `current_time == N * S`.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or [`Sim::new`].
pub struct Sim {
    pub config: SimConfig,

    pub clock: SimClock,

    /// The shared state every agent and event mutates.
    pub state: ShipyardState,

    pub events: EventQueue,

    pub(crate) agents: Vec<Box<dyn Agent>>,

    pub(crate) run_state: RunState,

    pub(crate) stop: StopHandle,
}

impl Sim {
    /// An engine with the default pool, policies, and agents.
    pub fn new(
        work_orders:  sy_state::WorkOrderTable,
        supply_chain: sy_state::SupplyChainTable,
        time_step:    u64,
    ) -> SimResult<Self> {
        crate::SimBuilder::new(work_orders, supply_chain).time_step(time_step).build()
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Run one step with no observer.
    pub fn step(&mut self) -> StepReport {
        self.step_with(&mut NoopObserver)
    }

    /// Run one step, reporting to `observer`.
    pub fn step_with<O: SimObserver + ?Sized>(&mut self, observer: &mut O) -> StepReport {
        let now = self.clock.current;
        let span = info_span!("step", tick = now.0, step = self.clock.steps + 1);
        let _guard = span.enter();

        observer.on_step_start(now);

        for agent in &mut self.agents {
            let mut ctx = AgentContext::new(now, self.clock.time_step, &mut self.state);
            agent.act(&mut ctx);
            observer.on_agent_done(now, agent.name());
        }

        let due = self.events.drain_due(now);
        for event in &due {
            let outcome = apply_event(event, &mut self.state);
            debug!(%event, ?outcome, "event applied");
            observer.on_event_applied(now, event, &outcome);
        }

        self.clock.advance();

        let report = StepReport {
            step:           self.clock.steps,
            started_at:     now,
            ended_at:       self.clock.current,
            events_applied: due.len(),
            events_queued:  self.events.len(),
            counts:         self.state.work_orders.status_counts(),
        };
        info!(
            pending = report.counts.pending,
            in_progress = report.counts.in_progress,
            delayed = report.counts.delayed,
            completed = report.counts.completed,
            events = report.events_applied,
            "step complete"
        );
        observer.on_step_end(&report);

        let interval = self.config.snapshot_interval;
        if interval > 0 && self.clock.steps.is_multiple_of(interval) {
            observer.on_snapshot(Snapshot::new(&self.clock, &self.state));
        }
        report
    }

    /// Run exactly `n` steps from the current position, ignoring
    /// `max_steps` and the stop flag.
    pub fn run_steps<O: SimObserver + ?Sized>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_with(observer);
        }
    }

    /// Step until [`stop`](Self::stop) is called or `config.max_steps` steps
    /// have run in this call.
    ///
    /// Blocks the caller.  The stop flag is re-armed on entry and checked once
    /// per iteration, so a stop requested from an observer or another thread
    /// takes effect after the step in progress.  Sleeps `step_delay_ms`
    /// between steps.  Returns the number of steps run.
    pub fn start<O: SimObserver + ?Sized>(&mut self, observer: &mut O) -> u64 {
        self.stop.reset();
        self.run_state = RunState::Running;
        info!(time = %self.clock.current, max_steps = ?self.config.max_steps, "simulation started");

        let delay = Duration::from_millis(self.config.step_delay_ms);
        let mut ran = 0;
        while !self.stop.is_stopped() && self.config.max_steps.is_none_or(|max| ran < max) {
            self.step_with(observer);
            ran += 1;
            if !delay.is_zero() && !self.stop.is_stopped() {
                std::thread::sleep(delay);
            }
        }

        self.run_state = RunState::Stopped;
        info!(steps = ran, time = %self.clock.current, "simulation stopped");
        observer.on_sim_end(self.clock.current);
        ran
    }

    /// Request that a running [`start`](Self::start) loop end.
    pub fn stop(&self) {
        info!("stop requested");
        self.stop.stop();
    }

    /// A handle that can stop the loop from an observer or another thread.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    // ── Events ────────────────────────────────────────────────────────────

    /// Queue an event.  Fails only under the stricter queue policies.
    pub fn add_event(&mut self, event: ScheduledEvent) -> SimResult<()> {
        info!(%event, "event added to queue");
        self.events.enqueue(event)?;
        Ok(())
    }

    /// Parse and queue an event in its JSON form
    /// (`{"type": ..., "time": ..., ...}`).
    pub fn add_event_json(&mut self, value: &Value) -> SimResult<()> {
        self.add_event(ScheduledEvent::from_json(value)?)
    }

    // ── Views ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn current_time(&self) -> Tick {
        self.clock.current
    }

    /// Borrowed, read-only view of the current state.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.clock, &self.state)
    }

    /// Deep copy of the current state.
    pub fn snapshot_owned(&self) -> OwnedSnapshot {
        self.snapshot().cloned()
    }

    /// Registered agent names in execution order.
    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name()).collect()
    }
}
