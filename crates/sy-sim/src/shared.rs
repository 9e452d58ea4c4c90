//! `SharedSim` — a [`Sim`] shared between a background stepper and readers.
//!
//! Steps and reads take the same lock, so a reader never sees a half-applied
//! step.  Allocation and release in the resource pool happen inside a step
//! and are serialized by that lock as well.

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use parking_lot::Mutex;
use sy_events::ScheduledEvent;
use sy_state::OwnedSnapshot;
use tracing::info;

use crate::{RunState, Sim, SimObserver, SimResult, StepReport, StopHandle};

/// Cloneable, thread-safe handle to one engine.
#[derive(Clone)]
pub struct SharedSim {
    inner: Arc<Mutex<Sim>>,
    stop:  StopHandle,
}

impl SharedSim {
    pub fn new(sim: Sim) -> Self {
        let stop = sim.stop_handle();
        Self { inner: Arc::new(Mutex::new(sim)), stop }
    }

    /// Run one step under the lock.
    pub fn step(&self) -> StepReport {
        self.inner.lock().step()
    }

    /// Owned copy of the state, taken between steps.
    pub fn snapshot(&self) -> OwnedSnapshot {
        self.inner.lock().snapshot_owned()
    }

    pub fn add_event(&self, event: ScheduledEvent) -> SimResult<()> {
        self.inner.lock().add_event(event)
    }

    pub fn run_state(&self) -> RunState {
        self.inner.lock().run_state()
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut Sim) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Ask the background loop to end after its current step.
    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Step on a background thread until [`stop`](Self::stop) is called or
    /// `config.max_steps` steps have run.
    ///
    /// The lock is held for one step at a time and released during the
    /// inter-step delay, so readers interleave with the stepper.  The thread
    /// returns the observer when the loop ends.
    pub fn spawn<O>(&self, mut observer: O) -> JoinHandle<O>
    where
        O: SimObserver + Send + 'static,
    {
        let (max_steps, delay) = {
            let mut sim = self.inner.lock();
            sim.run_state = RunState::Running;
            (sim.config.max_steps, Duration::from_millis(sim.config.step_delay_ms))
        };
        self.stop.reset();

        let inner = Arc::clone(&self.inner);
        let stop = self.stop.clone();
        std::thread::spawn(move || {
            info!(?max_steps, "background stepping started");
            let mut ran = 0u64;
            while !stop.is_stopped() && max_steps.is_none_or(|max| ran < max) {
                inner.lock().step_with(&mut observer);
                ran += 1;
                if !delay.is_zero() {
                    std::thread::sleep(delay);
                } else {
                    std::thread::yield_now();
                }
            }

            let mut sim = inner.lock();
            sim.run_state = RunState::Stopped;
            info!(steps = ran, time = %sim.clock.current, "background stepping stopped");
            observer.on_sim_end(sim.clock.current);
            observer
        })
    }
}
