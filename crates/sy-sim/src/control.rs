//! Run-state tracking and cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Lifecycle of a [`Sim`][crate::Sim]: `Idle → Running → Stopped`.
///
/// A stopped sim may be started again; it goes back to `Running`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Cloneable stop flag shared between a running loop and whoever wants to
/// end it.
///
/// The loop checks the flag once per iteration, so a stop takes effect after
/// at most one more step.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop after the current step.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Re-arm the flag before a new run.
    pub(crate) fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }
}
