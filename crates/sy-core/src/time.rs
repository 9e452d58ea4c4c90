//! Discrete simulation time: ticks, the engine clock, and run configuration.
//!
//! # Design
//!
//! Simulated time is an integer `Tick` counter, independent of wall-clock
//! time.  Each engine step advances it by a fixed `time_step`:
//!
//!   current_time(after N steps) = N * time_step
//!
//! Using an integer clock keeps event trigger comparisons exact.

use std::fmt;

use crate::{SimPolicy, TwinError, TwinResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation time value.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
    pub const MAX: Tick = Tick(u64::MAX);

    /// Return the tick `n` units after `self`, saturating at [`Tick::MAX`].
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        self.offset(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The engine's clock: current time plus the fixed step size.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated time units added per step.  Always > 0.
    pub time_step: u64,
    /// The current time, advanced by `SimClock::advance()` each step.
    pub current: Tick,
    /// Number of completed steps.
    pub steps: u64,
}

impl SimClock {
    /// Create a clock at time zero.
    pub fn new(time_step: u64) -> Self {
        Self {
            time_step,
            current: Tick::ZERO,
            steps: 0,
        }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current = self.current.offset(self.time_step);
        self.steps += 1;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (step {})", self.current, self.steps)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Settings for one simulation run.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the simulation builder.  Every field has a default, so a config file only
/// needs to name what it overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Simulated time units per step.  Default: 1.
    pub time_step: u64,

    /// Upper bound on steps for `Sim::start`.  `None` runs until stopped.
    pub max_steps: Option<u64>,

    /// Wall-clock pause between steps inside `Sim::start`, in milliseconds.
    pub step_delay_ms: u64,

    /// Emit an observer snapshot every N steps.  0 disables snapshots.
    pub snapshot_interval: u64,

    /// Behavior switches for the open policy questions.
    pub policy: SimPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_step:         1,
            max_steps:         None,
            step_delay_ms:     0,
            snapshot_interval: 1,
            policy:            SimPolicy::default(),
        }
    }
}

impl SimConfig {
    /// Config with the given step size and defaults for everything else.
    pub fn with_time_step(time_step: u64) -> Self {
        Self { time_step, ..Self::default() }
    }

    pub fn validate(&self) -> TwinResult<()> {
        if self.time_step == 0 {
            return Err(TwinError::Config("time_step must be greater than zero".into()));
        }
        Ok(())
    }

    /// A clock at time zero stepping by `time_step`.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.time_step)
    }
}
