//! Policy switches for behavior that has no single right answer.
//!
//! Defaults keep the permissive behavior; the alternatives
//! are stricter variants a deployment can opt into.

/// What to do with an event that carries no trigger time.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UntimedEventPolicy {
    /// Keep it queued.  It never becomes due.
    #[default]
    Retain,
    /// Refuse it at enqueue time.
    Reject,
    /// Treat it as due at the next drain.
    FireImmediately,
}

/// What to do with an event whose type is not recognized, or whose known
/// type lacks the field it acts on.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnknownEventPolicy {
    /// Accept it; when due, log one warning and drop it.
    #[default]
    DiscardWithWarning,
    /// Refuse it at enqueue time.
    Reject,
}

/// All policy switches, grouped for `SimConfig`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimPolicy {
    pub untimed_events: UntimedEventPolicy,
    pub unknown_events: UnknownEventPolicy,
    /// When `true`, a linked supply-chain delay moves any order to
    /// `Delayed`, including one already `Completed`.
    pub redelay_completed: bool,
}

impl Default for SimPolicy {
    fn default() -> Self {
        Self {
            untimed_events:    UntimedEventPolicy::Retain,
            unknown_events:    UnknownEventPolicy::DiscardWithWarning,
            redelay_completed: true,
        }
    }
}
