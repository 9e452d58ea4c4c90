//! Work-order lifecycle status and resource kinds.

use std::fmt;
use std::str::FromStr;

use crate::TwinError;

// ── WorkOrderStatus ───────────────────────────────────────────────────────────

/// Lifecycle state of a work order.
///
/// ```text
/// Pending ──► InProgress ──► Completed
///    │            │              │
///    └────────────┴──────────────┴──► Delayed   (linked supply-chain delay)
/// ```
///
/// At most one transition happens per step, so an order never jumps from
/// `Pending` to `Completed` in a single step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkOrderStatus {
    #[default]
    Pending,
    InProgress,
    Delayed,
    Completed,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 4] = [
        WorkOrderStatus::Pending,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Delayed,
        WorkOrderStatus::Completed,
    ];

    /// Label used in datasets and output files.
    pub fn label(self) -> &'static str {
        match self {
            WorkOrderStatus::Pending    => "Pending",
            WorkOrderStatus::InProgress => "In Progress",
            WorkOrderStatus::Delayed    => "Delayed",
            WorkOrderStatus::Completed  => "Completed",
        }
    }

    /// `true` for orders the allocator should equip.
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, WorkOrderStatus::Pending | WorkOrderStatus::InProgress)
    }
}

impl fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkOrderStatus {
    type Err = TwinError;

    /// Accepts the dataset labels case-insensitively, with or without the
    /// space in "In Progress" (`in_progress` and `in-progress` also parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "pending"    => Ok(WorkOrderStatus::Pending),
            "inprogress" => Ok(WorkOrderStatus::InProgress),
            "delayed"    => Ok(WorkOrderStatus::Delayed),
            "completed"  => Ok(WorkOrderStatus::Completed),
            _            => Err(TwinError::UnknownStatus(s.to_owned())),
        }
    }
}

// ── ResourceKind ──────────────────────────────────────────────────────────────

/// The kinds of yard equipment a work order can be assigned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResourceKind {
    Crane,
    Agv,
    Forklift,
}

impl ResourceKind {
    /// Allocation order used by the resource allocator.
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Crane, ResourceKind::Agv, ResourceKind::Forklift];

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Crane    => "crane",
            ResourceKind::Agv      => "agv",
            ResourceKind::Forklift => "forklift",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResourceKind {
    type Err = TwinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crane" | "cranes"       => Ok(ResourceKind::Crane),
            "agv" | "agvs"           => Ok(ResourceKind::Agv),
            "forklift" | "forklifts" => Ok(ResourceKind::Forklift),
            _                        => Err(TwinError::UnknownResourceKind(s.to_owned())),
        }
    }
}
