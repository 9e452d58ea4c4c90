//! Work-order rows and the ID-indexed work-order table.

use std::collections::{BTreeMap, HashMap};

use sy_core::{ResourceKind, ResourceUnitId, WorkOrderId, WorkOrderStatus};

use crate::{StateError, StateResult, StatusCounts};

// ── WorkOrder ─────────────────────────────────────────────────────────────────

/// One shipyard task tracked through its status lifecycle.
///
/// The identifier is fixed at construction; a row built with
/// [`WorkOrder::unidentified`] models a dataset row whose ID cell was empty.
/// Such rows stay in the table but every agent skips them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkOrder {
    id: Option<WorkOrderId>,

    pub status: WorkOrderStatus,

    /// Join key into the supply-chain table (`linked_shipyard_event`).
    pub linked_event: Option<String>,

    pub crane_id:    Option<ResourceUnitId>,
    pub agv_id:      Option<ResourceUnitId>,
    pub forklift_id: Option<ResourceUnitId>,

    /// Units of each kind that must be obtainable before work can start.
    pub required_resources: BTreeMap<ResourceKind, u32>,

    /// Orders that must be `Completed` before this one may start.
    pub prerequisite_tasks: Vec<WorkOrderId>,

    pub tasks_done:     bool,
    pub pending_issues: bool,
}

impl WorkOrder {
    /// A `Pending` order with no requirements.
    pub fn new(id: WorkOrderId) -> Self {
        Self { id: Some(id), ..Self::default() }
    }

    /// A row with a missing identifier.
    pub fn unidentified() -> Self {
        Self::default()
    }

    #[inline]
    pub fn id(&self) -> Option<&WorkOrderId> {
        self.id.as_ref()
    }

    pub fn with_status(mut self, status: WorkOrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_linked_event(mut self, key: impl Into<String>) -> Self {
        self.linked_event = Some(key.into());
        self
    }

    pub fn with_requirement(mut self, kind: ResourceKind, quantity: u32) -> Self {
        self.required_resources.insert(kind, quantity);
        self
    }

    pub fn with_prerequisites(mut self, prerequisites: Vec<WorkOrderId>) -> Self {
        self.prerequisite_tasks = prerequisites;
        self
    }

    pub fn with_completion(mut self, tasks_done: bool, pending_issues: bool) -> Self {
        self.tasks_done = tasks_done;
        self.pending_issues = pending_issues;
        self
    }

    /// The unit assigned for `kind`, if any.
    pub fn assignment(&self, kind: ResourceKind) -> Option<&ResourceUnitId> {
        match kind {
            ResourceKind::Crane    => self.crane_id.as_ref(),
            ResourceKind::Agv      => self.agv_id.as_ref(),
            ResourceKind::Forklift => self.forklift_id.as_ref(),
        }
    }

    /// Mutable slot for the `kind` assignment field.
    pub fn assignment_mut(&mut self, kind: ResourceKind) -> &mut Option<ResourceUnitId> {
        match kind {
            ResourceKind::Crane    => &mut self.crane_id,
            ResourceKind::Agv      => &mut self.agv_id,
            ResourceKind::Forklift => &mut self.forklift_id,
        }
    }

    /// `true` if any assignment field is set.
    pub fn holds_resources(&self) -> bool {
        ResourceKind::ALL.iter().any(|&k| self.assignment(k).is_some())
    }
}

// ── WorkOrderTable ────────────────────────────────────────────────────────────

/// Work orders in load order, with an ID index for O(1) lookup.
///
/// At most one row carries a given ID; [`push`](Self::push) rejects
/// duplicates.  Rows are never removed during a run.
#[derive(Clone, Debug, Default)]
pub struct WorkOrderTable {
    rows:  Vec<WorkOrder>,
    index: HashMap<WorkOrderId, usize>,
}

impl WorkOrderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows, failing on the first duplicate ID.
    pub fn from_rows(rows: impl IntoIterator<Item = WorkOrder>) -> StateResult<Self> {
        let mut table = Self::new();
        for row in rows {
            table.push(row)?;
        }
        Ok(table)
    }

    /// Append a row and return its position.
    pub fn push(&mut self, order: WorkOrder) -> StateResult<usize> {
        let pos = self.rows.len();
        if let Some(id) = order.id() {
            if self.index.contains_key(id) {
                return Err(StateError::DuplicateWorkOrder(id.clone()));
            }
            self.index.insert(id.clone(), pos);
        }
        self.rows.push(order);
        Ok(pos)
    }

    pub fn get(&self, id: &str) -> Option<&WorkOrder> {
        self.index.get(id).map(|&i| &self.rows[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut WorkOrder> {
        self.index.get(id).map(|&i| &mut self.rows[i])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Row at `pos` (load order).
    ///
    /// # Panics
    /// Panics if `pos >= len()`.
    #[inline]
    pub fn row(&self, pos: usize) -> &WorkOrder {
        &self.rows[pos]
    }

    #[inline]
    pub fn row_mut(&mut self, pos: usize) -> &mut WorkOrder {
        &mut self.rows[pos]
    }

    pub fn rows(&self) -> &[WorkOrder] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkOrder> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, WorkOrder> {
        self.rows.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn status_counts(&self) -> StatusCounts {
        StatusCounts::tally(self.rows.iter().map(|o| o.status))
    }
}

impl<'a> IntoIterator for &'a WorkOrderTable {
    type Item = &'a WorkOrder;
    type IntoIter = std::slice::Iter<'a, WorkOrder>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
