//! Supply-chain event rows.

use std::collections::HashMap;

use sy_core::SupplyEventId;

use crate::{StateError, StateResult};

/// One supply-chain disruption record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupplyChainEvent {
    id: SupplyEventId,

    /// Matched against `WorkOrder::linked_event`.
    pub linked_shipyard_event: Option<String>,

    pub delay_reason: Option<String>,
}

impl SupplyChainEvent {
    pub fn new(id: SupplyEventId) -> Self {
        Self { id, linked_shipyard_event: None, delay_reason: None }
    }

    pub fn with_link(mut self, key: impl Into<String>) -> Self {
        self.linked_shipyard_event = Some(key.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.delay_reason = Some(reason.into());
        self
    }

    #[inline]
    pub fn id(&self) -> &SupplyEventId {
        &self.id
    }

    /// `true` if this row is addressed by `key`, either through its own ID
    /// or through its shipyard link.
    pub fn matches(&self, key: &str) -> bool {
        self.id.as_str() == key || self.linked_shipyard_event.as_deref() == Some(key)
    }
}

/// Supply-chain events in load order, indexed by ID.
#[derive(Clone, Debug, Default)]
pub struct SupplyChainTable {
    rows:  Vec<SupplyChainEvent>,
    index: HashMap<SupplyEventId, usize>,
}

impl SupplyChainTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: impl IntoIterator<Item = SupplyChainEvent>) -> StateResult<Self> {
        let mut table = Self::new();
        for row in rows {
            table.push(row)?;
        }
        Ok(table)
    }

    pub fn push(&mut self, event: SupplyChainEvent) -> StateResult<usize> {
        if self.index.contains_key(event.id()) {
            return Err(StateError::DuplicateSupplyEvent(event.id().clone()));
        }
        let pos = self.rows.len();
        self.index.insert(event.id().clone(), pos);
        self.rows.push(event);
        Ok(pos)
    }

    pub fn get(&self, id: &str) -> Option<&SupplyChainEvent> {
        self.index.get(id).map(|&i| &self.rows[i])
    }

    /// First row whose `linked_shipyard_event` equals `linked_event`.
    pub fn find_linked(&self, linked_event: &str) -> Option<&SupplyChainEvent> {
        self.rows
            .iter()
            .find(|e| e.linked_shipyard_event.as_deref() == Some(linked_event))
    }

    /// All rows addressed by `key` (see [`SupplyChainEvent::matches`]).
    pub fn matching_mut<'a>(
        &'a mut self,
        key: &'a str,
    ) -> impl Iterator<Item = &'a mut SupplyChainEvent> + 'a {
        self.rows.iter_mut().filter(move |e| e.matches(key))
    }

    pub fn rows(&self) -> &[SupplyChainEvent] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SupplyChainEvent> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a SupplyChainTable {
    type Item = &'a SupplyChainEvent;
    type IntoIter = std::slice::Iter<'a, SupplyChainEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
