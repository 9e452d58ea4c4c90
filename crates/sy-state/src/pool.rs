//! Finite pool of typed resource units with busy/free tracking.
//!
//! Every unit is in exactly one [`UnitState`].  Allocation scans units in
//! registration order and takes the first free one of the requested kind, so
//! the same pool and the same request sequence always yield the same IDs.
//!
//! The pool lives inside [`ShipyardState`](crate::ShipyardState), so allocate
//! and release happen under whatever exclusive access guards a step.

use std::collections::HashMap;

use sy_core::{ResourceKind, ResourceUnitId, WorkOrderId};

use crate::{StateError, StateResult};

// ── UnitState ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitState {
    Free,
    /// Held by the given work order.
    Busy(WorkOrderId),
    /// Failed equipment; not allocatable until restored.
    OutOfService,
}

impl UnitState {
    fn describe(&self) -> String {
        match self {
            UnitState::Free          => "free".into(),
            UnitState::Busy(owner)   => format!("held by {owner}"),
            UnitState::OutOfService  => "out of service".into(),
        }
    }
}

// ── ResourceUnit ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceUnit {
    id:        ResourceUnitId,
    pub kind:  ResourceKind,
    pub state: UnitState,
}

impl ResourceUnit {
    #[inline]
    pub fn id(&self) -> &ResourceUnitId {
        &self.id
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.state == UnitState::Free
    }

    /// `true` if the unit is busy on behalf of `owner`.
    pub fn is_held_by(&self, owner: &str) -> bool {
        matches!(&self.state, UnitState::Busy(o) if o.as_str() == owner)
    }
}

// ── PoolConfig ────────────────────────────────────────────────────────────────

/// Unit counts for a generated pool.  IDs are `crane1..`, `agv1..`,
/// `forklift1..`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PoolConfig {
    pub cranes:    u32,
    pub agvs:      u32,
    pub forklifts: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self { cranes: 2, agvs: 3, forklifts: 4 }
    }
}

impl PoolConfig {
    pub fn count(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Crane    => self.cranes,
            ResourceKind::Agv      => self.agvs,
            ResourceKind::Forklift => self.forklifts,
        }
    }
}

// ── ResourcePool ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct ResourcePool {
    units: Vec<ResourceUnit>,
    index: HashMap<ResourceUnitId, usize>,
}

impl ResourcePool {
    /// An empty pool.  Every allocation against it fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a pool with sequentially numbered units of each kind.
    pub fn from_config(config: &PoolConfig) -> Self {
        let mut pool = Self::new();
        for kind in ResourceKind::ALL {
            for n in 1..=config.count(kind) {
                if let Some(id) = ResourceUnitId::parse(&format!("{}{n}", kind.label())) {
                    pool.push_unit(id, kind);
                }
            }
        }
        pool
    }

    /// Register a free unit.
    pub fn add_unit(&mut self, id: ResourceUnitId, kind: ResourceKind) -> StateResult<()> {
        if self.index.contains_key(&id) {
            return Err(StateError::DuplicateResourceUnit(id));
        }
        self.push_unit(id, kind);
        Ok(())
    }

    /// Append a unit whose ID is known to be new.  Generated IDs are
    /// distinct per kind prefix and counter.
    fn push_unit(&mut self, id: ResourceUnitId, kind: ResourceKind) {
        self.index.insert(id.clone(), self.units.len());
        self.units.push(ResourceUnit { id, kind, state: UnitState::Free });
    }

    pub fn get(&self, id: &str) -> Option<&ResourceUnit> {
        self.index.get(id).map(|&i| &self.units[i])
    }

    fn get_mut(&mut self, id: &str) -> StateResult<&mut ResourceUnit> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.units[i]),
            None     => Err(StateError::UnknownResourceUnit(id.to_owned())),
        }
    }

    /// Take the first free unit of `kind` for `owner`.
    ///
    /// Returns `None` when every unit of that kind is busy or out of service.
    pub fn allocate(&mut self, kind: ResourceKind, owner: &WorkOrderId) -> Option<ResourceUnitId> {
        let unit = self
            .units
            .iter_mut()
            .find(|u| u.kind == kind && u.is_free())?;
        unit.state = UnitState::Busy(owner.clone());
        Some(unit.id.clone())
    }

    /// Top `owner` up to `quantity` units of `kind`, taking free units in
    /// pool order.  Returns the units newly taken.
    ///
    /// All or nothing: when too few units are free nothing is taken.
    pub fn reserve(
        &mut self,
        kind:     ResourceKind,
        owner:    &WorkOrderId,
        quantity: u32,
    ) -> StateResult<Vec<ResourceUnitId>> {
        let held = self.held_by(owner.as_str()).filter(|u| u.kind == kind).count();
        let needed = (quantity as usize).saturating_sub(held);
        let free = self.free_count(kind);
        if free < needed {
            return Err(StateError::InsufficientUnits { kind, owner: owner.clone(), needed, free });
        }

        let mut taken = Vec::with_capacity(needed);
        for unit in self.units.iter_mut().filter(|u| u.kind == kind && u.is_free()).take(needed) {
            unit.state = UnitState::Busy(owner.clone());
            taken.push(unit.id.clone());
        }
        Ok(taken)
    }

    /// Mark a specific unit busy for `owner`.
    ///
    /// Succeeds if the unit is free or already held by `owner`.
    pub fn claim(
        &mut self,
        id:    &str,
        kind:  ResourceKind,
        owner: &WorkOrderId,
    ) -> StateResult<()> {
        let unit = self.get_mut(id)?;
        if unit.kind != kind {
            return Err(StateError::KindMismatch {
                unit:     unit.id.clone(),
                expected: kind,
                actual:   unit.kind,
            });
        }
        match &unit.state {
            UnitState::Free => {
                unit.state = UnitState::Busy(owner.clone());
                Ok(())
            }
            UnitState::Busy(o) if o == owner => Ok(()),
            other => Err(StateError::UnitUnavailable {
                unit:   unit.id.clone(),
                reason: other.describe(),
            }),
        }
    }

    /// Free a busy unit and return its former owner.
    ///
    /// Free and out-of-service units are left unchanged and return `None`.
    pub fn release(&mut self, id: &str) -> Option<WorkOrderId> {
        let unit = self.get_mut(id).ok()?;
        match std::mem::replace(&mut unit.state, UnitState::Free) {
            UnitState::Busy(owner) => Some(owner),
            previous => {
                unit.state = previous;
                None
            }
        }
    }

    /// Free every unit held by `owner`, returning their IDs in pool order.
    pub fn release_all(&mut self, owner: &str) -> Vec<ResourceUnitId> {
        let mut released = Vec::new();
        for unit in self.units.iter_mut().filter(|u| u.is_held_by(owner)) {
            unit.state = UnitState::Free;
            released.push(unit.id.clone());
        }
        released
    }

    /// Take a unit out of service.  Returns the work order that was holding
    /// it, if any.
    pub fn mark_out_of_service(&mut self, id: &str) -> StateResult<Option<WorkOrderId>> {
        let unit = self.get_mut(id)?;
        match std::mem::replace(&mut unit.state, UnitState::OutOfService) {
            UnitState::Busy(owner) => Ok(Some(owner)),
            _                      => Ok(None),
        }
    }

    /// Return an out-of-service unit to the free pool.
    ///
    /// Returns `false` (and changes nothing) if the unit was in service.
    pub fn restore(&mut self, id: &str) -> StateResult<bool> {
        let unit = self.get_mut(id)?;
        if unit.state == UnitState::OutOfService {
            unit.state = UnitState::Free;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn free_count(&self, kind: ResourceKind) -> usize {
        self.units.iter().filter(|u| u.kind == kind && u.is_free()).count()
    }

    /// Units of `kind` that `owner` could use: free ones plus those it
    /// already holds.
    pub fn available_to(&self, kind: ResourceKind, owner: &str) -> usize {
        self.units
            .iter()
            .filter(|u| u.kind == kind && (u.is_free() || u.is_held_by(owner)))
            .count()
    }

    pub fn held_by<'a>(&'a self, owner: &'a str) -> impl Iterator<Item = &'a ResourceUnit> + 'a {
        self.units.iter().filter(move |u| u.is_held_by(owner))
    }

    pub fn units(&self) -> &[ResourceUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
