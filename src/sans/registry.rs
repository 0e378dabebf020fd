//! Units keyed by hardware identifier.

use alloc::{collections::BTreeMap, vec::Vec};

use thiserror::Error;

use super::unit::Unit;

/// A unit with this hardware identifier is already registered.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unit with hardware identifier {0:#06x} is already registered.")]
pub struct DuplicateUnit(pub u16);

/// Every unit detected during a scan, in detection order.
///
/// Units are never removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registry {
    units: Vec<Unit>,
    by_hardware: BTreeMap<u16, usize>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the unit with a hardware identifier.
    pub fn get(&self, hardware: u16) -> Option<&Unit> {
        self.by_hardware.get(&hardware).map(|&i| &self.units[i])
    }

    pub(super) fn get_mut(&mut self, hardware: u16) -> Option<&mut Unit> {
        self.by_hardware
            .get(&hardware)
            .map(|&i| &mut self.units[i])
    }

    /// Create a unit for a newly announced hardware identifier, with the next
    /// logical identifier.
    pub fn register(&mut self, hardware: u16) -> Result<&Unit, DuplicateUnit> {
        if self.by_hardware.contains_key(&hardware) {
            Err(DuplicateUnit(hardware))?;
        }

        let id = self.units.len();
        self.by_hardware.insert(hardware, id);
        self.units.push(Unit::new(id, hardware));

        Ok(&self.units[id])
    }

    /// Units in detection order, indexed by logical identifier.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Take the units, in detection order.
    pub fn into_units(self) -> Vec<Unit> {
        self.units
    }

    /// Number of units detected.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether no unit has been detected.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
