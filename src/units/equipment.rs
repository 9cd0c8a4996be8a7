//! Equipment rules.
//!
//! An item can be attached to a unit when:
//! 1. it grants at least one bond,
//! 2. it is not already attached,
//! 3. none of its bonds is already on the unit (base or equipment),
//! 4. the unit has a free equipment slot.
//!
//! Checks run in that order and the first failure is reported. Clearing
//! always succeeds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::instance::{EquippedItem, UnitInstance};
use crate::catalog::definition::push_unique_bond;
use crate::catalog::EquipmentDefinition;

/// Why an item cannot be attached.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum EquipConflict {
    #[error("item grants no bonds")]
    Bondless,
    #[error("item already attached")]
    DuplicateItem,
    #[error("unit already has bond {0}")]
    BondConflict(String),
    #[error("no free equipment slot")]
    Full,
}

/// Check whether `item` may be attached to `unit`.
pub fn check_equip(
    unit: &UnitInstance,
    item: &EquipmentDefinition,
    capacity: usize,
) -> Result<(), EquipConflict> {
    if item.is_bondless() {
        return Err(EquipConflict::Bondless);
    }
    if unit.has_item(&item.name) {
        return Err(EquipConflict::DuplicateItem);
    }
    if let Some(bond) = item.bonds.iter().find(|b| unit.has_bond(b)) {
        return Err(EquipConflict::BondConflict(bond.clone()));
    }
    if unit.equipment.len() >= capacity {
        return Err(EquipConflict::Full);
    }
    Ok(())
}

impl UnitInstance {
    /// Attach `item` if the rules allow it. On failure the unit is untouched.
    pub fn equip(
        &mut self,
        item: &EquipmentDefinition,
        capacity: usize,
    ) -> Result<(), EquipConflict> {
        check_equip(self, item, capacity)?;

        self.equipment.push(EquippedItem {
            name: item.name.clone(),
            file: item.file.clone(),
        });
        for bond in &item.bonds {
            push_unique_bond(&mut self.equipment_bonds, bond.clone());
        }
        Ok(())
    }

    /// Remove every item and equipment bond.
    ///
    /// Returns `true` if anything was removed.
    pub fn clear_equipment(&mut self) -> bool {
        let changed = !self.equipment.is_empty() || !self.equipment_bonds.is_empty();
        self.equipment.clear();
        self.equipment_bonds.clear();
        changed
    }
}
