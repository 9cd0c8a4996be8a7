//! Unit instances - runtime unit state.
//!
//! `UnitInstance` is one staged or placed character. It points at its
//! (shared, immutable) `CharacterDefinition` and owns the mutable part:
//! the equipped items and the bonds they grant.
//!
//! Where the unit currently is (board slot or roster bucket) is tracked by
//! the board model, not by the unit.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{contains_bond, BondList, CharacterDefinition, NameKey, PositionAffinity};
use crate::core::{CostTier, UnitId};

/// An item attached to a unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EquippedItem {
    /// Equipment name.
    pub name: String,
    /// Badge icon path.
    pub file: String,
}

/// Equipped items, inline up to the standard capacity of 3.
pub type EquipmentList = SmallVec<[EquippedItem; 3]>;

/// A unit in the sandbox.
///
/// ## Invariants
///
/// - base bonds come from the definition and never change
/// - `equipment_bonds` never shares a bond (case-insensitively) with the
///   base bonds, and holds no duplicates
/// - the equipment list never exceeds the configured capacity
///
/// The last two are upheld by `units::equipment`, the only code that
/// mutates equipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitInstance {
    id: UnitId,
    character: Arc<CharacterDefinition>,
    pub(crate) equipment: EquipmentList,
    pub(crate) equipment_bonds: BondList,
}

impl UnitInstance {
    /// Create a unit with no equipment.
    #[must_use]
    pub fn new(id: UnitId, character: Arc<CharacterDefinition>) -> Self {
        Self {
            id,
            character,
            equipment: EquipmentList::new(),
            equipment_bonds: BondList::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> UnitId {
        self.id
    }

    /// The character this unit was created from.
    #[must_use]
    pub fn definition(&self) -> &CharacterDefinition {
        &self.character
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.character.name
    }

    /// Home roster bucket.
    #[must_use]
    pub fn tier(&self) -> CostTier {
        self.character.tier()
    }

    #[must_use]
    pub fn position(&self) -> PositionAffinity {
        self.character.position
    }

    #[must_use]
    pub fn base_bonds(&self) -> &[String] {
        &self.character.bonds
    }

    /// Items in attachment order.
    #[must_use]
    pub fn equipment(&self) -> &[EquippedItem] {
        &self.equipment
    }

    /// Bonds granted by equipment, in attachment order.
    #[must_use]
    pub fn equipment_bonds(&self) -> &[String] {
        &self.equipment_bonds
    }

    /// Badge icons in attachment order, at most `limit` of them.
    pub fn badges(&self, limit: usize) -> impl Iterator<Item = &str> {
        self.equipment.iter().take(limit).map(|item| item.file.as_str())
    }

    /// Whether the unit has `bond` from either source, ignoring case.
    #[must_use]
    pub fn has_bond(&self, bond: &str) -> bool {
        contains_bond(&self.character.bonds, bond) || contains_bond(&self.equipment_bonds, bond)
    }

    /// Whether an item with this name is attached, ignoring case.
    #[must_use]
    pub fn has_item(&self, name: &str) -> bool {
        let key = NameKey::new(name);
        self.equipment.iter().any(|item| NameKey::new(&item.name) == key)
    }

    /// Base bonds followed by equipment bonds.
    ///
    /// Repeats are possible when a definition lists a bond twice; callers
    /// that count bonds dedupe by name.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use bond_board::catalog::CharacterDefinition;
    /// use bond_board::core::UnitId;
    /// use bond_board::units::UnitInstance;
    ///
    /// let def = CharacterDefinition::new("Welt", 3).with_bond("StarRail").with_bond("Imaginary");
    /// let unit = UnitInstance::new(UnitId(0), Arc::new(def));
    /// let bonds: Vec<_> = unit.effective_bonds().collect();
    /// assert_eq!(bonds, ["StarRail", "Imaginary"]);
    /// ```
    pub fn effective_bonds(&self) -> impl Iterator<Item = &str> {
        self.character
            .bonds
            .iter()
            .chain(self.equipment_bonds.iter())
            .map(String::as_str)
    }
}
