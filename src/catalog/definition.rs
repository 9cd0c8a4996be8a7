//! Definitions - immutable catalog data.
//!
//! A `CharacterDefinition` describes a roster character ("what it is");
//! the per-placement state (equipment, location) lives in
//! `units::UnitInstance`. Equipment, bond and icon definitions are
//! likewise read-only once the catalog is built.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CostTier;

/// Inline storage for bond name lists. Most characters carry 2-3 bonds.
pub type BondList = SmallVec<[String; 4]>;

/// Case-insensitive lookup key for catalog names.
///
/// Built by trimming and lower-casing; two names with the same key are
/// the same catalog entry.
///
/// ```
/// use bond_board::catalog::NameKey;
///
/// assert_eq!(NameKey::new(" StarRail "), NameKey::new("starrail"));
/// assert!(NameKey::new("   ").is_blank());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NameKey(String);

impl NameKey {
    /// Normalize a name into a key.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the source name was empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for NameKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Preferred board row of a character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionAffinity {
    /// Front row (catalog code 0).
    #[default]
    Front,
    /// Back row (catalog code 1).
    Back,
    /// Either row (catalog code 2).
    Either,
}

impl PositionAffinity {
    /// Decode the catalog integer. Unknown codes read as `Front`.
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::Back,
            2 => Self::Either,
            _ => Self::Front,
        }
    }

    /// Catalog integer for this affinity.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Front => 0,
            Self::Back => 1,
            Self::Either => 2,
        }
    }
}

/// Static character data.
///
/// ## Example
///
/// ```
/// use bond_board::catalog::{CharacterDefinition, PositionAffinity};
///
/// let march = CharacterDefinition::new("March 7th", 2)
///     .with_bond("StarRail")
///     .with_position(PositionAffinity::Back);
///
/// assert_eq!(march.tier().get(), 2);
/// assert!(march.has_bond("starrail"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterDefinition {
    /// Character name. Identity within the catalog.
    pub name: String,

    /// Raw catalog cost.
    pub cost: i64,

    /// Base bonds, fixed for every unit of this character.
    pub bonds: BondList,

    /// Preferred row.
    pub position: PositionAffinity,

    /// Portrait path.
    pub file: String,
}

impl CharacterDefinition {
    /// Create a definition with no bonds and no portrait.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            bonds: BondList::new(),
            position: PositionAffinity::default(),
            file: String::new(),
        }
    }

    /// Add a base bond (builder pattern). Blank and repeated names are ignored.
    #[must_use]
    pub fn with_bond(mut self, bond: impl Into<String>) -> Self {
        push_unique_bond(&mut self.bonds, bond.into());
        self
    }

    /// Set the row affinity.
    #[must_use]
    pub fn with_position(mut self, position: PositionAffinity) -> Self {
        self.position = position;
        self
    }

    /// Set the portrait path.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Roster bucket for this character.
    #[must_use]
    pub fn tier(&self) -> CostTier {
        CostTier::from_cost(self.cost)
    }

    /// Check for a base bond, ignoring case.
    #[must_use]
    pub fn has_bond(&self, bond: &str) -> bool {
        contains_bond(&self.bonds, bond)
    }
}

/// Static equipment data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentDefinition {
    /// Item name.
    pub name: String,

    /// Bonds granted to the wearer.
    pub bonds: BondList,

    /// Icon path, also used as the equipment badge.
    pub file: String,
}

impl EquipmentDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bonds: BondList::new(),
            file: String::new(),
        }
    }

    /// Add a granted bond (builder pattern).
    #[must_use]
    pub fn with_bond(mut self, bond: impl Into<String>) -> Self {
        push_unique_bond(&mut self.bonds, bond.into());
        self
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Items without bonds cannot be equipped.
    #[must_use]
    pub fn is_bondless(&self) -> bool {
        self.bonds.is_empty()
    }
}

/// Static bond data.
///
/// ```
/// use bond_board::catalog::BondDefinition;
///
/// let bond = BondDefinition::new("StarRail", [2, 4, 6]);
/// assert_eq!(bond.lit_threshold(5), Some(4));
/// assert_eq!(bond.lit_threshold(1), None);
/// assert!(BondDefinition::new("Solo", [1]).is_unique());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondDefinition {
    /// Bond name.
    pub name: String,

    /// Activation thresholds in display order (ascending in practice).
    pub activate: Vec<u32>,

    /// Icon path.
    pub file: String,
}

impl BondDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, activate: impl IntoIterator<Item = u32>) -> Self {
        Self {
            name: name.into(),
            activate: activate.into_iter().collect(),
            file: String::new(),
        }
    }

    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// A bond whose only threshold is 1.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.activate.as_slice() == [1]
    }

    #[must_use]
    pub fn min_threshold(&self) -> Option<u32> {
        self.activate.iter().copied().min()
    }

    #[must_use]
    pub fn max_threshold(&self) -> Option<u32> {
        self.activate.iter().copied().max()
    }

    /// Highest threshold reached by `count`, if any.
    #[must_use]
    pub fn lit_threshold(&self, count: usize) -> Option<u32> {
        self.activate
            .iter()
            .copied()
            .filter(|&t| t as usize <= count)
            .max()
    }
}

/// Named icon (position badges, the clear tool).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDefinition {
    pub name: String,
    pub file: String,
}

impl IconDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

/// Something that can be dropped on a board unit from the equipment palette.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentTool {
    /// A catalog equipment item, by name.
    Item(String),
    /// The clear tool: strips all equipment from the target.
    Clear,
}

impl EquipmentTool {
    /// Tool for the named item.
    #[must_use]
    pub fn item(name: impl Into<String>) -> Self {
        Self::Item(name.into())
    }
}

/// Case-insensitive membership test for bond lists.
#[must_use]
pub fn contains_bond<S: AsRef<str>>(bonds: &[S], bond: &str) -> bool {
    let key = NameKey::new(bond);
    bonds.iter().any(|b| NameKey::new(b.as_ref()) == key)
}

/// Push a bond unless it is blank or already present.
pub(crate) fn push_unique_bond(bonds: &mut BondList, bond: String) {
    let trimmed = bond.trim();
    if trimmed.is_empty() || contains_bond(bonds, trimmed) {
        return;
    }
    bonds.push(trimmed.to_string());
}
