//! Bond tallying and ranking.
//!
//! 1. Each board occupant contributes its effective bonds once each
//!    (base and equipment bonds unioned, ignoring case).
//! 2. Counts are summed per bond across the board.
//! 3. Bonds without a definition are dropped.
//! 4. Entries are ranked by category, then count (high first), then name.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::catalog::{BondDefinition, Catalog, NameKey};
use crate::units::UnitInstance;

/// Ranking group of a bond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BondCategory {
    /// Single threshold of exactly 1.
    Unique = 0,
    /// Lowest threshold reached.
    Active = 1,
    /// Lowest threshold not reached, or no thresholds at all.
    Inactive = 2,
}

impl BondCategory {
    #[must_use]
    pub fn classify(bond: &BondDefinition, count: usize) -> Self {
        if bond.is_unique() {
            BondCategory::Unique
        } else if bond.min_threshold().is_some_and(|min| count >= min as usize) {
            BondCategory::Active
        } else {
            BondCategory::Inactive
        }
    }
}

/// Badge colouring of a synergy entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondTone {
    Inactive,
    Unique,
    Partial,
    Maxed,
}

impl BondTone {
    #[must_use]
    pub fn classify(bond: &BondDefinition, count: usize) -> Self {
        let (Some(min), Some(max)) = (bond.min_threshold(), bond.max_threshold()) else {
            return BondTone::Inactive;
        };
        if count < min as usize {
            BondTone::Inactive
        } else if max == 1 {
            BondTone::Unique
        } else if count >= max as usize {
            BondTone::Maxed
        } else {
            BondTone::Partial
        }
    }
}

/// One row of the synergy panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyEntry {
    /// Bond name as defined in the catalog.
    pub name: String,
    pub key: NameKey,
    /// Board occupants carrying the bond.
    pub count: usize,
    pub category: BondCategory,
    pub tone: BondTone,
    /// Activation thresholds in catalog order.
    pub thresholds: Vec<u32>,
    /// Highest threshold reached.
    pub lit_threshold: Option<u32>,
    /// Bond icon.
    pub file: String,
}

impl SynergyEntry {
    fn new(bond: &BondDefinition, key: NameKey, count: usize) -> Self {
        Self {
            name: bond.name.clone(),
            key,
            count,
            category: BondCategory::classify(bond, count),
            tone: BondTone::classify(bond, count),
            thresholds: bond.activate.clone(),
            lit_threshold: bond.lit_threshold(count),
            file: bond.file.clone(),
        }
    }

    /// Threshold text, e.g. `2/4/6`. Bonds without thresholds show the
    /// raw count instead.
    #[must_use]
    pub fn label(&self) -> String {
        if self.thresholds.is_empty() {
            return self.count.to_string();
        }
        self.thresholds
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Thresholds paired with whether each is the lit one.
    pub fn threshold_marks(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.thresholds
            .iter()
            .map(move |&t| (t, Some(t) == self.lit_threshold))
    }
}

/// Bond counts per normalized name across `units`.
///
/// Each unit counts a bond at most once, whichever source grants it.
#[must_use]
pub fn tally<'a>(units: impl IntoIterator<Item = &'a UnitInstance>) -> FxHashMap<NameKey, usize> {
    let mut counts: FxHashMap<NameKey, usize> = FxHashMap::default();
    let mut seen: FxHashSet<NameKey> = FxHashSet::default();

    for unit in units {
        seen.clear();
        for bond in unit.effective_bonds() {
            let key = NameKey::new(bond);
            if key.is_blank() || !seen.insert(key.clone()) {
                continue;
            }
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

/// Ranks board synergies against the bond catalog.
///
/// ```
/// use std::sync::Arc;
/// use bond_board::catalog::{BondDefinition, CatalogBuilder, CharacterDefinition};
/// use bond_board::core::UnitId;
/// use bond_board::synergy::{BondCategory, SynergyAggregator};
/// use bond_board::units::UnitInstance;
///
/// let catalog = CatalogBuilder::new()
///     .bond(BondDefinition::new("StarRail", [2, 4]))
///     .build();
/// let units: Vec<_> = (0..2)
///     .map(|i| {
///         let def = CharacterDefinition::new(format!("c{i}"), 1).with_bond("StarRail");
///         UnitInstance::new(UnitId(i), Arc::new(def))
///     })
///     .collect();
///
/// let entries = SynergyAggregator::new(&catalog).aggregate(&units);
/// assert_eq!(entries[0].count, 2);
/// assert_eq!(entries[0].category, BondCategory::Active);
/// assert_eq!(entries[0].lit_threshold, Some(2));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SynergyAggregator<'a> {
    catalog: &'a Catalog,
}

impl<'a> SynergyAggregator<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Ranked synergy list for the given board occupants.
    #[must_use]
    pub fn aggregate<'u>(
        &self,
        units: impl IntoIterator<Item = &'u UnitInstance>,
    ) -> Vec<SynergyEntry> {
        let mut entries: Vec<SynergyEntry> = tally(units)
            .into_iter()
            .filter_map(|(key, count)| {
                let bond = self.catalog.bond_by_key(&key)?;
                Some(SynergyEntry::new(bond, key, count))
            })
            .collect();
        rank(&mut entries);
        entries
    }
}

/// Sort entries: category, then count descending, then name ignoring case.
///
/// Keys are unique per entry, so this is a total order.
pub fn rank(entries: &mut [SynergyEntry]) {
    entries.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.key.cmp(&b.key))
    });
}
