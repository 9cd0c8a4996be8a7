//! The definition store.
//!
//! `Catalog` holds every character, equipment, bond and icon definition.
//! It is assembled once through `CatalogBuilder` and is read-only after
//! that; all lookups are case-insensitive through `NameKey`.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::definition::{
    BondDefinition, CharacterDefinition, EquipmentDefinition, EquipmentTool, IconDefinition,
    NameKey, PositionAffinity,
};
use crate::core::BoardConfig;

/// Immutable catalog of definitions.
///
/// ## Example
///
/// ```
/// use bond_board::catalog::{BondDefinition, CatalogBuilder, CharacterDefinition};
///
/// let catalog = CatalogBuilder::new()
///     .character(CharacterDefinition::new("Himeko", 4).with_bond("StarRail"))
///     .bond(BondDefinition::new("StarRail", [2, 4]))
///     .build();
///
/// assert!(catalog.character("himeko").is_some());
/// assert_eq!(catalog.bond("STARRAIL").unwrap().activate, vec![2, 4]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Characters in file order (roster staging order).
    characters: Vec<CharacterDefinition>,
    character_index: FxHashMap<NameKey, usize>,

    /// Equipment in file order (palette order).
    equipment: Vec<EquipmentDefinition>,
    equipment_index: FxHashMap<NameKey, usize>,

    bonds: FxHashMap<NameKey, BondDefinition>,
    icons: FxHashMap<NameKey, IconDefinition>,
}

impl Catalog {
    /// An empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a character by name.
    #[must_use]
    pub fn character(&self, name: &str) -> Option<&CharacterDefinition> {
        self.character_index
            .get(&NameKey::new(name))
            .map(|&i| &self.characters[i])
    }

    /// Look up an equipment item by name.
    #[must_use]
    pub fn equipment(&self, name: &str) -> Option<&EquipmentDefinition> {
        self.equipment_index
            .get(&NameKey::new(name))
            .map(|&i| &self.equipment[i])
    }

    /// Look up a bond by name.
    #[must_use]
    pub fn bond(&self, name: &str) -> Option<&BondDefinition> {
        self.bonds.get(&NameKey::new(name))
    }

    /// Look up a bond by pre-normalized key.
    #[must_use]
    pub fn bond_by_key(&self, key: &NameKey) -> Option<&BondDefinition> {
        self.bonds.get(key)
    }

    /// Look up an icon by name.
    #[must_use]
    pub fn icon(&self, name: &str) -> Option<&IconDefinition> {
        self.icons.get(&NameKey::new(name))
    }

    /// Characters in catalog order.
    #[must_use]
    pub fn characters(&self) -> &[CharacterDefinition] {
        &self.characters
    }

    /// Equipment in catalog order.
    #[must_use]
    pub fn equipment_items(&self) -> &[EquipmentDefinition] {
        &self.equipment
    }

    /// All bond definitions (unordered).
    pub fn bonds(&self) -> impl Iterator<Item = &BondDefinition> {
        self.bonds.values()
    }

    /// All icons (unordered).
    pub fn icons(&self) -> impl Iterator<Item = &IconDefinition> {
        self.icons.values()
    }

    /// Badge icon for a row affinity.
    #[must_use]
    pub fn position_icon(
        &self,
        affinity: PositionAffinity,
        config: &BoardConfig,
    ) -> Option<&IconDefinition> {
        let name = match affinity {
            PositionAffinity::Front => &config.front_icon,
            PositionAffinity::Back => &config.back_icon,
            PositionAffinity::Either => &config.either_icon,
        };
        self.icon(name)
    }

    /// Icon of the clear tool, if the catalog defines one.
    #[must_use]
    pub fn clear_tool(&self, config: &BoardConfig) -> Option<&IconDefinition> {
        self.icon(&config.clear_tool_icon)
    }

    /// The equipment palette: every bonded item in catalog order, then the
    /// clear tool when its icon exists. Bondless items are left out since
    /// they cannot be equipped.
    #[must_use]
    pub fn equipment_palette(&self, config: &BoardConfig) -> Vec<PaletteEntry> {
        let mut palette: Vec<PaletteEntry> = self
            .equipment
            .iter()
            .filter(|item| !item.is_bondless())
            .map(|item| PaletteEntry {
                tool: EquipmentTool::item(item.name.clone()),
                file: item.file.clone(),
            })
            .collect();

        if let Some(icon) = self.clear_tool(config) {
            palette.push(PaletteEntry {
                tool: EquipmentTool::Clear,
                file: icon.file.clone(),
            });
        }
        palette
    }

    /// Total number of definitions across all four catalogs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len() + self.equipment.len() + self.bonds.len() + self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One draggable entry of the equipment palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub tool: EquipmentTool,
    pub file: String,
}

/// Builder for `Catalog`.
///
/// Blank names are skipped. For characters and equipment the first entry
/// with a given name wins; for bonds and icons the last one does.
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a character.
    pub fn add_character(&mut self, def: CharacterDefinition) -> &mut Self {
        let key = NameKey::new(&def.name);
        if key.is_blank() {
            return self;
        }
        if self.catalog.character_index.contains_key(&key) {
            debug!(name = %def.name, "duplicate character ignored");
            return self;
        }
        self.catalog
            .character_index
            .insert(key, self.catalog.characters.len());
        self.catalog.characters.push(def);
        self
    }

    /// Register an equipment item.
    pub fn add_equipment(&mut self, def: EquipmentDefinition) -> &mut Self {
        let key = NameKey::new(&def.name);
        if key.is_blank() {
            return self;
        }
        if self.catalog.equipment_index.contains_key(&key) {
            debug!(name = %def.name, "duplicate equipment ignored");
            return self;
        }
        self.catalog
            .equipment_index
            .insert(key, self.catalog.equipment.len());
        self.catalog.equipment.push(def);
        self
    }

    /// Register a bond, replacing any earlier one with the same name.
    pub fn add_bond(&mut self, def: BondDefinition) -> &mut Self {
        let key = NameKey::new(&def.name);
        if !key.is_blank() {
            self.catalog.bonds.insert(key, def);
        }
        self
    }

    /// Register an icon, replacing any earlier one with the same name.
    pub fn add_icon(&mut self, def: IconDefinition) -> &mut Self {
        let key = NameKey::new(&def.name);
        if !key.is_blank() {
            self.catalog.icons.insert(key, def);
        }
        self
    }

    /// Chaining form of `add_character`.
    #[must_use]
    pub fn character(mut self, def: CharacterDefinition) -> Self {
        self.add_character(def);
        self
    }

    #[must_use]
    pub fn equipment(mut self, def: EquipmentDefinition) -> Self {
        self.add_equipment(def);
        self
    }

    #[must_use]
    pub fn bond(mut self, def: BondDefinition) -> Self {
        self.add_bond(def);
        self
    }

    #[must_use]
    pub fn icon(mut self, def: IconDefinition) -> Self {
        self.add_icon(def);
        self
    }

    /// Freeze into an immutable catalog.
    #[must_use]
    pub fn build(self) -> Catalog {
        self.catalog
    }
}
