//! On-disk catalog records.
//!
//! These mirror the JSON files one-to-one. Every field is optional so that
//! a record with a missing or `null` field still loads; conversion into a
//! definition fills in defaults.

use serde::{Deserialize, Serialize};

use super::definition::{
    push_unique_bond, BondDefinition, BondList, CharacterDefinition, EquipmentDefinition,
    IconDefinition, PositionAffinity,
};

/// `character.json` entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonds: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// `equipment.json` entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bonds: Option<Vec<String>>,
    #[serde(default)]
    pub file: Option<String>,
}

/// `bonds.json` entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub activate: Option<Vec<i64>>,
    #[serde(default)]
    pub file: Option<String>,
}

/// `others.json` entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
}

/// Trimmed name, or `None` when blank.
fn record_name(name: Option<&String>) -> Option<String> {
    name.map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

fn bond_list(bonds: Option<&Vec<String>>) -> BondList {
    let mut list = BondList::new();
    for bond in bonds.into_iter().flatten() {
        push_unique_bond(&mut list, bond.clone());
    }
    list
}

impl CharacterRecord {
    /// Convert to a definition. Returns `None` for blank names.
    #[must_use]
    pub fn to_definition(&self) -> Option<CharacterDefinition> {
        Some(CharacterDefinition {
            name: record_name(self.name.as_ref())?,
            cost: self.cost.unwrap_or(0),
            bonds: bond_list(self.bonds.as_ref()),
            position: PositionAffinity::from_code(self.position.unwrap_or(0)),
            file: self.file.clone().unwrap_or_default(),
        })
    }
}

impl From<&CharacterDefinition> for CharacterRecord {
    fn from(def: &CharacterDefinition) -> Self {
        Self {
            name: Some(def.name.clone()),
            cost: Some(def.cost),
            bonds: Some(def.bonds.to_vec()),
            position: Some(def.position.code()),
            file: Some(def.file.clone()),
        }
    }
}

impl EquipmentRecord {
    #[must_use]
    pub fn to_definition(&self) -> Option<EquipmentDefinition> {
        Some(EquipmentDefinition {
            name: record_name(self.name.as_ref())?,
            bonds: bond_list(self.bonds.as_ref()),
            file: self.file.clone().unwrap_or_default(),
        })
    }
}

impl BondRecord {
    /// Convert to a definition. Non-positive thresholds are dropped.
    #[must_use]
    pub fn to_definition(&self) -> Option<BondDefinition> {
        let activate = self
            .activate
            .iter()
            .flatten()
            .filter_map(|&t| u32::try_from(t).ok())
            .filter(|&t| t > 0);
        Some(
            BondDefinition::new(record_name(self.name.as_ref())?, activate)
                .with_file(self.file.clone().unwrap_or_default()),
        )
    }
}

impl IconRecord {
    #[must_use]
    pub fn to_definition(&self) -> Option<IconDefinition> {
        Some(IconDefinition::new(
            record_name(self.name.as_ref())?,
            self.file.clone().unwrap_or_default(),
        ))
    }
}
