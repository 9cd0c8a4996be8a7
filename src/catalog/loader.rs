//! Catalog loading from JSON files.
//!
//! Each of the four files loads on its own. A missing or unparseable file
//! degrades to an empty catalog for that category and is reported in the
//! `CatalogLoadReport`; it never stops the others from loading.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use super::record::{BondRecord, CharacterRecord, EquipmentRecord, IconRecord};
use super::registry::{Catalog, CatalogBuilder};
use crate::core::{CatalogError, DataPaths, Result};

/// Outcome of loading one catalog file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    /// File parsed; number of records read (before blank-name filtering).
    Loaded(usize),
    /// File absent.
    Missing,
    /// File present but unreadable or invalid.
    Corrupt(String),
}

impl LoadStatus {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded(_))
    }
}

/// Per-file status of a catalog load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogLoadReport {
    pub characters: LoadStatus,
    pub equipment: LoadStatus,
    pub bonds: LoadStatus,
    pub icons: LoadStatus,
}

impl CatalogLoadReport {
    /// True when all four files loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.characters.is_loaded()
            && self.equipment.is_loaded()
            && self.bonds.is_loaded()
            && self.icons.is_loaded()
    }
}

/// Parse a JSON record list.
pub fn parse_records<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON record list from disk.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.is_file() {
        return Err(CatalogError::Missing(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_records(&content)
}

/// Read a record list, degrading any failure to an empty list.
pub fn read_records_or_empty<T: DeserializeOwned>(path: &Path) -> (Vec<T>, LoadStatus) {
    match read_records(path) {
        Ok(records) => {
            let status = LoadStatus::Loaded(records.len());
            (records, status)
        }
        Err(CatalogError::Missing(path)) => {
            warn!(path = %path.display(), "catalog file missing, using empty catalog");
            (Vec::new(), LoadStatus::Missing)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "catalog file unreadable, using empty catalog");
            (Vec::new(), LoadStatus::Corrupt(err.to_string()))
        }
    }
}

/// Raw record lists for all four catalogs.
#[derive(Clone, Debug, Default)]
pub struct CatalogRecords {
    pub characters: Vec<CharacterRecord>,
    pub equipment: Vec<EquipmentRecord>,
    pub bonds: Vec<BondRecord>,
    pub icons: Vec<IconRecord>,
}

impl CatalogRecords {
    /// Convert every record with a usable name and build the catalog.
    #[must_use]
    pub fn into_catalog(self) -> Catalog {
        let mut builder = CatalogBuilder::new();
        for def in self.bonds.iter().filter_map(BondRecord::to_definition) {
            builder.add_bond(def);
        }
        for def in self.characters.iter().filter_map(CharacterRecord::to_definition) {
            builder.add_character(def);
        }
        for def in self.equipment.iter().filter_map(EquipmentRecord::to_definition) {
            builder.add_equipment(def);
        }
        for def in self.icons.iter().filter_map(IconRecord::to_definition) {
            builder.add_icon(def);
        }
        builder.build()
    }
}

/// A loaded catalog together with how each file fared.
#[derive(Clone, Debug)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub report: CatalogLoadReport,
}

/// Load all four catalogs from `paths`.
///
/// Never fails: problems show up in the report and in `warn!` events.
pub fn load_catalog(paths: &DataPaths) -> LoadedCatalog {
    let (bonds, bonds_status) = read_records_or_empty(&paths.bonds_json());
    let (characters, characters_status) = read_records_or_empty(&paths.character_json());
    let (equipment, equipment_status) = read_records_or_empty(&paths.equipment_json());
    let (icons, icons_status) = read_records_or_empty(&paths.others_json());

    let catalog = CatalogRecords {
        characters,
        equipment,
        bonds,
        icons,
    }
    .into_catalog();

    info!(
        characters = catalog.characters().len(),
        equipment = catalog.equipment_items().len(),
        bonds = catalog.bonds().count(),
        icons = catalog.icons().count(),
        "catalog loaded"
    );

    LoadedCatalog {
        catalog,
        report: CatalogLoadReport {
            characters: characters_status,
            equipment: equipment_status,
            bonds: bonds_status,
            icons: icons_status,
        },
    }
}
