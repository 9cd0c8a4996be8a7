//! Definition store: catalog types, loading and ingestion.
//!
//! ## Key Types
//!
//! - `CharacterDefinition`, `EquipmentDefinition`, `BondDefinition`,
//!   `IconDefinition`: immutable definitions
//! - `Catalog`: case-insensitive lookup over all four kinds, built once
//! - `load_catalog`: JSON loading that degrades per file
//! - `CharacterIngest`: raw character rows to catalog records
//!
//! ## Case-insensitivity
//!
//! Names are compared through `NameKey` (trimmed, lower-cased). This
//! applies to catalog lookups and to bond comparisons on units.

pub mod definition;
pub mod record;
pub mod registry;
pub mod loader;
pub mod ingest;

pub use definition::{
    contains_bond, BondDefinition, BondList, CharacterDefinition, EquipmentDefinition,
    EquipmentTool, IconDefinition, NameKey, PositionAffinity,
};
pub use record::{BondRecord, CharacterRecord, EquipmentRecord, IconRecord};
pub use registry::{Catalog, CatalogBuilder, PaletteEntry};
pub use loader::{
    load_catalog, parse_records, read_records, read_records_or_empty, CatalogLoadReport,
    CatalogRecords, LoadStatus, LoadedCatalog,
};
pub use ingest::{
    parse_bonds, parse_int_or, parse_position, progress_percent, CharacterIngest,
    IngestProgress, IngestReport, ItemOutcome, PortraitSource, PortraitStatus,
    RawCharacterRow, SkipReason,
};
