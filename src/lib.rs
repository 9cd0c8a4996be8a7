//! # bond-board
//!
//! A team-composition engine for a tactical board game: stage units from a
//! cost-tiered roster onto a two-row board, attach equipment, and watch
//! bond synergies activate by threshold.
//!
//! ## Design Principles
//!
//! 1. **One authority**: `TransferEngine` is the only code that changes
//!    where a unit is or what it carries. Every request either applies in
//!    full or leaves the model untouched.
//!
//! 2. **Refusals are values**: a rejected drop is normal interaction, so
//!    operations return a `TransferOutcome` instead of an error.
//!
//! 3. **Configuration over convention**: slot count, row split, equipment
//!    capacity and well-known icon names live in `BoardConfig`.
//!
//! ## Architecture
//!
//! - **Immutable catalog**: definitions are loaded once and looked up by a
//!   normalized, case-insensitive `NameKey`.
//!
//! - **Id-addressed units**: units live in an arena keyed by `UnitId`; the
//!   board and roster hold ids, and so do drag payloads.
//!
//! - **Derived synergies**: the ranked bond list is recomputed from the
//!   board on demand, never stored.
//!
//! ## Modules
//!
//! - `core`: ids, layout types, configuration, errors
//! - `catalog`: definitions, JSON loading, character ingestion
//! - `units`: unit instances and equipment rules
//! - `board`: slots, roster buckets, locations, highlighting
//! - `transfer`: the transfer engine and its outcomes
//! - `synergy`: bond tallying and ranking
//! - `sandbox`: catalog + engine facade with drag/drop payloads

pub mod core;
pub mod catalog;
pub mod units;
pub mod board;
pub mod transfer;
pub mod synergy;
pub mod sandbox;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, CatalogError, CostTier, DataPaths, Result, Row, SlotIndex, TierColor, UnitId,
};

pub use crate::catalog::{
    load_catalog, BondDefinition, Catalog, CatalogBuilder, CatalogLoadReport, CharacterDefinition,
    EquipmentDefinition, EquipmentTool, IconDefinition, NameKey, PositionAffinity,
};

pub use crate::units::{EquipConflict, EquippedItem, UnitInstance};

pub use crate::board::{
    is_opposite_row, slot_appearance, Board, Location, PlacementManager, RosterPool,
    SlotAppearance,
};

pub use crate::transfer::{
    Destination, Rejection, TransferEngine, TransferKind, TransferOutcome, TransferRecord,
};

pub use crate::synergy::{BondCategory, BondTone, SynergyAggregator, SynergyEntry};

pub use crate::sandbox::{DragPayload, DropEffect, DropTarget, Sandbox, SlotView};
