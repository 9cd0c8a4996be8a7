//! Core types: unit ids, board layout, configuration and errors.
//!
//! Everything here is plain data. The model (`board`), rules (`transfer`)
//! and derived views (`synergy`) build on these.

pub mod entity;
pub mod layout;
pub mod config;
pub mod error;

pub use entity::UnitId;
pub use layout::{CostTier, Row, SlotIndex, TierColor};
pub use config::{BoardConfig, DataPaths};
pub use error::{CatalogError, Result};
