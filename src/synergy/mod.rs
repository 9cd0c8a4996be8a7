//! Synergy aggregation.
//!
//! Counts bonds across board occupants and ranks them for display. The
//! result is a pure function of the occupants and the bond catalog, so it
//! is recomputed after every board change rather than maintained.

pub mod aggregator;

pub use aggregator::{rank, tally, BondCategory, BondTone, SynergyAggregator, SynergyEntry};
