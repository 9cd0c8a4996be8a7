//! Transfers: placing, moving, swapping and returning units, and changing
//! their equipment.
//!
//! `TransferEngine` is the single authority over board membership and
//! per-unit equipment. Requests never fail loudly; each one yields a
//! `TransferOutcome` saying what was applied or why nothing changed.

pub mod action;
pub mod engine;

pub use action::{Destination, Rejection, TransferKind, TransferOutcome, TransferRecord};
pub use engine::TransferEngine;
