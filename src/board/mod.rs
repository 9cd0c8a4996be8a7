//! Board model: slots, roster buckets and unit locations.
//!
//! ## Key Types
//!
//! - `Board`: the fixed slots, split into front and back rows
//! - `RosterPool`: off-board units, one ordered bucket per cost tier
//! - `PlacementManager`: owns both and knows where every unit is
//! - `SlotAppearance`: advisory row highlighting
//!
//! Membership only changes through `transfer::TransferEngine`.

pub mod slots;
pub mod roster;
pub mod manager;
pub mod highlight;

pub use slots::Board;
pub use roster::RosterPool;
pub use manager::{Location, PlacementManager};
pub use highlight::{is_opposite_row, slot_appearance, unit_appearance, SlotAppearance};
