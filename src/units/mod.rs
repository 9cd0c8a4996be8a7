//! Unit instances and equipment rules.
//!
//! - `UnitInstance`: a character on the board or in the roster, with its
//!   equipment state
//! - `check_equip` / `UnitInstance::equip`: the equipment conflict rules

pub mod instance;
pub mod equipment;

pub use instance::{EquipmentList, EquippedItem, UnitInstance};
pub use equipment::{check_equip, EquipConflict};
