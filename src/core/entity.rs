//! Unit identification.
//!
//! Every staged or placed unit has a unique `UnitId`. The id is the single
//! handle carried through transfers, drag payloads and history records;
//! nothing ever recovers a unit by inspecting what is rendered.
//!
//! ## Usage
//!
//! ```
//! use bond_board::core::UnitId;
//!
//! let first = UnitId::new(0);
//! assert_eq!(first.next(), UnitId::new(1));
//! assert_eq!(format!("{}", first), "Unit(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a unit instance.
///
/// Ids are allocated sequentially when the roster is populated and are
/// never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a new unit ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for UnitId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}
