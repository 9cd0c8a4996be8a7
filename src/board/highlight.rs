//! Placement highlighting.
//!
//! Both rows accept any unit. The highlight only tells the player that a
//! unit prefers the other row.

use serde::{Deserialize, Serialize};

use crate::catalog::PositionAffinity;
use crate::core::{CostTier, Row, TierColor};
use crate::units::UnitInstance;

/// Whether a unit with `affinity` sits on the row it does not prefer.
///
/// ```
/// use bond_board::board::is_opposite_row;
/// use bond_board::catalog::PositionAffinity;
/// use bond_board::core::Row;
///
/// assert!(is_opposite_row(Row::Back, PositionAffinity::Front));
/// assert!(!is_opposite_row(Row::Back, PositionAffinity::Either));
/// ```
#[must_use]
pub fn is_opposite_row(row: Row, affinity: PositionAffinity) -> bool {
    matches!(
        (affinity, row),
        (PositionAffinity::Front, Row::Back) | (PositionAffinity::Back, Row::Front)
    )
}

/// How an occupied slot is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotAppearance {
    /// The occupant prefers the other row.
    OppositeRow,
    /// Regular tier colouring.
    Tier(TierColor),
}

/// Appearance of a slot on `row` holding a unit with the given affinity
/// and tier.
#[must_use]
pub fn slot_appearance(row: Row, affinity: PositionAffinity, tier: CostTier) -> SlotAppearance {
    if is_opposite_row(row, affinity) {
        SlotAppearance::OppositeRow
    } else {
        SlotAppearance::Tier(tier.color())
    }
}

/// Appearance of a slot on `row` holding `unit`.
#[must_use]
pub fn unit_appearance(row: Row, unit: &UnitInstance) -> SlotAppearance {
    slot_appearance(row, unit.position(), unit.tier())
}
