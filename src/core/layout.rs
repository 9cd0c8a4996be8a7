//! Board layout primitives: slot indices, rows and cost tiers.
//!
//! These are plain value types. Which slot belongs to which row is decided
//! by `BoardConfig`; the types here carry no layout knowledge of their own.

use serde::{Deserialize, Serialize};

/// Index of a board slot (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotIndex(pub u8);

impl SlotIndex {
    /// Create a new slot index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the index as `usize` for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Logical board row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Row {
    /// Front row.
    Front,
    /// Back row.
    Back,
}

/// Cost tier of a character, 1 through 5.
///
/// The tier decides which roster bucket a unit lives in while it is not on
/// the board, and the colour its slot is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CostTier(u8);

impl CostTier {
    /// Lowest tier.
    pub const MIN: CostTier = CostTier(1);

    /// Highest tier.
    pub const MAX: CostTier = CostTier(5);

    /// Number of tiers.
    pub const COUNT: usize = 5;

    /// Create a tier, returning `None` outside 1..=5.
    #[must_use]
    pub const fn new(tier: u8) -> Option<Self> {
        if tier >= Self::MIN.0 && tier <= Self::MAX.0 {
            Some(Self(tier))
        } else {
            None
        }
    }

    /// Map a raw catalog cost onto a tier.
    ///
    /// Costs outside 1..=5 land in the lowest tier.
    ///
    /// ```
    /// use bond_board::core::CostTier;
    ///
    /// assert_eq!(CostTier::from_cost(3).get(), 3);
    /// assert_eq!(CostTier::from_cost(0), CostTier::MIN);
    /// assert_eq!(CostTier::from_cost(9), CostTier::MIN);
    /// ```
    #[must_use]
    pub fn from_cost(cost: i64) -> Self {
        u8::try_from(cost)
            .ok()
            .and_then(Self::new)
            .unwrap_or(Self::MIN)
    }

    /// Raw tier value (1..=5).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based position, for bucket arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// All tiers, lowest first.
    pub fn all() -> impl Iterator<Item = CostTier> {
        (Self::MIN.0..=Self::MAX.0).map(CostTier)
    }

    /// Colour a slot or roster tile is drawn with for this tier.
    #[must_use]
    pub const fn color(self) -> TierColor {
        match self.0 {
            2 => TierColor::Green,
            3 => TierColor::Blue,
            4 => TierColor::Purple,
            5 => TierColor::Gold,
            _ => TierColor::None,
        }
    }
}

impl TryFrom<u8> for CostTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("cost tier {value} outside 1..=5"))
    }
}

impl From<CostTier> for u8 {
    fn from(tier: CostTier) -> Self {
        tier.0
    }
}

impl std::fmt::Display for CostTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tier({})", self.0)
    }
}

/// Tier colouring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierColor {
    /// Transparent (tier 1).
    None,
    Green,
    Blue,
    Purple,
    Gold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_index() {
        let slot = SlotIndex::new(12);
        assert_eq!(slot.index(), 12);
        assert_eq!(format!("{}", slot), "Slot(12)");
    }

    #[test]
    fn test_tier_bounds() {
        assert!(CostTier::new(0).is_none());
        assert!(CostTier::new(6).is_none());
        assert_eq!(CostTier::new(1), Some(CostTier::MIN));
        assert_eq!(CostTier::new(5), Some(CostTier::MAX));
    }

    #[test]
    fn test_from_cost_fallback() {
        assert_eq!(CostTier::from_cost(-1), CostTier::MIN);
        assert_eq!(CostTier::from_cost(300), CostTier::MIN);
        assert_eq!(CostTier::from_cost(4).get(), 4);
    }

    #[test]
    fn test_all_and_index() {
        let tiers: Vec<_> = CostTier::all().collect();
        assert_eq!(tiers.len(), CostTier::COUNT);
        assert_eq!(tiers[0].index(), 0);
        assert_eq!(tiers[4].index(), 4);
    }

    #[test]
    fn test_colors() {
        assert_eq!(CostTier::MIN.color(), TierColor::None);
        assert_eq!(CostTier::MAX.color(), TierColor::Gold);
        assert_eq!(CostTier::from_cost(3).color(), TierColor::Blue);
    }

    #[test]
    fn test_tier_serde_rejects_out_of_range() {
        let tier: CostTier = serde_json::from_str("4").unwrap();
        assert_eq!(tier.get(), 4);
        assert!(serde_json::from_str::<CostTier>("7").is_err());
    }
}
