//! The roster pool: units waiting off-board, bucketed by cost tier.
//!
//! Buckets are ordered. New arrivals always go to the end of their bucket.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{CostTier, UnitId};

/// Tier-bucketed staging area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPool {
    buckets: [Vector<UnitId>; CostTier::COUNT],
}

impl RosterPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Units in a tier bucket, in order.
    #[must_use]
    pub fn bucket(&self, tier: CostTier) -> &Vector<UnitId> {
        &self.buckets[tier.index()]
    }

    /// Position of a unit within a bucket.
    #[must_use]
    pub fn position(&self, tier: CostTier, unit: UnitId) -> Option<usize> {
        self.bucket(tier).index_of(&unit)
    }

    /// Total units across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vector::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All buckets with their tier, lowest tier first.
    pub fn iter(&self) -> impl Iterator<Item = (CostTier, &Vector<UnitId>)> {
        CostTier::all().zip(self.buckets.iter())
    }

    /// Append a unit to the end of a bucket.
    pub(crate) fn append(&mut self, tier: CostTier, unit: UnitId) {
        self.buckets[tier.index()].push_back(unit);
    }

    /// Remove a unit from a bucket. Returns whether it was there.
    pub(crate) fn remove(&mut self, tier: CostTier, unit: UnitId) -> bool {
        let bucket = &mut self.buckets[tier.index()];
        match bucket.index_of(&unit) {
            Some(pos) => {
                bucket.remove(pos);
                true
            }
            None => false,
        }
    }
}
