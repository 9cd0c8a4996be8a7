//! Placement manager: where every unit is.
//!
//! The `PlacementManager` owns the board and the roster together and keeps
//! a location index over both, so each unit is in exactly one place:
//! one board slot or one roster bucket. It supports:
//! - adding units to the roster
//! - lifting a unit out of its current place
//! - dropping a lifted unit into a slot or a bucket
//! - location lookup by unit id
//!
//! The primitives here do not apply any game rule; `transfer` decides
//! which moves are allowed and composes these into atomic operations.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::roster::RosterPool;
use super::slots::Board;
use crate::core::{BoardConfig, CostTier, SlotIndex, UnitId};

/// Where a unit currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// On a board slot.
    Slot(SlotIndex),
    /// In a roster bucket.
    Roster(CostTier),
}

impl Location {
    #[must_use]
    pub fn is_board(self) -> bool {
        matches!(self, Location::Slot(_))
    }
}

/// Tracks board and roster membership.
///
/// ## Usage
///
/// ```
/// use bond_board::board::{Location, PlacementManager};
/// use bond_board::core::{BoardConfig, CostTier, SlotIndex, UnitId};
///
/// let mut manager = PlacementManager::new(&BoardConfig::default());
/// let tier = CostTier::new(3).unwrap();
///
/// manager.add_to_roster(UnitId(1), tier);
/// assert_eq!(manager.location(UnitId(1)), Some(Location::Roster(tier)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementManager {
    board: Board,
    roster: RosterPool,
    /// Location index: unit -> place.
    locations: FxHashMap<UnitId, Location>,
}

impl PlacementManager {
    /// Create an empty board and roster.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            board: Board::new(config),
            roster: RosterPool::new(),
            locations: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn roster(&self) -> &RosterPool {
        &self.roster
    }

    /// Current location of a unit.
    #[must_use]
    pub fn location(&self, unit: UnitId) -> Option<Location> {
        self.locations.get(&unit).copied()
    }

    /// Whether the unit is on the board.
    #[must_use]
    pub fn is_on_board(&self, unit: UnitId) -> bool {
        self.location(unit).is_some_and(Location::is_board)
    }

    /// Check if the manager tracks a unit.
    #[must_use]
    pub fn contains(&self, unit: UnitId) -> bool {
        self.locations.contains_key(&unit)
    }

    /// Total units tracked.
    #[must_use]
    pub fn total_units(&self) -> usize {
        self.locations.len()
    }

    /// Add a new unit to the end of a roster bucket.
    ///
    /// Panics if the unit is already tracked.
    pub fn add_to_roster(&mut self, unit: UnitId, tier: CostTier) {
        if self.locations.contains_key(&unit) {
            panic!("Unit {unit} already placed");
        }
        self.roster.append(tier, unit);
        self.locations.insert(unit, Location::Roster(tier));
    }

    /// Remove a unit from wherever it is.
    ///
    /// Returns its former location, or `None` if untracked. Until the unit
    /// is dropped again it is in neither the board nor the roster.
    pub(crate) fn lift(&mut self, unit: UnitId) -> Option<Location> {
        let location = self.locations.remove(&unit)?;
        match location {
            Location::Slot(slot) => {
                self.board.set(slot, None);
            }
            Location::Roster(tier) => {
                self.roster.remove(tier, unit);
            }
        }
        Some(location)
    }

    /// Put a lifted unit into an empty slot.
    ///
    /// Panics if the slot is occupied or off the board.
    pub(crate) fn drop_in_slot(&mut self, unit: UnitId, slot: SlotIndex) {
        let previous = self.board.set(slot, Some(unit));
        assert!(previous.is_none(), "Slot {slot} already occupied");
        self.locations.insert(unit, Location::Slot(slot));
    }

    /// Append a lifted unit to a roster bucket.
    pub(crate) fn drop_in_roster(&mut self, unit: UnitId, tier: CostTier) {
        self.roster.append(tier, unit);
        self.locations.insert(unit, Location::Roster(tier));
    }

    /// Check the membership invariant: every tracked unit is in exactly the
    /// place its index says, and nothing untracked is on the board or
    /// roster.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let on_board = self.board.occupied_count();
        let in_roster = self.roster.len();
        if on_board + in_roster != self.locations.len() {
            return false;
        }
        self.locations.iter().all(|(&unit, &location)| match location {
            Location::Slot(slot) => self.board.occupant(slot) == Some(unit),
            Location::Roster(tier) => {
                let bucket = self.roster.bucket(tier);
                bucket.iter().filter(|&&u| u == unit).count() == 1
            }
        })
    }
}
