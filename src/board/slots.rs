//! The board: a fixed row of slots split into front and back.

use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, Row, SlotIndex, UnitId};

/// Board slots, each holding at most one unit.
///
/// ```
/// use bond_board::board::Board;
/// use bond_board::core::{BoardConfig, SlotIndex};
///
/// let board = Board::new(&BoardConfig::default());
/// assert_eq!(board.capacity(), 13);
/// assert_eq!(board.occupied_count(), 0);
/// assert!(board.occupant(SlotIndex(12)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: Vec<Option<UnitId>>,
    front_row_len: u8,
}

impl Board {
    /// Create an empty board with the configured layout.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            slots: vec![None; config.slot_count as usize],
            front_row_len: config.front_row_len,
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether the slot exists on this board.
    #[must_use]
    pub fn contains(&self, slot: SlotIndex) -> bool {
        slot.index() < self.slots.len()
    }

    /// Row of a slot, `None` if off the board.
    #[must_use]
    pub fn row_of(&self, slot: SlotIndex) -> Option<Row> {
        if !self.contains(slot) {
            None
        } else if slot.0 < self.front_row_len {
            Some(Row::Front)
        } else {
            Some(Row::Back)
        }
    }

    /// Unit in a slot. `None` for empty or nonexistent slots.
    #[must_use]
    pub fn occupant(&self, slot: SlotIndex) -> Option<UnitId> {
        self.slots.get(slot.index()).copied().flatten()
    }

    #[must_use]
    pub fn is_occupied(&self, slot: SlotIndex) -> bool {
        self.occupant(slot).is_some()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Occupied slots with their units, in slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotIndex, UnitId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|unit| (SlotIndex(i as u8), unit)))
    }

    /// Every slot in order, occupied or not.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, Option<UnitId>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (SlotIndex(i as u8), *s))
    }

    /// Put a unit in a slot, returning the previous occupant.
    ///
    /// Panics if the slot is off the board.
    pub(crate) fn set(&mut self, slot: SlotIndex, unit: Option<UnitId>) -> Option<UnitId> {
        std::mem::replace(&mut self.slots[slot.index()], unit)
    }
}
