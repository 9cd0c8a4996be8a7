//! Transfer descriptions: where a unit is sent, what happened, and why a
//! request was refused.
//!
//! A transfer request is a unit plus a `Destination`. The engine answers
//! with a `TransferOutcome`: either the `TransferKind` it applied or the
//! `Rejection` that left the model untouched. Rejections are values, not
//! errors; a refused drop is ordinary interaction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Location;
use crate::core::{CostTier, SlotIndex, UnitId};
use crate::units::EquipConflict;

/// Where a unit is being sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// A board slot.
    Slot(SlotIndex),
    /// The end of a roster bucket.
    Roster(CostTier),
}

impl From<Location> for Destination {
    fn from(location: Location) -> Self {
        match location {
            Location::Slot(slot) => Destination::Slot(slot),
            Location::Roster(tier) => Destination::Roster(tier),
        }
    }
}

/// An applied transfer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferKind {
    /// A roster unit took a slot, evicting any occupant to its own bucket.
    Placed {
        unit: UnitId,
        slot: SlotIndex,
        evicted: Option<UnitId>,
    },
    /// A board unit moved to another slot, swapping with any occupant.
    Moved {
        unit: UnitId,
        from: SlotIndex,
        to: SlotIndex,
        swapped: Option<UnitId>,
    },
    /// A unit went to the end of its own roster bucket.
    Returned {
        unit: UnitId,
        from: Location,
        tier: CostTier,
    },
    /// An item was attached.
    Equipped { unit: UnitId, item: String },
    /// All equipment was removed.
    Cleared { unit: UnitId },
}

impl TransferKind {
    /// The unit the request was about.
    #[must_use]
    pub fn unit(&self) -> UnitId {
        match self {
            TransferKind::Placed { unit, .. }
            | TransferKind::Moved { unit, .. }
            | TransferKind::Returned { unit, .. }
            | TransferKind::Equipped { unit, .. }
            | TransferKind::Cleared { unit } => *unit,
        }
    }

    /// Whether board membership changed.
    #[must_use]
    pub fn changes_membership(&self) -> bool {
        matches!(
            self,
            TransferKind::Placed { .. } | TransferKind::Moved { .. } | TransferKind::Returned { .. }
        )
    }
}

/// Why a transfer was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("unknown unit {0}")]
    UnknownUnit(UnitId),
    #[error("{0} is not on the board")]
    InvalidSlot(SlotIndex),
    #[error("unit is already in {0}")]
    SameSlot(SlotIndex),
    #[error("unit belongs to {home}, not {target}")]
    CrossTier { home: CostTier, target: CostTier },
    #[error("unit {0} is not on the board")]
    NotOnBoard(UnitId),
    #[error("{0} is empty")]
    EmptySlot(SlotIndex),
    #[error("nothing accepts this drop")]
    NoTarget,
    #[error("unknown equipment {0}")]
    UnknownEquipment(String),
    #[error(transparent)]
    Equip(#[from] EquipConflict),
}

/// Result of a transfer request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferOutcome {
    Applied(TransferKind),
    Rejected(Rejection),
}

impl TransferOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, TransferOutcome::Applied(_))
    }

    #[must_use]
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            TransferOutcome::Rejected(rejection) => Some(rejection),
            TransferOutcome::Applied(_) => None,
        }
    }

    #[must_use]
    pub fn applied(&self) -> Option<&TransferKind> {
        match self {
            TransferOutcome::Applied(kind) => Some(kind),
            TransferOutcome::Rejected(_) => None,
        }
    }
}

impl From<Result<TransferKind, Rejection>> for TransferOutcome {
    fn from(result: Result<TransferKind, Rejection>) -> Self {
        match result {
            Ok(kind) => TransferOutcome::Applied(kind),
            Err(rejection) => TransferOutcome::Rejected(rejection),
        }
    }
}

/// An applied transfer with its position in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    /// 0-based, increasing by one per applied transfer.
    pub sequence: u32,
    pub kind: TransferKind,
}

impl TransferRecord {
    #[must_use]
    pub fn new(sequence: u32, kind: TransferKind) -> Self {
        Self { sequence, kind }
    }
}
