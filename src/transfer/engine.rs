//! The transfer engine: the only code that mutates the board model.
//!
//! Every operation validates first and mutates second, so a rejected
//! request leaves units, board and roster exactly as they were.
//!
//! ## Placement rules
//!
//! | source | destination | result |
//! |--------|-------------|--------|
//! | slot   | empty slot  | move |
//! | slot   | occupied slot | swap, both keep their equipment |
//! | roster | empty slot  | place |
//! | roster | occupied slot | place, occupant appended to its own bucket |
//! | slot   | any bucket  | appended to its own bucket |
//! | roster | own bucket  | moved to the end of the bucket |
//! | roster | other bucket | rejected |
//!
//! Equipment can only change while a unit is on the board.

use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::action::{Destination, Rejection, TransferKind, TransferOutcome, TransferRecord};
use crate::board::{Board, Location, PlacementManager, RosterPool};
use crate::catalog::{
    contains_bond, Catalog, CharacterDefinition, EquipmentDefinition, EquipmentTool,
};
use crate::core::{BoardConfig, CostTier, SlotIndex, UnitId};
use crate::units::UnitInstance;

/// Owns the units and their placement.
///
/// ## Example
///
/// ```
/// use bond_board::catalog::{CatalogBuilder, CharacterDefinition};
/// use bond_board::core::{BoardConfig, SlotIndex};
/// use bond_board::transfer::{Destination, TransferEngine};
///
/// let catalog = CatalogBuilder::new()
///     .character(CharacterDefinition::new("Himeko", 4).with_bond("StarRail"))
///     .build();
/// let mut engine = TransferEngine::from_catalog(BoardConfig::default(), &catalog);
///
/// let himeko = engine.roster_units(catalog.characters()[0].tier()).next().unwrap().id();
/// let outcome = engine.place_or_move(himeko, Destination::Slot(SlotIndex(0)));
///
/// assert!(outcome.is_applied());
/// assert_eq!(engine.board().occupied_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct TransferEngine {
    config: BoardConfig,
    units: FxHashMap<UnitId, UnitInstance>,
    placement: PlacementManager,
    history: Vector<TransferRecord>,
    next_sequence: u32,
    next_id: UnitId,
}

impl TransferEngine {
    /// An engine with an empty board and roster.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let placement = PlacementManager::new(&config);
        Self {
            config,
            units: FxHashMap::default(),
            placement,
            history: Vector::new(),
            next_sequence: 0,
            next_id: UnitId::new(0),
        }
    }

    /// An engine with one roster unit per catalog character.
    #[must_use]
    pub fn from_catalog(config: BoardConfig, catalog: &Catalog) -> Self {
        let mut engine = Self::new(config);
        engine.populate(catalog);
        engine
    }

    /// Stage one unit per character, in catalog order, each at the end of
    /// its tier bucket.
    pub fn populate(&mut self, catalog: &Catalog) -> Vec<UnitId> {
        let ids: Vec<UnitId> = catalog
            .characters()
            .iter()
            .map(|def| self.spawn(Arc::new(def.clone())))
            .collect();
        info!(units = ids.len(), "roster populated");
        ids
    }

    /// Create a unit for `character` at the end of its tier bucket.
    pub fn spawn(&mut self, character: Arc<CharacterDefinition>) -> UnitId {
        let id = self.next_id;
        self.next_id = id.next();

        let unit = UnitInstance::new(id, character);
        self.placement.add_to_roster(id, unit.tier());
        self.units.insert(id, unit);
        id
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&UnitInstance> {
        self.units.get(&id)
    }

    /// All units, in no particular order.
    pub fn units(&self) -> impl Iterator<Item = &UnitInstance> {
        self.units.values()
    }

    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn placement(&self) -> &PlacementManager {
        &self.placement
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.placement.board()
    }

    #[must_use]
    pub fn roster(&self) -> &RosterPool {
        self.placement.roster()
    }

    #[must_use]
    pub fn location(&self, id: UnitId) -> Option<Location> {
        self.placement.location(id)
    }

    /// Unit in a slot.
    #[must_use]
    pub fn occupant(&self, slot: SlotIndex) -> Option<&UnitInstance> {
        self.board().occupant(slot).and_then(|id| self.units.get(&id))
    }

    /// Board occupants in slot order.
    pub fn board_units(&self) -> impl Iterator<Item = (SlotIndex, &UnitInstance)> + '_ {
        self.board()
            .occupied()
            .filter_map(|(slot, id)| self.units.get(&id).map(|unit| (slot, unit)))
    }

    /// Units in a roster bucket, in bucket order.
    pub fn roster_units(&self, tier: CostTier) -> impl Iterator<Item = &UnitInstance> + '_ {
        self.roster()
            .bucket(tier)
            .iter()
            .filter_map(|id| self.units.get(id))
    }

    /// Applied transfers, oldest first.
    ///
    /// Holds at most `BoardConfig::history_limit` records; sequence
    /// numbers keep counting after old records are dropped.
    #[must_use]
    pub fn history(&self) -> &Vector<TransferRecord> {
        &self.history
    }

    // === Operations ===

    /// Send a unit to a slot or roster bucket.
    pub fn place_or_move(&mut self, unit: UnitId, destination: Destination) -> TransferOutcome {
        let result = self.try_place_or_move(unit, destination);
        self.commit(unit, result)
    }

    /// A drag of `unit` ended without a drop target.
    ///
    /// A board unit goes back to the end of its own bucket. A roster unit
    /// stays where it is and the request is rejected.
    pub fn cancel_drag(&mut self, unit: UnitId) -> TransferOutcome {
        let result = match self.locate(unit) {
            Ok(from @ Location::Slot(_)) => self
                .home_tier(unit)
                .map(|tier| self.send_home(unit, from, tier)),
            Ok(Location::Roster(_)) => Err(Rejection::NotOnBoard(unit)),
            Err(rejection) => Err(rejection),
        };
        self.commit(unit, result)
    }

    /// Attach an item to a board unit.
    pub fn equip(&mut self, unit: UnitId, item: &EquipmentDefinition) -> TransferOutcome {
        let result = self.try_equip(unit, item);
        self.commit(unit, result)
    }

    /// Strip every item from a board unit.
    pub fn clear_equipment(&mut self, unit: UnitId) -> TransferOutcome {
        let result = self.board_unit_mut(unit).map(|instance| {
            instance.clear_equipment();
            TransferKind::Cleared { unit }
        });
        self.commit(unit, result)
    }

    /// Apply a palette tool to a board unit, resolving items by name.
    pub fn apply_tool(
        &mut self,
        unit: UnitId,
        tool: &EquipmentTool,
        catalog: &Catalog,
    ) -> TransferOutcome {
        match tool {
            EquipmentTool::Clear => self.clear_equipment(unit),
            EquipmentTool::Item(name) => match catalog.equipment(name) {
                Some(item) => self.equip(unit, item),
                None => self.commit(unit, Err(Rejection::UnknownEquipment(name.clone()))),
            },
        }
    }

    /// Check the model invariants:
    /// - every unit is in exactly one slot or bucket
    /// - no unit carries more than the equipment capacity
    /// - equipment bonds never repeat a base bond
    #[must_use]
    pub fn check_invariants(&self) -> bool {
        if !self.placement.is_consistent() || self.placement.total_units() != self.units.len() {
            return false;
        }
        if self.board().occupied_count() > self.board().capacity() {
            return false;
        }
        self.units.values().all(|unit| {
            self.placement.contains(unit.id())
                && unit.equipment().len() <= self.config.max_equipment
                && unit
                    .equipment_bonds()
                    .iter()
                    .all(|bond| !contains_bond(unit.base_bonds(), bond))
        })
    }

    // === Internals ===

    fn locate(&self, unit: UnitId) -> Result<Location, Rejection> {
        self.placement
            .location(unit)
            .ok_or(Rejection::UnknownUnit(unit))
    }

    fn home_tier(&self, unit: UnitId) -> Result<CostTier, Rejection> {
        self.units
            .get(&unit)
            .map(UnitInstance::tier)
            .ok_or(Rejection::UnknownUnit(unit))
    }

    fn board_unit_mut(&mut self, unit: UnitId) -> Result<&mut UnitInstance, Rejection> {
        match self.locate(unit)? {
            Location::Slot(_) => self
                .units
                .get_mut(&unit)
                .ok_or(Rejection::UnknownUnit(unit)),
            Location::Roster(_) => Err(Rejection::NotOnBoard(unit)),
        }
    }

    fn try_place_or_move(
        &mut self,
        unit: UnitId,
        destination: Destination,
    ) -> Result<TransferKind, Rejection> {
        let from = self.locate(unit)?;
        match destination {
            Destination::Slot(slot) => self.to_slot(unit, from, slot),
            Destination::Roster(target) => {
                let home = self.home_tier(unit)?;
                if matches!(from, Location::Roster(_)) && target != home {
                    return Err(Rejection::CrossTier { home, target });
                }
                Ok(self.send_home(unit, from, home))
            }
        }
    }

    fn to_slot(
        &mut self,
        unit: UnitId,
        from: Location,
        slot: SlotIndex,
    ) -> Result<TransferKind, Rejection> {
        if !self.board().contains(slot) {
            return Err(Rejection::InvalidSlot(slot));
        }
        if from == Location::Slot(slot) {
            return Err(Rejection::SameSlot(slot));
        }
        let occupant = self.board().occupant(slot);

        match from {
            Location::Slot(source) => {
                self.placement.lift(unit);
                if let Some(other) = occupant {
                    self.placement.lift(other);
                    self.placement.drop_in_slot(other, source);
                }
                self.placement.drop_in_slot(unit, slot);
                Ok(TransferKind::Moved {
                    unit,
                    from: source,
                    to: slot,
                    swapped: occupant,
                })
            }
            Location::Roster(_) => {
                let evicted = match occupant {
                    Some(other) => Some((other, self.home_tier(other)?)),
                    None => None,
                };
                self.placement.lift(unit);
                if let Some((other, tier)) = evicted {
                    self.placement.lift(other);
                    self.placement.drop_in_roster(other, tier);
                }
                self.placement.drop_in_slot(unit, slot);
                Ok(TransferKind::Placed {
                    unit,
                    slot,
                    evicted: occupant,
                })
            }
        }
    }

    fn send_home(&mut self, unit: UnitId, from: Location, tier: CostTier) -> TransferKind {
        self.placement.lift(unit);
        self.placement.drop_in_roster(unit, tier);
        TransferKind::Returned { unit, from, tier }
    }

    fn try_equip(
        &mut self,
        unit: UnitId,
        item: &EquipmentDefinition,
    ) -> Result<TransferKind, Rejection> {
        let capacity = self.config.max_equipment;
        let instance = self.board_unit_mut(unit)?;
        instance.equip(item, capacity)?;
        Ok(TransferKind::Equipped {
            unit,
            item: item.name.clone(),
        })
    }

    fn commit(&mut self, unit: UnitId, result: Result<TransferKind, Rejection>) -> TransferOutcome {
        match &result {
            Ok(kind) => {
                debug!(unit = %unit, ?kind, "transfer applied");
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                self.history.push_back(TransferRecord::new(sequence, kind.clone()));
                while self.history.len() > self.config.history_limit {
                    self.history.pop_front();
                }
            }
            Err(rejection) => {
                debug!(unit = %unit, reason = %rejection, "transfer rejected");
            }
        }
        result.into()
    }
}
