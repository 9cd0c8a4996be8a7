//! The sandbox: catalog, engine and the drag/drop surface a front end
//! talks to.
//!
//! A front end turns pointer events into `DragPayload`s and
//! `DropTarget`s, asks `drag_over` which cursor to show, calls `drop`
//! when the pointer is released, then re-reads the board, roster and
//! synergy list. Payloads carry unit ids and tool names, never rendered
//! state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{unit_appearance, Location, SlotAppearance};
use crate::catalog::{
    load_catalog, Catalog, CatalogLoadReport, EquipmentTool, IconDefinition, PaletteEntry,
};
use crate::core::{BoardConfig, CostTier, DataPaths, SlotIndex, UnitId};
use crate::synergy::{SynergyAggregator, SynergyEntry};
use crate::transfer::{Destination, Rejection, TransferEngine, TransferOutcome};
use crate::units::UnitInstance;

/// What is being dragged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragPayload {
    /// A unit from the board or roster.
    Unit(UnitId),
    /// An entry of the equipment palette.
    Equipment(EquipmentTool),
}

/// What the pointer is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropTarget {
    Slot(SlotIndex),
    Roster(CostTier),
}

impl From<DropTarget> for Destination {
    fn from(target: DropTarget) -> Self {
        match target {
            DropTarget::Slot(slot) => Destination::Slot(slot),
            DropTarget::Roster(tier) => Destination::Roster(tier),
        }
    }
}

/// Cursor feedback while dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropEffect {
    Move,
    Copy,
    None,
}

/// Render data for one occupied slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotView<'a> {
    pub slot: SlotIndex,
    pub unit: &'a UnitInstance,
    pub appearance: SlotAppearance,
    pub position_icon: Option<&'a IconDefinition>,
    /// Equipment badge icons in attachment order.
    pub badges: Vec<&'a str>,
}

/// Catalog plus transfer engine.
///
/// ## Example
///
/// ```
/// use bond_board::catalog::{BondDefinition, CatalogBuilder, CharacterDefinition};
/// use bond_board::core::{BoardConfig, SlotIndex, UnitId};
/// use bond_board::sandbox::{DragPayload, DropTarget, Sandbox};
///
/// let catalog = CatalogBuilder::new()
///     .character(CharacterDefinition::new("Himeko", 4).with_bond("StarRail"))
///     .bond(BondDefinition::new("StarRail", [1]))
///     .build();
/// let mut sandbox = Sandbox::new(catalog, BoardConfig::default());
///
/// let outcome = sandbox.drop(DragPayload::Unit(UnitId(0)), Some(DropTarget::Slot(SlotIndex(0))));
/// assert!(outcome.is_applied());
/// assert_eq!(sandbox.board_count_label(), "1/13");
/// assert_eq!(sandbox.synergies()[0].name, "StarRail");
/// ```
#[derive(Clone, Debug)]
pub struct Sandbox {
    catalog: Catalog,
    engine: TransferEngine,
}

impl Sandbox {
    /// Stage every catalog character in the roster.
    #[must_use]
    pub fn new(catalog: Catalog, config: BoardConfig) -> Self {
        let engine = TransferEngine::from_catalog(config, &catalog);
        Self { catalog, engine }
    }

    /// Load the catalogs from disk and stage the roster.
    ///
    /// Catalog problems never fail the load; see the report.
    #[must_use]
    pub fn load(paths: &DataPaths, config: BoardConfig) -> (Self, CatalogLoadReport) {
        let loaded = load_catalog(paths);
        (Self::new(loaded.catalog, config), loaded.report)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn engine(&self) -> &TransferEngine {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        self.engine.config()
    }

    // === Queries ===

    /// Ranked synergies of the current board.
    #[must_use]
    pub fn synergies(&self) -> Vec<SynergyEntry> {
        SynergyAggregator::new(&self.catalog)
            .aggregate(self.engine.board_units().map(|(_, unit)| unit))
    }

    /// Board counter text, e.g. `5/13`.
    #[must_use]
    pub fn board_count_label(&self) -> String {
        let board = self.engine.board();
        format!("{}/{}", board.occupied_count(), board.capacity())
    }

    /// Render data for a slot, `None` when it is empty.
    #[must_use]
    pub fn slot_view(&self, slot: SlotIndex) -> Option<SlotView<'_>> {
        let unit = self.engine.occupant(slot)?;
        let row = self.engine.board().row_of(slot)?;
        let config = self.config();
        Some(SlotView {
            slot,
            unit,
            appearance: unit_appearance(row, unit),
            position_icon: self.catalog.position_icon(unit.position(), config),
            badges: unit.badges(config.max_equipment).collect(),
        })
    }

    /// Views of every occupied slot, in slot order.
    #[must_use]
    pub fn board_views(&self) -> Vec<SlotView<'_>> {
        self.engine
            .board()
            .occupied()
            .filter_map(|(slot, _)| self.slot_view(slot))
            .collect()
    }

    /// Units in a roster bucket, in order.
    pub fn roster_units(&self, tier: CostTier) -> impl Iterator<Item = &UnitInstance> + '_ {
        self.engine.roster_units(tier)
    }

    /// Draggable equipment entries.
    #[must_use]
    pub fn equipment_palette(&self) -> Vec<PaletteEntry> {
        self.catalog.equipment_palette(self.config())
    }

    // === Interaction ===

    /// Which drop effect to show for `payload` over `target`.
    #[must_use]
    pub fn drag_over(&self, payload: &DragPayload, target: DropTarget) -> DropEffect {
        match (payload, target) {
            (DragPayload::Unit(_), DropTarget::Slot(slot))
                if !self.engine.board().contains(slot) =>
            {
                DropEffect::None
            }
            (DragPayload::Unit(_), _) => DropEffect::Move,
            (DragPayload::Equipment(_), DropTarget::Slot(slot))
                if self.engine.board().is_occupied(slot) =>
            {
                DropEffect::Copy
            }
            (DragPayload::Equipment(_), _) => DropEffect::None,
        }
    }

    /// Release `payload` over `target`; `None` means no target accepted
    /// the drop.
    pub fn drop(&mut self, payload: DragPayload, target: Option<DropTarget>) -> TransferOutcome {
        match payload {
            DragPayload::Unit(unit) => match target {
                Some(target) => self.engine.place_or_move(unit, target.into()),
                None => self.engine.cancel_drag(unit),
            },
            DragPayload::Equipment(tool) => self.drop_tool(&tool, target),
        }
    }

    /// Where a unit currently is.
    #[must_use]
    pub fn location(&self, unit: UnitId) -> Option<Location> {
        self.engine.location(unit)
    }

    fn drop_tool(&mut self, tool: &EquipmentTool, target: Option<DropTarget>) -> TransferOutcome {
        let slot = match target {
            Some(DropTarget::Slot(slot)) => slot,
            _ => return reject(Rejection::NoTarget),
        };
        if !self.engine.board().contains(slot) {
            return reject(Rejection::InvalidSlot(slot));
        }
        match self.engine.board().occupant(slot) {
            Some(unit) => self.engine.apply_tool(unit, tool, &self.catalog),
            None => reject(Rejection::EmptySlot(slot)),
        }
    }
}

fn reject(rejection: Rejection) -> TransferOutcome {
    debug!(reason = %rejection, "drop rejected");
    TransferOutcome::Rejected(rejection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        BondDefinition, CatalogBuilder, CharacterDefinition, EquipmentDefinition, IconDefinition,
        PositionAffinity,
    };
    use crate::core::TierColor;

    fn sandbox() -> Sandbox {
        let catalog = CatalogBuilder::new()
            .character(
                CharacterDefinition::new("Himeko", 4)
                    .with_bond("StarRail")
                    .with_position(PositionAffinity::Back),
            )
            .character(CharacterDefinition::new("March", 2).with_bond("Ice"))
            .equipment(
                EquipmentDefinition::new("Torch")
                    .with_bond("Fire")
                    .with_file("torch.png"),
            )
            .bond(BondDefinition::new("StarRail", [2, 4]))
            .bond(BondDefinition::new("Fire", [1]))
            .icon(IconDefinition::new("后台", "back.png"))
            .icon(IconDefinition::new("精密拆装扳手", "wrench.png"))
            .build();
        Sandbox::new(catalog, BoardConfig::default())
    }

    fn to_slot(n: u8) -> Option<DropTarget> {
        Some(DropTarget::Slot(SlotIndex(n)))
    }

    #[test]
    fn test_drag_over_effects() {
        let mut sandbox = sandbox();
        let unit = DragPayload::Unit(UnitId(0));
        let torch = DragPayload::Equipment(EquipmentTool::item("Torch"));

        assert_eq!(sandbox.drag_over(&unit, DropTarget::Slot(SlotIndex(0))), DropEffect::Move);
        assert_eq!(sandbox.drag_over(&unit, DropTarget::Roster(CostTier::MIN)), DropEffect::Move);
        assert_eq!(sandbox.drag_over(&unit, DropTarget::Slot(SlotIndex(13))), DropEffect::None);
        assert_eq!(sandbox.drag_over(&torch, DropTarget::Slot(SlotIndex(0))), DropEffect::None);

        sandbox.drop(unit, to_slot(0));
        assert_eq!(sandbox.drag_over(&torch, DropTarget::Slot(SlotIndex(0))), DropEffect::Copy);
        assert_eq!(sandbox.drag_over(&torch, DropTarget::Roster(CostTier::MIN)), DropEffect::None);
    }

    #[test]
    fn test_drop_equipment_on_occupant() {
        let mut sandbox = sandbox();
        sandbox.drop(DragPayload::Unit(UnitId(0)), to_slot(7));

        let outcome = sandbox.drop(DragPayload::Equipment(EquipmentTool::item("Torch")), to_slot(7));
        assert!(outcome.is_applied());

        let view = sandbox.slot_view(SlotIndex(7)).unwrap();
        assert_eq!(view.badges, ["torch.png"]);
        assert_eq!(view.appearance, SlotAppearance::Tier(TierColor::Purple));
        assert_eq!(view.position_icon.map(|i| i.file.as_str()), Some("back.png"));

        let names: Vec<_> = sandbox.synergies().into_iter().map(|e| e.name).collect();
        assert_eq!(names, ["Fire", "StarRail"]);
    }

    #[test]
    fn test_drop_equipment_needs_occupied_slot() {
        let mut sandbox = sandbox();
        let torch = || DragPayload::Equipment(EquipmentTool::item("Torch"));

        assert_eq!(
            sandbox.drop(torch(), to_slot(3)).rejection(),
            Some(&Rejection::EmptySlot(SlotIndex(3)))
        );
        assert_eq!(sandbox.drop(torch(), None).rejection(), Some(&Rejection::NoTarget));
        assert_eq!(
            sandbox
                .drop(torch(), Some(DropTarget::Roster(CostTier::MIN)))
                .rejection(),
            Some(&Rejection::NoTarget)
        );
    }

    #[test]
    fn test_opposite_row_highlight() {
        let mut sandbox = sandbox();
        sandbox.drop(DragPayload::Unit(UnitId(0)), to_slot(0));
        assert_eq!(
            sandbox.slot_view(SlotIndex(0)).unwrap().appearance,
            SlotAppearance::OppositeRow
        );
    }

    #[test]
    fn test_cancelled_drop_returns_unit() {
        let mut sandbox = sandbox();
        sandbox.drop(DragPayload::Unit(UnitId(1)), to_slot(2));
        assert_eq!(sandbox.board_count_label(), "1/13");

        assert!(sandbox.drop(DragPayload::Unit(UnitId(1)), None).is_applied());
        assert_eq!(sandbox.board_count_label(), "0/13");
        assert_eq!(
            sandbox.location(UnitId(1)),
            Some(Location::Roster(CostTier::new(2).unwrap()))
        );
    }

    #[test]
    fn test_palette_ends_with_clear_tool() {
        let sandbox = sandbox();
        let palette = sandbox.equipment_palette();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette[1].tool, EquipmentTool::Clear);
        assert_eq!(palette[1].file, "wrench.png");
    }
}
