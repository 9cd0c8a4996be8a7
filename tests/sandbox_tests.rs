//! Drag/drop interaction tests through the sandbox facade.

use bond_board::catalog::{
    BondDefinition, CatalogBuilder, CharacterDefinition, EquipmentDefinition, EquipmentTool,
    IconDefinition, PositionAffinity,
};
use bond_board::core::{BoardConfig, CostTier, SlotIndex, TierColor, UnitId};
use bond_board::sandbox::{DragPayload, DropEffect, DropTarget, Sandbox};
use bond_board::{Location, Rejection, SlotAppearance};

fn sandbox() -> Sandbox {
    let catalog = CatalogBuilder::new()
        .character(
            CharacterDefinition::new("Himeko", 4)
                .with_bond("StarRail")
                .with_position(PositionAffinity::Back),
        )
        .character(
            CharacterDefinition::new("Welt", 3)
                .with_bond("StarRail")
                .with_position(PositionAffinity::Either),
        )
        .character(CharacterDefinition::new("Arlan", 1).with_bond("Guard"))
        .equipment(EquipmentDefinition::new("Torch").with_bond("Fire").with_file("torch.png"))
        .equipment(EquipmentDefinition::new("Pass").with_bond("StarRail").with_file("pass.png"))
        .bond(BondDefinition::new("StarRail", [2, 4]))
        .bond(BondDefinition::new("Fire", [1]))
        .bond(BondDefinition::new("Guard", [2]))
        .icon(IconDefinition::new("精密拆装扳手", "wrench.png"))
        .build();
    Sandbox::new(catalog, BoardConfig::default())
}

fn unit(n: u32) -> DragPayload {
    DragPayload::Unit(UnitId(n))
}

fn item(name: &str) -> DragPayload {
    DragPayload::Equipment(EquipmentTool::item(name))
}

fn slot(n: u8) -> Option<DropTarget> {
    Some(DropTarget::Slot(SlotIndex(n)))
}

#[test]
fn test_full_session() {
    let mut sandbox = sandbox();

    assert!(sandbox.drop(unit(0), slot(7)).is_applied());
    assert!(sandbox.drop(unit(1), slot(8)).is_applied());
    assert!(sandbox.drop(item("Torch"), slot(7)).is_applied());
    assert_eq!(sandbox.board_count_label(), "2/13");

    let names: Vec<_> = sandbox.synergies().into_iter().map(|e| e.name).collect();
    assert_eq!(names, ["Fire", "StarRail"]);

    // Wrench strips the torch; the unique bond disappears.
    let wrench = DragPayload::Equipment(EquipmentTool::Clear);
    assert!(sandbox.drop(wrench, slot(7)).is_applied());
    let names: Vec<_> = sandbox.synergies().into_iter().map(|e| e.name).collect();
    assert_eq!(names, ["StarRail"]);

    assert_eq!(sandbox.engine().history().len(), 4);
}

#[test]
fn test_conflicting_item_is_silently_refused() {
    let mut sandbox = sandbox();
    sandbox.drop(unit(0), slot(0));

    let outcome = sandbox.drop(item("Pass"), slot(0));

    assert!(matches!(outcome.rejection(), Some(Rejection::Equip(_))));
    assert!(sandbox.slot_view(SlotIndex(0)).unwrap().badges.is_empty());
}

#[test]
fn test_unknown_item_refused() {
    let mut sandbox = sandbox();
    sandbox.drop(unit(0), slot(0));

    let outcome = sandbox.drop(item("Lantern"), slot(0));

    assert_eq!(
        outcome.rejection(),
        Some(&Rejection::UnknownEquipment("Lantern".to_string()))
    );
}

#[test]
fn test_drag_over_feedback() {
    let mut sandbox = sandbox();
    sandbox.drop(unit(2), slot(0));

    assert_eq!(sandbox.drag_over(&unit(0), DropTarget::Slot(SlotIndex(0))), DropEffect::Move);
    assert_eq!(sandbox.drag_over(&item("Torch"), DropTarget::Slot(SlotIndex(0))), DropEffect::Copy);
    assert_eq!(sandbox.drag_over(&item("Torch"), DropTarget::Slot(SlotIndex(1))), DropEffect::None);
    assert_eq!(
        sandbox.drag_over(
            &DragPayload::Equipment(EquipmentTool::Clear),
            DropTarget::Slot(SlotIndex(0))
        ),
        DropEffect::Copy
    );
}

#[test]
fn test_slot_appearance_by_row() {
    let mut sandbox = sandbox();
    sandbox.drop(unit(0), slot(0));
    sandbox.drop(unit(1), slot(1));
    sandbox.drop(unit(2), slot(12));

    let appearances: Vec<_> = sandbox.board_views().into_iter().map(|v| v.appearance).collect();
    assert_eq!(
        appearances,
        vec![
            SlotAppearance::OppositeRow,
            SlotAppearance::Tier(TierColor::Blue),
            SlotAppearance::OppositeRow,
        ]
    );
}

#[test]
fn test_unit_dropped_on_foreign_bucket_goes_home() {
    let mut sandbox = sandbox();
    sandbox.drop(unit(0), slot(4));

    let outcome = sandbox.drop(unit(0), Some(DropTarget::Roster(CostTier::MIN)));

    assert!(outcome.is_applied());
    assert_eq!(
        sandbox.location(UnitId(0)),
        Some(Location::Roster(CostTier::new(4).unwrap()))
    );
}

#[test]
fn test_roster_unit_cancel_changes_nothing() {
    let mut sandbox = sandbox();
    let before: Vec<_> = sandbox.roster_units(CostTier::MIN).map(|u| u.id()).collect();

    let outcome = sandbox.drop(unit(2), None);

    assert!(!outcome.is_applied());
    let after: Vec<_> = sandbox.roster_units(CostTier::MIN).map(|u| u.id()).collect();
    assert_eq!(before, after);
}
