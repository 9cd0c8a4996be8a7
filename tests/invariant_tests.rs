//! Property tests: random interaction sequences never break the model.
//!
//! After every operation:
//! - each unit is in exactly one slot or roster bucket
//! - no unit carries more than three items
//! - equipment bonds never repeat a base bond
//! - rejected operations leave the model unchanged

use bond_board::catalog::{Catalog, CatalogBuilder, CharacterDefinition, EquipmentDefinition};
use bond_board::core::{BoardConfig, CostTier, SlotIndex, UnitId};
use bond_board::transfer::{Destination, TransferEngine};
use proptest::prelude::*;

const UNITS: u32 = 16;

#[derive(Clone, Debug)]
enum Op {
    ToSlot(u32, u8),
    ToRoster(u32, u8),
    Cancel(u32),
    Equip(u32, usize),
    Clear(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..UNITS, 0u8..14).prop_map(|(u, s)| Op::ToSlot(u, s)),
        (0..UNITS, 1u8..=5).prop_map(|(u, t)| Op::ToRoster(u, t)),
        (0..UNITS).prop_map(Op::Cancel),
        (0..UNITS, 0usize..6).prop_map(|(u, i)| Op::Equip(u, i)),
        (0..UNITS).prop_map(Op::Clear),
    ]
}

fn catalog() -> Catalog {
    let bonds = ["Fire", "Ice", "StarRail", "Guard"];
    let mut builder = CatalogBuilder::new();
    for i in 0..UNITS as usize {
        builder = builder.character(
            CharacterDefinition::new(format!("c{i}"), (i % 6) as i64)
                .with_bond(bonds[i % bonds.len()]),
        );
    }
    for (i, bond) in ["Fire", "Ice", "StarRail", "Guard", "Wind", "Fire"].iter().enumerate() {
        builder = builder.equipment(EquipmentDefinition::new(format!("e{i}")).with_bond(*bond));
    }
    builder.build()
}

fn apply(engine: &mut TransferEngine, catalog: &Catalog, op: &Op) -> bool {
    let outcome = match *op {
        Op::ToSlot(u, s) => engine.place_or_move(UnitId(u), Destination::Slot(SlotIndex(s))),
        Op::ToRoster(u, t) => {
            let tier = CostTier::new(t).unwrap();
            engine.place_or_move(UnitId(u), Destination::Roster(tier))
        }
        Op::Cancel(u) => engine.cancel_drag(UnitId(u)),
        Op::Equip(u, i) => engine.equip(UnitId(u), &catalog.equipment_items()[i]),
        Op::Clear(u) => engine.clear_equipment(UnitId(u)),
    };
    outcome.is_applied()
}

fn snapshot(engine: &TransferEngine) -> String {
    let mut units: Vec<_> = engine.units().cloned().collect();
    units.sort_by_key(|u| u.id());
    format!("{:?}|{:?}|{:?}", engine.placement(), engine.board(), units)
}

proptest! {
    #[test]
    fn invariants_hold_for_any_sequence(ops in proptest::collection::vec(op(), 0..200)) {
        let catalog = catalog();
        let mut engine = TransferEngine::from_catalog(BoardConfig::default(), &catalog);

        for op in &ops {
            let before = snapshot(&engine);
            let history = engine.history().len();

            let applied = apply(&mut engine, &catalog, op);

            prop_assert!(engine.check_invariants(), "invariants broken by {:?}", op);
            prop_assert!(engine.board().occupied_count() <= 13);
            prop_assert_eq!(engine.unit_count(), UNITS as usize);
            if applied {
                prop_assert_eq!(engine.history().len(), history + 1);
            } else {
                prop_assert_eq!(snapshot(&engine), before, "rejected {:?} changed state", op);
            }
        }
    }

    #[test]
    fn clear_twice_equals_clear_once(ops in proptest::collection::vec(op(), 0..60), unit in 0..UNITS) {
        let catalog = catalog();
        let mut engine = TransferEngine::from_catalog(BoardConfig::default(), &catalog);
        for op in &ops {
            apply(&mut engine, &catalog, op);
        }

        engine.clear_equipment(UnitId(unit));
        let once = snapshot(&engine);
        engine.clear_equipment(UnitId(unit));

        prop_assert_eq!(snapshot(&engine), once);
    }
}
