use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    random_fleet_layout, validate_placement, Coordinate, CoordError, FleetTree, MatchError,
    Orientation, PlacementError, ShipType,
};

fn at(label: &str, size: u8) -> Coordinate {
    Coordinate::parse(label, size).unwrap()
}

#[test]
fn orientation_parses_long_and_short_forms() {
    assert_eq!("horizontal".parse::<Orientation>(), Ok(Orientation::Horizontal));
    assert_eq!(" V ".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert!(matches!(
        "diagonal".parse::<Orientation>(),
        Err(MatchError::InvalidOrientation(_))
    ));
}

#[test]
fn footprint_extends_right_or_down() -> Result<(), PlacementError> {
    let none = HashSet::new();
    let h = validate_placement(10, at("B3", 10), Orientation::Horizontal, 3, &none)?;
    assert_eq!(h, vec![at("B3", 10), at("B4", 10), at("B5", 10)]);
    let v = validate_placement(10, at("B3", 10), Orientation::Vertical, 3, &none)?;
    assert_eq!(v, vec![at("B3", 10), at("C3", 10), at("D3", 10)]);
    assert_eq!(Orientation::of(&v), Orientation::Vertical);
    assert_eq!(Orientation::of(&h), Orientation::Horizontal);
    Ok(())
}

#[test]
fn placement_off_the_board_is_out_of_bounds() {
    let none = HashSet::new();
    let start = at("A4", 5);
    assert_eq!(
        validate_placement(5, start, Orientation::Horizontal, 3, &none),
        Err(PlacementError::OutOfBounds { start, length: 3 })
    );
    let start = at("D1", 5);
    assert!(validate_placement(5, start, Orientation::Vertical, 2, &none).is_ok());
    assert!(validate_placement(5, start, Orientation::Vertical, 3, &none).is_err());
}

#[test]
fn placement_reports_first_collision() {
    let occupied: HashSet<u32> = [at("A3", 10), at("A4", 10)]
        .iter()
        .map(|c| c.key(10))
        .collect();
    assert_eq!(
        validate_placement(10, at("A1", 10), Orientation::Horizontal, 4, &occupied),
        Err(PlacementError::Occupied(at("A3", 10)))
    );
}

#[test]
fn fleet_ship_sinks_when_every_segment_is_hit() -> Result<(), CoordError> {
    let mut fleet = FleetTree::new();
    assert!(!fleet.status().all_sunk, "an empty fleet is never sunk");

    let cells = [Coordinate::new(1, 1, 5)?, Coordinate::new(1, 2, 5)?];
    let ship = fleet.add_ship(ShipType::new("destroyer", "Destroyer", 2), &cells, 5);
    let first = fleet.resolve_shot(cells[0].key(5));
    assert!(first.hit && !first.sunk);
    assert_eq!(first.ship, Some(ship));
    assert!(!fleet.is_sunk(ship));

    let miss = fleet.resolve_shot(Coordinate::new(5, 5, 5)?.key(5));
    assert!(!miss.hit && miss.ship.is_none());

    let second = fleet.resolve_shot(cells[1].key(5));
    assert!(second.hit && second.sunk);
    assert!(fleet.is_sunk(ship));
    assert!(fleet.status().all_sunk);

    let instance = fleet.instance(ship).unwrap();
    assert!(instance.sunk);
    assert_eq!(instance.segments.len(), 2);
    assert!(instance.segments.iter().all(|s| s.hit));
    assert_eq!(instance.segments[0].coordinate, "A1");
    Ok(())
}

#[test]
fn repeated_hit_on_sunk_ship_does_not_report_sinking_again() -> Result<(), CoordError> {
    let mut fleet = FleetTree::new();
    let cells = [Coordinate::new(2, 2, 5)?];
    fleet.add_ship(ShipType::new("dinghy", "Dinghy", 1), &cells, 5);
    assert!(fleet.resolve_shot(cells[0].key(5)).sunk);
    assert!(!fleet.resolve_shot(cells[0].key(5)).sunk);
    Ok(())
}

fn classic() -> Vec<ShipType> {
    salvo::CLASSIC_SHIPS
        .iter()
        .map(|(id, name, len)| ShipType::new(*id, *name, *len))
        .collect()
}

#[test]
fn overfull_fleet_does_not_fit() {
    let mut rng = SmallRng::seed_from_u64(3);
    let ships: Vec<ShipType> = (0..10).map(|i| ShipType::new(format!("s{i}"), "Long", 5)).collect();
    assert!(matches!(
        random_fleet_layout(&mut rng, 5, &ships),
        Err(MatchError::FleetDoesNotFit { attempts: 100, .. })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_layouts_never_overlap(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = random_fleet_layout(&mut rng, 10, &classic()).unwrap();
        let mut seen = HashSet::new();
        for (ship, cells) in &layout {
            prop_assert_eq!(cells.len(), ship.length as usize);
            for c in cells {
                prop_assert!(c.row >= 1 && c.row <= 10 && c.col >= 1 && c.col <= 10);
                prop_assert!(seen.insert(c.key(10)));
            }
        }
        prop_assert_eq!(seen.len(), 17);
    }

    #[test]
    fn sunk_iff_all_segments_hit(seed in any::<u64>(), shots in prop::collection::vec(1u8..=10, 0..120)) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let layout = random_fleet_layout(&mut rng, 10, &classic()).unwrap();
        let mut fleet = FleetTree::new();
        for (ship, cells) in &layout {
            fleet.add_ship(ship.clone(), cells, 10);
        }
        for pair in shots.chunks(2) {
            if let [r, c] = pair {
                fleet.resolve_shot(Coordinate::new(*r, *c, 10).unwrap().key(10));
            }
        }
        for instance in fleet.instances() {
            prop_assert_eq!(instance.sunk, instance.segments.iter().all(|s| s.hit));
        }
    }
}
