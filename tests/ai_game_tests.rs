use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use salvo::{
    coord::all_keys, random_fleet_layout, Coordinate, Difficulty, FleetTree, MatchConfig,
    MatchError, Opponent, ScriptedOpponent, ShipRef, ShipType, ShotResolution, CLASSIC_SHIPS,
};

fn classic() -> Vec<ShipType> {
    CLASSIC_SHIPS
        .iter()
        .map(|(id, name, len)| ShipType::new(*id, *name, *len))
        .collect()
}

fn hit(ship: usize) -> ShotResolution {
    ShotResolution {
        hit: true,
        ship: Some(ShipRef(ship)),
        sunk: false,
    }
}

#[test]
fn hard_opponent_hunts_around_last_hit() -> Result<(), MatchError> {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut ai = ScriptedOpponent::new(Difficulty::Hard);
    let center = Coordinate { row: 5, col: 5 };
    let mut shot = HashSet::from([center.key(10)]);
    ai.handle_shot_result(center, hit(0));
    assert_eq!(ai.pending_hits(), 1);

    let neighbours: HashSet<u32> = [(4, 5), (6, 5), (5, 4), (5, 6)]
        .iter()
        .map(|&(row, col)| Coordinate { row, col }.key(10))
        .collect();
    for _ in 0..4 {
        let target = ai.select_target(&mut rng, 10, &shot)?;
        assert!(neighbours.contains(&target.key(10)), "{target} is not adjacent");
        assert!(shot.insert(target.key(10)));
    }
    Ok(())
}

#[test]
fn hunting_skips_off_board_neighbours() -> Result<(), MatchError> {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut ai = ScriptedOpponent::new(Difficulty::Hard);
    let corner = Coordinate { row: 1, col: 1 };
    let shot = HashSet::from([corner.key(5)]);
    ai.handle_shot_result(corner, hit(0));
    let target = ai.select_target(&mut rng, 5, &shot)?;
    assert!(target == Coordinate { row: 1, col: 2 } || target == Coordinate { row: 2, col: 1 });
    Ok(())
}

#[test]
fn sinking_clears_pending_hits_for_that_ship() {
    let mut ai = ScriptedOpponent::new(Difficulty::Medium);
    ai.handle_shot_result(Coordinate { row: 1, col: 1 }, hit(0));
    ai.handle_shot_result(Coordinate { row: 3, col: 3 }, hit(1));
    ai.handle_shot_result(Coordinate { row: 1, col: 2 }, ShotResolution {
        hit: true,
        ship: Some(ShipRef(0)),
        sunk: true,
    });
    assert_eq!(ai.pending_hits(), 1);
    ai.handle_shot_result(Coordinate { row: 4, col: 4 }, ShotResolution {
        hit: false,
        ship: None,
        sunk: false,
    });
    assert_eq!(ai.pending_hits(), 1);
}

#[test]
fn hard_searches_on_parity_cells() -> Result<(), MatchError> {
    let mut rng = SmallRng::seed_from_u64(2);
    let mut ai = ScriptedOpponent::new(Difficulty::Hard);
    let mut shot = HashSet::new();
    for _ in 0..50 {
        let target = ai.select_target(&mut rng, 10, &shot)?;
        assert_eq!((target.row + target.col) % 2, 0);
        assert!(shot.insert(target.key(10)));
    }
    // parity cells exhausted, falls back to the rest
    let target = ai.select_target(&mut rng, 10, &shot)?;
    assert_eq!((target.row + target.col) % 2, 1);
    Ok(())
}

#[test]
fn zero_hunt_probability_ignores_pending_hits() -> Result<(), MatchError> {
    let config = MatchConfig {
        hunt_probability: Some(0.0),
        ..MatchConfig::default().with_difficulty(Difficulty::Hard)
    };
    let mut rng = SmallRng::seed_from_u64(9);
    let mut ai = ScriptedOpponent::from_config(&config);
    // odd cell, so every neighbour is off parity
    let hit_at = Coordinate { row: 5, col: 6 };
    ai.handle_shot_result(hit_at, hit(0));
    let shot = HashSet::from([hit_at.key(10)]);
    for _ in 0..20 {
        let target = ai.select_target(&mut rng, 10, &shot)?;
        assert_eq!((target.row + target.col) % 2, 0);
    }
    Ok(())
}

#[test]
fn full_board_has_no_targets() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut ai = ScriptedOpponent::new(Difficulty::Easy);
    let shot: HashSet<u32> = all_keys(5).into_iter().collect();
    assert_eq!(
        ai.select_target(&mut rng, 5, &shot),
        Err(MatchError::NoTargetsRemaining)
    );
}

#[test]
fn same_seed_same_targets() -> Result<(), MatchError> {
    let mut a = (SmallRng::seed_from_u64(77), ScriptedOpponent::new(Difficulty::Medium));
    let mut b = (SmallRng::seed_from_u64(77), ScriptedOpponent::new(Difficulty::Medium));
    let mut shot = HashSet::new();
    for _ in 0..30 {
        let ta = a.1.select_target(&mut a.0, 10, &shot)?;
        let tb = b.1.select_target(&mut b.0, 10, &shot)?;
        assert_eq!(ta, tb);
        shot.insert(ta.key(10));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn scripted_opponent_sinks_fleet_without_repeating(seed in any::<u64>(), difficulty in 0usize..3) {
        let difficulty = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard][difficulty];
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut fleet = FleetTree::new();
        for (ship, cells) in random_fleet_layout(&mut rng, 10, &classic()).unwrap() {
            fleet.add_ship(ship, &cells, 10);
        }
        let mut ai = ScriptedOpponent::new(difficulty);
        let mut shot = HashSet::new();
        while !fleet.status().all_sunk {
            let target = ai.select_target(&mut rng, 10, &shot).unwrap();
            prop_assert!(shot.insert(target.key(10)), "repeated {}", target);
            let resolution = fleet.resolve_shot(target.key(10));
            ai.handle_shot_result(target, resolution);
        }
        prop_assert!(shot.len() <= 100);
    }
}
