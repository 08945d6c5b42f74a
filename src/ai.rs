// Scripted opponent: random fleet placement and hunt/parity/random targeting.

use std::collections::HashSet;

use log::warn;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng};

use crate::{
    common::MatchError,
    config::{Difficulty, MatchConfig, PLACEMENT_RETRY_BUDGET},
    coord::{self, Coordinate},
    fleet::{ShipRef, ShotResolution},
    player::{FleetLayout, Opponent},
    ship::{validate_placement, Orientation, ShipType},
};

/// Try up to [`PLACEMENT_RETRY_BUDGET`] random starts for a ship of `length`
/// and return the first footprint that stays clear of `occupied`.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    board_size: u8,
    length: u8,
    occupied: &HashSet<u32>,
) -> Option<Vec<Coordinate>> {
    if length == 0 || length > board_size {
        return None;
    }
    let span = board_size - length + 1;
    for _ in 0..PLACEMENT_RETRY_BUDGET {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_row, max_col) = match orientation {
            Orientation::Horizontal => (board_size, span),
            Orientation::Vertical => (span, board_size),
        };
        let start = Coordinate {
            row: rng.random_range(1..=max_row),
            col: rng.random_range(1..=max_col),
        };
        if let Ok(cells) = validate_placement(board_size, start, orientation, length, occupied) {
            return Some(cells);
        }
    }
    None
}

/// Place a whole fleet at random, in template order.
///
/// Fails with [`MatchError::FleetDoesNotFit`] naming the first ship that
/// could not be placed within the retry budget.
pub fn random_fleet_layout<R: Rng + ?Sized>(
    rng: &mut R,
    board_size: u8,
    ships: &[ShipType],
) -> Result<FleetLayout, MatchError> {
    let mut occupied = HashSet::new();
    let mut layout = Vec::with_capacity(ships.len());
    for ship in ships {
        let Some(cells) = random_placement(rng, board_size, ship.length, &occupied) else {
            warn!(
                "could not place {} (length {}) on a {}x{} board after {} attempts",
                ship.name, ship.length, board_size, board_size, PLACEMENT_RETRY_BUDGET
            );
            return Err(MatchError::FleetDoesNotFit {
                ship: ship.name.clone(),
                attempts: PLACEMENT_RETRY_BUDGET,
            });
        };
        occupied.extend(cells.iter().map(|c| c.key(board_size)));
        layout.push((ship.clone(), cells));
    }
    Ok(layout)
}

/// Computer-controlled side.
#[derive(Debug, Clone)]
pub struct ScriptedOpponent {
    hunt_probability: f64,
    parity_scan: bool,
    /// Hits on ships not yet sunk, oldest first.
    pending_hits: Vec<(Coordinate, ShipRef)>,
}

impl ScriptedOpponent {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            hunt_probability: difficulty.hunt_probability(),
            parity_scan: difficulty.parity_scan(),
            pending_hits: Vec::new(),
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self {
            hunt_probability: config.hunt_probability(),
            parity_scan: config.difficulty.parity_scan(),
            pending_hits: Vec::new(),
        }
    }

    /// Number of hits still waiting for their ship to sink.
    pub fn pending_hits(&self) -> usize {
        self.pending_hits.len()
    }

    /// Unshot orthogonal neighbour of the most recent pending hit.
    fn hunt_target(
        &self,
        rng: &mut SmallRng,
        board_size: u8,
        already_shot: &HashSet<u32>,
    ) -> Option<Coordinate> {
        let (last, _) = self.pending_hits.last()?;
        let mut directions: [(i16, i16); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
        directions.shuffle(rng);
        directions
            .iter()
            .filter_map(|&(dr, dc)| last.offset(dr, dc, board_size))
            .find(|c| !already_shot.contains(&c.key(board_size)))
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, candidates: &[Coordinate]) -> Option<Coordinate> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.random_range(0..candidates.len())])
}

impl Opponent for ScriptedOpponent {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board_size: u8,
        ships: &[ShipType],
    ) -> Result<FleetLayout, MatchError> {
        random_fleet_layout(rng, board_size, ships)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        board_size: u8,
        already_shot: &HashSet<u32>,
    ) -> Result<Coordinate, MatchError> {
        if !self.pending_hits.is_empty() && rng.random::<f64>() < self.hunt_probability {
            if let Some(target) = self.hunt_target(rng, board_size, already_shot) {
                return Ok(target);
            }
        }

        let unshot: Vec<Coordinate> = coord::all_coordinates(board_size)
            .into_iter()
            .filter(|c| !already_shot.contains(&c.key(board_size)))
            .collect();

        if self.parity_scan {
            let even: Vec<Coordinate> = unshot
                .iter()
                .copied()
                .filter(|c| (c.row + c.col) % 2 == 0)
                .collect();
            if let Some(target) = pick(rng, &even) {
                return Ok(target);
            }
        }

        pick(rng, &unshot).ok_or(MatchError::NoTargetsRemaining)
    }

    fn handle_shot_result(&mut self, coordinate: Coordinate, resolution: ShotResolution) {
        let Some(ship) = resolution.ship else {
            return;
        };
        if resolution.sunk {
            self.pending_hits.retain(|(_, s)| *s != ship);
        } else if resolution.hit {
            self.pending_hits.push((coordinate, ship));
        }
    }
}
