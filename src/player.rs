use std::collections::HashSet;

use rand::rngs::SmallRng;

use crate::{
    common::MatchError,
    coord::Coordinate,
    fleet::ShotResolution,
    ship::ShipType,
};

/// Ship types paired with the cells each one occupies.
pub type FleetLayout = Vec<(ShipType, Vec<Coordinate>)>;

/// Interface implemented by computer-controlled sides.
pub trait Opponent {
    /// Lay out every ship of `ships`, in order, on an empty board.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board_size: u8,
        ships: &[ShipType],
    ) -> Result<FleetLayout, MatchError>;

    /// Choose the next cell to fire at, given the keys already shot on the
    /// target board.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        board_size: u8,
        already_shot: &HashSet<u32>,
    ) -> Result<Coordinate, MatchError>;

    /// Inform the opponent of the result of its last shot.
    fn handle_shot_result(&mut self, _coordinate: Coordinate, _resolution: ShotResolution) {}
}
