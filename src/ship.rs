//! Ship definitions and the placement validator.

use core::fmt;
use core::str::FromStr;
use std::collections::HashSet;

use serde::Serialize;

use crate::common::{MatchError, PlacementError};
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Extends to the right: the column grows.
    Horizontal,
    /// Extends downwards: the row grows.
    Vertical,
}

impl Orientation {
    /// Orientation of an ordered footprint. Single cells count as horizontal.
    pub fn of(cells: &[Coordinate]) -> Self {
        match cells {
            [a, b, ..] if a.col == b.col => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }
}

impl FromStr for Orientation {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Ok(Orientation::Horizontal),
            "vertical" | "v" => Ok(Orientation::Vertical),
            _ => Err(MatchError::InvalidOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

/// Identifier of a ship type in the external catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShipTypeId(pub String);

impl From<&str> for ShipTypeId {
    fn from(s: &str) -> Self {
        ShipTypeId(s.to_string())
    }
}

impl fmt::Display for ShipTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type of ship: catalog id, display name and length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipType {
    pub id: ShipTypeId,
    pub name: String,
    pub length: u8,
}

impl ShipType {
    pub fn new(id: impl Into<String>, name: impl Into<String>, length: u8) -> Self {
        Self {
            id: ShipTypeId(id.into()),
            name: name.into(),
            length,
        }
    }
}

/// Cells covered by a ship of `length` starting at `start`, or `None` if any
/// cell would leave the board.
pub fn footprint(
    board_size: u8,
    start: Coordinate,
    orientation: Orientation,
    length: u8,
) -> Option<Vec<Coordinate>> {
    (0..length)
        .map(|i| match orientation {
            Orientation::Horizontal => start.offset(0, i as i16, board_size),
            Orientation::Vertical => start.offset(i as i16, 0, board_size),
        })
        .collect()
}

/// Compute the footprint and check it against `occupied` keys.
///
/// Returns the ordered cells, start first. Fails with `OutOfBounds` if the
/// ship leaves the board, or `Occupied` at the first colliding cell.
pub fn validate_placement(
    board_size: u8,
    start: Coordinate,
    orientation: Orientation,
    length: u8,
    occupied: &HashSet<u32>,
) -> Result<Vec<Coordinate>, PlacementError> {
    let cells = footprint(board_size, start, orientation, length)
        .filter(|cells| !cells.is_empty())
        .ok_or(PlacementError::OutOfBounds { start, length })?;
    if let Some(hit) = cells.iter().find(|c| occupied.contains(&c.key(board_size))) {
        return Err(PlacementError::Occupied(*hit));
    }
    Ok(cells)
}
