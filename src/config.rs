use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::common::MatchError;

/// Attempts per ship before scripted placement gives up.
pub const PLACEMENT_RETRY_BUDGET: u32 = 100;
/// Chance that a medium scripted opponent follows up on a pending hit.
pub const MEDIUM_HUNT_PROBABILITY: f64 = 0.7;

pub const MIN_BOARD_SIZE: u8 = 5;
pub const MAX_BOARD_SIZE: u8 = 20;
pub const MIN_SHIP_LENGTH: u8 = 1;
pub const MAX_SHIP_LENGTH: u8 = 10;

/// Share of the board a fleet may cover when the cell budget is enforced.
pub const FLEET_CELL_BUDGET_RATIO: f64 = 0.20;

pub const CLASSIC_TEMPLATE_ID: &str = "classic";
pub const CLASSIC_BOARD_SIZE: u8 = 10;
/// Classic fleet as (id, name, length).
pub const CLASSIC_SHIPS: [(&str, &str, u8); 5] = [
    ("carrier", "Carrier", 5),
    ("battleship", "Battleship", 4),
    ("cruiser", "Cruiser", 3),
    ("submarine", "Submarine", 3),
    ("destroyer", "Destroyer", 2),
];

/// Strength of the scripted opponent's targeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Probability of trying hunt mode while an unresolved hit exists.
    pub fn hunt_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.0,
            Difficulty::Medium => MEDIUM_HUNT_PROBABILITY,
            Difficulty::Hard => 1.0,
        }
    }

    /// Whether searching restricts itself to checkerboard cells.
    pub fn parity_scan(self) -> bool {
        matches!(self, Difficulty::Hard)
    }
}

impl FromStr for Difficulty {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(MatchError::InvalidDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

/// Per-session tunables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchConfig {
    pub difficulty: Difficulty,
    /// Fixed RNG seed for reproducible scripted behaviour.
    pub seed: Option<u64>,
    /// Overrides [`Difficulty::hunt_probability`], clamped to `[0, 1]`.
    pub hunt_probability: Option<f64>,
    /// Reject fleets covering more than [`FLEET_CELL_BUDGET_RATIO`] of the board.
    pub enforce_cell_budget: bool,
}

impl MatchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn hunt_probability(&self) -> f64 {
        self.hunt_probability
            .unwrap_or_else(|| self.difficulty.hunt_probability())
            .clamp(0.0, 1.0)
    }
}

/// Maximum number of ship cells allowed on a board under the cell budget.
pub fn cell_budget(board_size: u8) -> usize {
    let total = board_size as usize * board_size as usize;
    (total as f64 * FLEET_CELL_BUDGET_RATIO) as usize
}

/// Check a fleet's total length against [`cell_budget`].
pub fn fits_cell_budget(board_size: u8, lengths: &[u8]) -> Result<(), MatchError> {
    let cells: usize = lengths.iter().map(|&l| l as usize).sum();
    let budget = cell_budget(board_size);
    if cells > budget {
        return Err(MatchError::FleetExceedsCellBudget { cells, budget });
    }
    Ok(())
}
