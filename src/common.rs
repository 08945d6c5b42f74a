//! Common types for salvo: error enums and shot results.

use serde::Serialize;
use thiserror::Error;

use crate::coord::Coordinate;
use crate::game::Phase;

/// Outcome of a shot as recorded in a shot log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotResult {
    /// Shot missed all ships.
    Water,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot hit the last intact segment of a ship.
    Sunk,
}

impl ShotResult {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotResult::Water)
    }
}

/// Errors produced while parsing or decoding coordinates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Label does not match `[A-Z]+[0-9]+`.
    #[error("invalid coordinate format: {0:?}")]
    InvalidFormat(String),
    /// Row or column outside `[1, board_size]`.
    #[error("coordinate row={row}, col={col} is outside a {board_size}x{board_size} board")]
    OutOfRange { row: u32, col: u32, board_size: u8 },
    /// Row letters or column digits too long to represent.
    #[error("coordinate {0:?} is beyond any supported board")]
    Overflow(String),
}

/// Errors returned by the placement validator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Some cell of the footprint falls off the board.
    #[error("ship of length {length} does not fit from {start}")]
    OutOfBounds { start: Coordinate, length: u8 },
    /// The footprint collides with an already placed ship.
    #[error("coordinate {0} is already occupied")]
    Occupied(Coordinate),
}

/// Errors returned by board index operations. These indicate a programming
/// error, since every legal key is present from construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("key {0} is not part of this board")]
    UnknownKey(u32),
    #[error("key {0} is already present in the tree")]
    DuplicateKey(u32),
}

/// Errors surfaced by match and session operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("session not found")]
    SessionNotFound,
    #[error("fleet template {0:?} not found")]
    TemplateNotFound(String),
    #[error("invalid fleet template: {0}")]
    InvalidTemplate(String),
    #[error("session is not a two-player session")]
    NotMultiplayer,
    #[error("session is not waiting for a second participant")]
    NotWaiting,
    #[error("cannot join your own session")]
    SelfJoin,
    #[error("operation not allowed in phase {0:?}")]
    WrongPhase(Phase),
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordError),
    #[error("invalid orientation {0:?}, expected horizontal or vertical")]
    InvalidOrientation(String),
    #[error("unknown difficulty {0:?}, expected easy, medium or hard")]
    InvalidDifficulty(String),
    #[error("unknown ship type {0:?}")]
    UnknownShipType(String),
    #[error("every ship of type {0:?} has already been placed")]
    ShipTypeExhausted(String),
    #[error("coordinate {0} is already occupied")]
    Occupied(Coordinate),
    #[error("ship of length {length} does not fit from {start}")]
    OutOfBounds { start: Coordinate, length: u8 },
    #[error("all required ships are already placed")]
    AlreadyComplete,
    #[error("it is not your turn")]
    NotYourTurn,
    #[error("coordinate {0} was already shot")]
    AlreadyShot(Coordinate),
    #[error("participant is not part of this session")]
    NotAParticipant,
    #[error("fleet cannot fit the board: ship {ship:?} not placed after {attempts} attempts")]
    FleetDoesNotFit { ship: String, attempts: u32 },
    #[error("fleet uses {cells} cells, more than the {budget} allowed")]
    FleetExceedsCellBudget { cells: usize, budget: usize },
    #[error("no unshot cells remain on the target board")]
    NoTargetsRemaining,
    #[error("board index error: {0}")]
    Board(#[from] BoardError),
}

impl From<PlacementError> for MatchError {
    fn from(err: PlacementError) -> Self {
        match err {
            PlacementError::OutOfBounds { start, length } => {
                MatchError::OutOfBounds { start, length }
            }
            PlacementError::Occupied(c) => MatchError::Occupied(c),
        }
    }
}
