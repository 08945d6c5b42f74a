//! Per-side board index: every cell of the board keyed by its coordinate key.

use serde::Serialize;

use crate::bst::SearchTree;
use crate::common::BoardError;
use crate::coord::{self, Coordinate};
use crate::fleet::ShipRef;
use crate::sequence::balanced_order;

/// State of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellState {
    /// Ship occupying the cell, if any.
    pub occupied_by: Option<ShipRef>,
    /// Cell has been fired upon.
    pub shot: bool,
    /// Cell was fired upon while occupied.
    pub hit: bool,
}

/// Aggregate counts over a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardStatistics {
    pub total_cells: usize,
    pub shot_cells: usize,
    pub remaining_cells: usize,
}

/// Ordered index over all cells of one side's board.
#[derive(Debug, Clone)]
pub struct BoardIndex {
    board_size: u8,
    cells: SearchTree<CellState>,
}

impl BoardIndex {
    /// Build the index with every legal key of a `board_size` board, inserted
    /// in balanced order so lookups stay logarithmic.
    pub fn new(board_size: u8) -> Self {
        let mut cells = SearchTree::new();
        for key in balanced_order(&coord::all_keys(board_size)) {
            let inserted = cells.insert(key, CellState::default());
            debug_assert!(inserted.is_ok(), "duplicate board key {key}");
        }
        Self { board_size, cells }
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    /// Cell state for `key`. `None` means the key is not on this board.
    pub fn lookup(&self, key: u32) -> Option<&CellState> {
        self.cells.search(key)
    }

    /// Cell state for a coordinate of this board.
    pub fn cell(&self, coordinate: Coordinate) -> Option<&CellState> {
        self.lookup(coordinate.key(self.board_size))
    }

    /// Record a shot at `key`. Not idempotent: callers reject repeats first.
    pub fn mark_shot(&mut self, key: u32) -> Result<CellState, BoardError> {
        let cell = self
            .cells
            .search_mut(key)
            .ok_or(BoardError::UnknownKey(key))?;
        cell.shot = true;
        cell.hit = cell.occupied_by.is_some();
        Ok(*cell)
    }

    /// Record that `ship` occupies `key`.
    pub fn mark_occupied(&mut self, key: u32, ship: ShipRef) -> Result<(), BoardError> {
        let cell = self
            .cells
            .search_mut(key)
            .ok_or(BoardError::UnknownKey(key))?;
        cell.occupied_by = Some(ship);
        Ok(())
    }

    pub fn is_shot(&self, key: u32) -> bool {
        self.lookup(key).is_some_and(|c| c.shot)
    }

    /// All cells in ascending key order.
    pub fn cells(&self) -> Vec<(Coordinate, CellState)> {
        self.cells
            .in_order()
            .into_iter()
            .filter_map(|(key, cell)| {
                Coordinate::from_key(key, self.board_size)
                    .ok()
                    .map(|c| (c, *cell))
            })
            .collect()
    }

    /// Cells not yet fired upon, ascending by key.
    pub fn unshot(&self) -> Vec<Coordinate> {
        self.cells()
            .into_iter()
            .filter(|(_, cell)| !cell.shot)
            .map(|(c, _)| c)
            .collect()
    }

    pub fn statistics(&self) -> BoardStatistics {
        let all = self.cells.in_order();
        let shot_cells = all.iter().filter(|(_, c)| c.shot).count();
        BoardStatistics {
            total_cells: all.len(),
            shot_cells,
            remaining_cells: all.len() - shot_cells,
        }
    }

    /// Height of the underlying tree.
    pub fn depth(&self) -> usize {
        self.cells.height()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
