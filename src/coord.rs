//! Conversion between human-readable cell labels ("A1", "J10") and the dense
//! integer keys used by the board index.
//!
//! Rows are letters (`A` = 1, `Z` = 26, `AA` = 27, ...) and columns are
//! 1-based numbers. The key of a cell is `row * M + column`, where the
//! multiplier `M` is 100 for boards of size 10 or more and 10 otherwise, so
//! column 10 never collides with column 0 of the next row.

use core::fmt;

use serde::Serialize;

use crate::common::CoordError;

/// Multiplier used to pack a (row, column) pair into a key.
pub fn multiplier(board_size: u8) -> u32 {
    if board_size >= 10 {
        100
    } else {
        10
    }
}

/// A validated cell position, 1-indexed on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl Coordinate {
    /// Build a coordinate, checking it lies within `[1, board_size]²`.
    pub fn new(row: u8, col: u8, board_size: u8) -> Result<Self, CoordError> {
        if row == 0 || col == 0 || row > board_size || col > board_size {
            return Err(CoordError::OutOfRange {
                row: row as u32,
                col: col as u32,
                board_size,
            });
        }
        Ok(Self { row, col })
    }

    /// Parse a label such as `"b7"` or `" J10 "` for the given board size.
    pub fn parse(label: &str, board_size: u8) -> Result<Self, CoordError> {
        let label = label.trim();
        let letters = label.bytes().take_while(u8::is_ascii_alphabetic).count();
        let (row_part, col_part) = label.split_at(letters);
        if row_part.is_empty()
            || col_part.is_empty()
            || !col_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(CoordError::InvalidFormat(label.to_string()));
        }

        // Bijective base-26: A..Z, AA..AZ, ...
        let overflow = || CoordError::Overflow(label.to_string());
        let mut row: u32 = 0;
        for b in row_part.bytes() {
            let digit = (b.to_ascii_uppercase() - b'A') as u32 + 1;
            row = row
                .checked_mul(26)
                .and_then(|r| r.checked_add(digit))
                .ok_or_else(overflow)?;
        }
        let col: u32 = col_part.parse().map_err(|_| overflow())?;

        let size = board_size as u32;
        if row == 0 || col == 0 || row > size || col > size {
            return Err(CoordError::OutOfRange {
                row,
                col,
                board_size,
            });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Inverse of [`Coordinate::key`] for the same board size.
    pub fn from_key(key: u32, board_size: u8) -> Result<Self, CoordError> {
        let m = multiplier(board_size);
        let row = key / m;
        let col = key % m;
        if row == 0 || col == 0 || row > board_size as u32 || col > board_size as u32 {
            return Err(CoordError::OutOfRange {
                row,
                col,
                board_size,
            });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Canonical integer key of this cell on a board of `board_size`.
    pub fn key(&self, board_size: u8) -> u32 {
        self.row as u32 * multiplier(board_size) + self.col as u32
    }

    /// Human-readable label, e.g. `"C4"`.
    pub fn label(&self) -> String {
        format!("{}{}", row_letters(self.row), self.col)
    }

    /// Orthogonal neighbour shifted by `(dr, dc)`, if it stays on the board.
    pub fn offset(&self, dr: i16, dc: i16, board_size: u8) -> Option<Self> {
        let row = self.row as i16 + dr;
        let col = self.col as i16 + dc;
        let size = board_size as i16;
        if (1..=size).contains(&row) && (1..=size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", row_letters(self.row), self.col)
    }
}

/// Letters for a 1-based row number.
pub fn row_letters(row: u8) -> String {
    let mut n = row as u32;
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Encode a label into its key for `board_size`.
pub fn encode(label: &str, board_size: u8) -> Result<u32, CoordError> {
    Coordinate::parse(label, board_size).map(|c| c.key(board_size))
}

/// Decode a key produced by [`encode`] with the same board size.
pub fn decode(key: u32, board_size: u8) -> Result<String, CoordError> {
    Coordinate::from_key(key, board_size).map(|c| c.label())
}

/// Every cell of the board in row-major order.
pub fn all_coordinates(board_size: u8) -> Vec<Coordinate> {
    (1..=board_size)
        .flat_map(|row| (1..=board_size).map(move |col| Coordinate { row, col }))
        .collect()
}

/// Every key of the board, ascending.
pub fn all_keys(board_size: u8) -> Vec<u32> {
    // Row-major order is already ascending because column < multiplier.
    all_coordinates(board_size)
        .iter()
        .map(|c| c.key(board_size))
        .collect()
}
