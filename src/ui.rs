use std::collections::HashMap;
use std::fmt::Write;

use crate::{
    common::ShotResult,
    coord::{self, row_letters},
    game::{BoardView, ShotRecord},
};

/// Draw a `board_size` grid, asking `cell` for the glyph at each key.
fn render_grid(board_size: u8, cell: impl Fn(u32) -> char) -> String {
    let mut out = String::new();
    let _ = write!(out, "    ");
    for col in 1..=board_size {
        let _ = write!(out, "{col:>3}");
    }
    let _ = writeln!(out);
    for row in 1..=board_size {
        let _ = write!(out, "{:>3} ", row_letters(row));
        for col in 1..=board_size {
            let key = coord::Coordinate { row, col }.key(board_size);
            let _ = write!(out, "{:>3}", cell(key));
        }
        let _ = writeln!(out);
    }
    out
}

fn shots_by_key(shots: &[ShotRecord]) -> HashMap<u32, ShotResult> {
    shots.iter().map(|s| (s.key, s.result)).collect()
}

/// Own board: ships, and the enemy's shots against them.
pub fn render_own_board(view: &BoardView) -> String {
    let received = shots_by_key(&view.shots_received);
    let ship_keys: HashMap<u32, bool> = view
        .fleet
        .iter()
        .flat_map(|ship| ship.segments.iter().map(|s| (s.coordinate_key, s.hit)))
        .collect();
    let mut out = render_grid(view.board_size, |key| match (ship_keys.get(&key), received.get(&key)) {
        (Some(true), _) => 'X',
        (Some(false), _) => 'S',
        (None, Some(_)) => 'o',
        (None, None) => '.',
    });
    out.push_str("    Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    out
}

/// Target board: results of our own shots.
pub fn render_target_board(view: &BoardView) -> String {
    let fired = shots_by_key(&view.shots_fired);
    let mut out = render_grid(view.board_size, |key| match fired.get(&key) {
        Some(ShotResult::Sunk) => '#',
        Some(ShotResult::Hit) => 'X',
        Some(ShotResult::Water) => 'o',
        None => '.',
    });
    out.push_str("    Legend: #=Sunk  X=Hit  o=Miss  .=Unknown\n");
    out
}

/// Both boards, target first.
pub fn render_player_view(view: &BoardView) -> String {
    format!(
        "Opponent board:\n{}\nYour board:\n{}",
        render_target_board(view),
        render_own_board(view)
    )
}
