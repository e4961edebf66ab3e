use serde::Serialize;

use super::board::{Board, Cell, Coord};
use super::player::Player;

/// Number of aligned pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Step vectors (row, col) tried at every anchor, in priority order:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The cells of a completed line, starting at the anchor found first by
/// the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinningLine([Coord; WIN_LENGTH]);

impl WinningLine {
    pub fn cells(&self) -> &[Coord; WIN_LENGTH] {
        &self.0
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }
}

/// Scan the whole board in row-major order and return the first line of
/// `player`'s pieces, if any.
pub fn find_winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    for row in 0..board.height() {
        for col in 0..board.width() {
            for &(dr, dc) in DIRECTIONS.iter() {
                if let Some(line) = line_from(board, player, row, col, dr, dc) {
                    return Some(line);
                }
            }
        }
    }
    None
}

fn line_from(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
) -> Option<WinningLine> {
    let mut cells = [Coord::new(row, col); WIN_LENGTH];
    for (step, slot) in cells.iter_mut().enumerate() {
        let r = row as isize + dr * step as isize;
        let c = col as isize + dc * step as isize;
        if board.get_signed(r, c) != Some(Cell::Occupied(player)) {
            return None;
        }
        *slot = Coord::new(r as usize, c as usize);
    }
    Some(WinningLine(cells))
}
