use std::fmt;

use serde::Serialize;

use super::player::Player;
use super::win::WIN_LENGTH;
use crate::error::GameError;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;
/// Largest accepted height or width.
pub const MAX_DIMENSION: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A (row, column) position. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

/// Reasons a column selection can be refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// Row-major grid of `height` x `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Both dimensions must be at least
    /// [`WIN_LENGTH`], otherwise no line could ever be completed, and at
    /// most [`MAX_DIMENSION`].
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        if height < WIN_LENGTH || width < WIN_LENGTH {
            return Err(GameError::BoardTooSmall {
                height,
                width,
                min: WIN_LENGTH,
            });
        }
        let too_large = GameError::BoardTooLarge {
            height,
            width,
            max: MAX_DIMENSION,
        };
        if height > MAX_DIMENSION || width > MAX_DIMENSION {
            return Err(too_large);
        }
        let len = height.checked_mul(width).ok_or(too_large)?;
        Ok(Board {
            height,
            width,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position, `None` when out of bounds.
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Cell lookup with signed coordinates, for walking lines that may
    /// leave the board.
    pub(crate) fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Lowest empty row in a column, `None` if the column is full or
    /// does not exist.
    pub fn column_height_available(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col] == Cell::Empty)
    }

    /// Check if a column is full (out-of-range columns count as full)
    pub fn is_column_full(&self, col: usize) -> bool {
        self.column_height_available(col).is_none()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn);
        }
        let row = self
            .column_height_available(col)
            .ok_or(MoveError::ColumnFull)?;
        self.cells[row * self.width + col] = player.to_cell();
        Ok(row)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            cells: vec![Cell::Empty; DEFAULT_HEIGHT * DEFAULT_WIDTH],
        }
    }
}

/// Plain-text board: `.` empty, `X` player one, `O` player two, with
/// column indices underneath.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let line: Vec<&str> = self.cells[row * self.width..(row + 1) * self.width]
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::Occupied(Player::One) => "X",
                    Cell::Occupied(Player::Two) => "O",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..self.width).map(|col| (col % 10).to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}
