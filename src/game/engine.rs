use serde::Serialize;
use tracing::{debug, info};

use super::board::{Board, Cell, Coord, MoveError};
use super::player::Player;
use super::win::{find_winning_line, WinningLine};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won { player: Player, line: WinningLine },
    Tied,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Observable effect of one column selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MoveResult {
    /// Nothing changed.
    Ignored { reason: MoveError },
    /// A piece landed at `at`; `status` is the state after the move.
    Placed {
        at: Coord,
        player: Player,
        status: GameStatus,
    },
}

impl MoveResult {
    pub fn placed(&self) -> Option<Coord> {
        match self {
            MoveResult::Placed { at, .. } => Some(*at),
            MoveResult::Ignored { .. } => None,
        }
    }
}

/// Grid plus turn state for one game. Player one always moves first.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameEngine {
    /// Start a game on a `height` x `width` board.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        Ok(GameEngine {
            board: Board::new(height, width)?,
            current_player: Player::One,
            status: GameStatus::InProgress,
        })
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell contents, `None` when out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Whether the input layer should keep dispatching column selections.
    pub fn is_accepting_moves(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn moves_played(&self) -> usize {
        self.board.piece_count()
    }

    /// Lowest free row in `column`, `None` if full or out of range.
    pub fn column_height_available(&self, column: usize) -> Option<usize> {
        self.board.column_height_available(column)
    }

    /// Columns that still accept a piece; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if !self.is_accepting_moves() {
            return Vec::new();
        }
        (0..self.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Stale input (game over, unknown column, full column) leaves the
    /// game untouched and is reported as [`MoveResult::Ignored`].
    pub fn apply_move(&mut self, column: usize) -> MoveResult {
        if !self.is_accepting_moves() {
            debug!(column, "move ignored: game is over");
            return MoveResult::Ignored {
                reason: MoveError::GameOver,
            };
        }

        let player = self.current_player;
        let row = match self.board.drop_piece(column, player) {
            Ok(row) => row,
            Err(reason) => {
                debug!(column, ?reason, "move ignored");
                return MoveResult::Ignored { reason };
            }
        };
        debug!(?player, row, column, "piece placed");

        // A win on the filling move beats the tie
        if let Some(line) = find_winning_line(&self.board, player) {
            info!(?player, ?line, "game won");
            self.status = GameStatus::Won { player, line };
        } else if self.board.is_full() {
            info!("game tied");
            self.status = GameStatus::Tied;
        } else {
            self.current_player = player.other();
        }

        MoveResult::Placed {
            at: Coord::new(row, column),
            player,
            status: self.status,
        }
    }

    /// Clear the board and start over with player one.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
        info!(height = self.height(), width = self.width(), "new game");
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine {
            board: Board::default(),
            current_player: Player::One,
            status: GameStatus::InProgress,
        }
    }
}
