//! Core Connect Four game logic: board representation, player types, win
//! detection and the turn/termination state machine.

mod board;
mod engine;
mod player;
mod win;

pub use board::{Board, Cell, Coord, MoveError, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};
pub use engine::{GameEngine, GameStatus, MoveResult};
pub use player::Player;
pub use win::{find_winning_line, WinningLine, DIRECTIONS, WIN_LENGTH};
