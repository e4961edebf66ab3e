//! Drive a game from a fixed list of column selections, without a terminal.

use std::fmt::Write as _;

use serde::Serialize;

use crate::config::PlayersConfig;
use crate::game::{GameEngine, GameStatus, MoveResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveRecord {
    pub column: usize,
    #[serde(flatten)]
    pub result: MoveResult,
}

/// Outcome of a scripted game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub height: usize,
    pub width: usize,
    pub moves: Vec<MoveRecord>,
    pub status: GameStatus,
}

impl GameSummary {
    pub fn placed_count(&self) -> usize {
        self.moves
            .iter()
            .filter(|record| record.result.placed().is_some())
            .count()
    }
}

/// Feed every column to `engine` in order. Selections the engine ignores
/// are still recorded.
pub fn play(engine: &mut GameEngine, columns: &[usize]) -> GameSummary {
    let moves = columns
        .iter()
        .map(|&column| MoveRecord {
            column,
            result: engine.apply_move(column),
        })
        .collect();

    GameSummary {
        height: engine.height(),
        width: engine.width(),
        moves,
        status: *engine.status(),
    }
}

/// End-of-game announcement for a status, `None` while the game runs.
pub fn outcome_message(status: &GameStatus, players: &PlayersConfig) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won { player, .. } => Some(format!(
            "The {} player won!",
            players.style(*player).name
        )),
        GameStatus::Tied => Some("Tie!".to_string()),
    }
}

/// Human-readable report: the final board followed by the outcome.
pub fn render_report(engine: &GameEngine, summary: &GameSummary, players: &PlayersConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", engine.board());
    let _ = writeln!(
        out,
        "{} of {} moves placed",
        summary.placed_count(),
        summary.moves.len()
    );
    match outcome_message(&summary.status, players) {
        Some(message) => {
            let _ = write!(out, "{message}");
            if let Some(line) = summary.status.winning_line() {
                let cells: Vec<String> = line
                    .cells()
                    .iter()
                    .map(|c| format!("({},{})", c.row, c.col))
                    .collect();
                let _ = write!(out, " {}", cells.join(" "));
            }
        }
        None => {
            let next = players.style(engine.current_player());
            let _ = write!(out, "In progress, {} to move", next.name);
        }
    }
    out
}
