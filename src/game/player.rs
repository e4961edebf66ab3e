use serde::Serialize;

use super::board::Cell;

/// One of the two sides of a game. Display attributes (name, colour) are
/// owned by the front-end, see [`crate::config::PlayersConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Marker this player leaves in a cell
    pub fn to_cell(self) -> Cell {
        Cell::Occupied(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::Two.to_cell(), Cell::Occupied(Player::Two));
    }
}
