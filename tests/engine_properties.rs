use connect_four::game::{Cell, GameEngine, GameStatus, MoveError, MoveResult, Player, WIN_LENGTH};
use proptest::prelude::*;

fn game_strategy() -> impl Strategy<Value = (usize, usize, Vec<usize>)> {
    (4usize..=7, 4usize..=8).prop_flat_map(|(height, width)| {
        // Columns past the edge exercise the ignored-input path
        let moves = prop::collection::vec(0..width + 2, 0..height * width + 10);
        (Just(height), Just(width), moves)
    })
}

fn assert_gravity(engine: &GameEngine) {
    for col in 0..engine.width() {
        let mut seen_piece = false;
        for row in 0..engine.height() {
            match engine.cell(row, col) {
                Some(Cell::Occupied(_)) => seen_piece = true,
                Some(Cell::Empty) => assert!(
                    !seen_piece,
                    "floating piece above empty cell ({row}, {col})"
                ),
                None => panic!("cell ({row}, {col}) out of bounds"),
            }
        }
    }
}

proptest! {
    #[test]
    fn test_pieces_never_float((height, width, moves) in game_strategy()) {
        let mut engine = GameEngine::new(height, width).unwrap();
        for col in moves {
            engine.apply_move(col);
            assert_gravity(&engine);
        }
    }

    #[test]
    fn test_turns_alternate_until_game_ends((height, width, moves) in game_strategy()) {
        let mut engine = GameEngine::new(height, width).unwrap();
        for col in moves {
            let mover = engine.current_player();
            let before = engine.clone();
            match engine.apply_move(col) {
                MoveResult::Placed { player, status, .. } => {
                    prop_assert_eq!(player, mover);
                    prop_assert_eq!(&status, engine.status());
                    if status.is_terminal() {
                        prop_assert_eq!(engine.current_player(), mover);
                    } else {
                        prop_assert_eq!(engine.current_player(), mover.other());
                    }
                }
                MoveResult::Ignored { .. } => {
                    prop_assert_eq!(&engine, &before);
                }
            }
        }
    }

    #[test]
    fn test_terminal_state_is_frozen((height, width, moves) in game_strategy()) {
        let mut engine = GameEngine::new(height, width).unwrap();
        for col in moves {
            if engine.status().is_terminal() {
                let before = engine.clone();
                prop_assert_eq!(
                    engine.apply_move(col),
                    MoveResult::Ignored { reason: MoveError::GameOver }
                );
                prop_assert_eq!(&engine, &before);
                prop_assert!(!engine.is_accepting_moves());
            } else {
                engine.apply_move(col);
            }
        }
    }

    #[test]
    fn test_reported_line_is_real((height, width, moves) in game_strategy()) {
        let mut engine = GameEngine::new(height, width).unwrap();
        for col in moves {
            engine.apply_move(col);
        }
        if let GameStatus::Won { player, line } = engine.status() {
            let cells = line.cells();
            prop_assert_eq!(cells.len(), WIN_LENGTH);
            for coord in cells {
                prop_assert_eq!(engine.cell(coord.row, coord.col), Some(Cell::Occupied(*player)));
            }
            let dr = cells[1].row as isize - cells[0].row as isize;
            let dc = cells[1].col as isize - cells[0].col as isize;
            for pair in cells.windows(2) {
                prop_assert_eq!(pair[1].row as isize - pair[0].row as isize, dr);
                prop_assert_eq!(pair[1].col as isize - pair[0].col as isize, dc);
            }
        }
        if engine.status() == &GameStatus::Tied {
            prop_assert!(engine.board().is_full());
        }
    }

    #[test]
    fn test_column_height_matches_pieces((height, width, moves) in game_strategy()) {
        let mut engine = GameEngine::new(height, width).unwrap();
        let mut placed = 0;
        for col in moves {
            if engine.apply_move(col).placed().is_some() {
                placed += 1;
            }
        }
        prop_assert_eq!(engine.moves_played(), placed);
        for col in 0..width {
            let stacked = (0..height)
                .filter(|&row| engine.cell(row, col) != Some(Cell::Empty))
                .count();
            let expected = if stacked == height { None } else { Some(height - stacked - 1) };
            prop_assert_eq!(engine.column_height_available(col), expected);
        }
        prop_assert_eq!(engine.column_height_available(width), None);
    }
}

#[test]
fn test_player_one_moves_first() {
    let mut engine = GameEngine::new(4, 4).unwrap();
    assert_eq!(engine.current_player(), Player::One);
    assert_eq!(engine.apply_move(0).placed().map(|c| c.row), Some(3));
}
