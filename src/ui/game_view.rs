use crate::config::PlayersConfig;
use crate::game::{Cell, Coord, GameEngine, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    players: &PlayersConfig,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(board_rows(engine.height())), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, players, chunks[0]);
    render_board(frame, engine, players, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Terminal rows for the board block: cells plus labels, borders and selector.
fn board_rows(height: usize) -> u16 {
    u16::try_from(height).unwrap_or(u16::MAX).saturating_add(4)
}

fn render_header(frame: &mut Frame, engine: &GameEngine, players: &PlayersConfig, area: Rect) {
    let current = players.style(engine.current_player());

    let (status, color) = match engine.status() {
        GameStatus::InProgress => (format!("Current Player: {}", current.name), current.color()),
        GameStatus::Won { player, .. } => {
            let winner = players.style(*player);
            (format!("Game Over  |  {} wins", winner.name), winner.color())
        }
        GameStatus::Tied => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    engine: &GameEngine,
    players: &PlayersConfig,
    selected_column: usize,
    area: Rect,
) {
    let width = engine.width();
    let winning_line = engine.status().winning_line();
    let mut lines = Vec::new();

    // Column numbers with selection indicator; full columns are dimmed
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        let style = if col == selected_column {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if engine.column_height_available(col).is_none() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        col_line.push(Span::styled(label, style));
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..engine.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let span = match engine.cell(row, col).and_then(Cell::player) {
                Some(player) => {
                    let mut style = Style::default().fg(players.style(player).color());
                    if winning_line.is_some_and(|line| line.contains(Coord::new(row, col))) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column && engine.is_accepting_moves() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_DIMENSION;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(engine: &GameEngine, message: Option<&str>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let players = PlayersConfig::default();
        let message = message.map(str::to_string);
        terminal
            .draw(|f| render(f, engine, &players, 3, &message))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_current_player_and_pieces() {
        let mut engine = GameEngine::default();
        engine.apply_move(3);
        let text = draw(&engine, None);

        assert!(text.contains("Current Player: Blue"));
        assert_eq!(text.matches('●').count(), 1);
        assert!(text.contains('▲'));
    }

    #[test]
    fn test_renders_game_over() {
        let mut engine = GameEngine::default();
        for col in [0, 6, 1, 6, 2, 6, 3] {
            engine.apply_move(col);
        }
        let text = draw(&engine, Some("The Red player won!"));

        assert!(text.contains("Red wins"));
        assert!(text.contains("The Red player won!"));
        assert!(!text.contains('▲'));
    }

    #[test]
    fn test_board_rows_saturate() {
        assert_eq!(board_rows(6), 10);
        assert_eq!(board_rows(65_533), u16::MAX);
        assert_eq!(board_rows(usize::MAX), u16::MAX);
    }

    #[test]
    fn test_renders_largest_board() {
        let engine = GameEngine::new(MAX_DIMENSION, 4).unwrap();
        // Board is taller than the terminal; layout clips instead of panicking
        let text = draw(&engine, None);
        assert_eq!(text.chars().count(), 60 * 24);
    }

    #[test]
    fn test_renders_wide_board() {
        let engine = GameEngine::new(5, 12).unwrap();
        let text = draw(&engine, None);
        assert!(text.contains(&"═".repeat(37)));
        assert!(text.contains("12"));
    }
}
