//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Mode, Player, Position, Square};

use crate::app::App;
use crate::audio::AudioController;
use crate::screen::{GameScreen, MenuItem, MenuScreen, Screen};
use crate::view::BoardView;

/// Renders whichever screen is active.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Menu(menu) => draw_menu(frame, menu, app.audio()),
        Screen::Game(game) => draw_game(frame, game, app.view(), app.audio(), app.mode()),
    }
}

fn draw_title(frame: &mut Frame, area: Rect, subtitle: &str) {
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tic-Tac-Toe",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle.to_string(), Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, text: String) {
    let footer = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn draw_menu(frame: &mut Frame, menu: &MenuScreen, audio: &AudioController) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Options
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], "Choose a game mode");

    let lines: Vec<Line> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = i == menu.selected_index();
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}{}", marker, item.label()), style))
        })
        .collect();

    let options = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Menu"));
    frame.render_widget(options, center_rect(chunks[1], 30, 5));

    draw_footer(
        frame,
        chunks[2],
        format!(
            "↑↓ select  Enter start  1/2 quick start  m {} {}  q quit",
            audio.toggle_label(),
            audio.icon()
        ),
    );
}

fn draw_game(
    frame: &mut Frame,
    game: &GameScreen,
    view: &BoardView,
    audio: &AudioController,
    mode: Mode,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], mode.label());
    draw_board(frame, chunks[1], view, game.cursor());

    let status = Paragraph::new(view.status().text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    draw_footer(
        frame,
        chunks[3],
        format!(
            "arrows/1-9 move  Enter play  r restart  b menu  m {} {}  q quit",
            audio.toggle_label(),
            audio.icon()
        ),
    );
}

fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], view, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &BoardView, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], view, cursor, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &BoardView, cursor: Position, pos: Position) {
    let key = (pos.to_index() + 1).to_string();
    let (symbol, base_style) = match view.cell(pos) {
        Square::Empty => (key, Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if view.is_highlighted(pos) {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::input::Command;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[tokio::test]
    async fn test_menu_lists_modes() {
        let app = App::new(&AppConfig::default());
        let screen = rendered(&app);
        assert!(screen.contains("Player vs Player"));
        assert!(screen.contains("Player vs Computer"));
    }

    #[tokio::test]
    async fn test_game_shows_status() {
        let mut app = App::new(&AppConfig::default());
        app.handle_command(Command::StartGame(Mode::HumanVsHuman));
        app.handle_command(Command::Play(Position::Center));
        let screen = rendered(&app);
        assert!(screen.contains("Player O's turn"));
        assert!(screen.contains('X'));
    }
}
