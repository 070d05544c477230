//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_core::{Mode, Position};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Nothing.
    None,
    /// Start a game in the given mode.
    StartGame(Mode),
    /// Move the board cursor.
    MoveCursor(Position),
    /// Move the menu selection up or down.
    Select(isize),
    /// Activate the highlighted menu entry.
    Confirm,
    /// Play the given square.
    Play(Position),
    /// Clear the board and start over in the same mode.
    Restart,
    /// Leave the game for the menu.
    BackToMenu,
    /// Mute or unmute the music.
    ToggleMute,
    /// Exit the application.
    Quit,
}

/// Moves cursor based on arrow keys; stays put at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps a digit key '1'-'9' to its square.
pub fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Key handling on the menu screen.
pub fn menu_command(key: KeyEvent) -> Command {
    if is_ctrl_c(&key) {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Command::Select(-1),
        KeyCode::Down | KeyCode::Char('j') => Command::Select(1),
        KeyCode::Enter | KeyCode::Char(' ') => Command::Confirm,
        KeyCode::Char('1') => Command::StartGame(Mode::HumanVsHuman),
        KeyCode::Char('2') => Command::StartGame(Mode::HumanVsComputer),
        KeyCode::Char('m') => Command::ToggleMute,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => Command::None,
    }
}

/// Key handling on the game screen.
pub fn game_command(key: KeyEvent, cursor: Position) -> Command {
    if is_ctrl_c(&key) {
        return Command::Quit;
    }
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Command::MoveCursor(move_cursor(cursor, key.code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Command::Play(cursor),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            digit_position(c).map_or(Command::None, Command::Play)
        }
        KeyCode::Char('r') => Command::Restart,
        KeyCode::Char('m') => Command::ToggleMute,
        KeyCode::Char('b') | KeyCode::Esc => Command::BackToMenu,
        KeyCode::Char('q') => Command::Quit,
        _ => Command::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(digit_position('1'), Some(Position::TopLeft));
        assert_eq!(digit_position('9'), Some(Position::BottomRight));
        assert_eq!(digit_position('0'), None);
    }

    #[test]
    fn test_game_keys() {
        assert_eq!(game_command(key(KeyCode::Char('5')), Position::TopLeft), Command::Play(Position::Center));
        assert_eq!(game_command(key(KeyCode::Enter), Position::BottomLeft), Command::Play(Position::BottomLeft));
        assert_eq!(game_command(key(KeyCode::Char('0')), Position::TopLeft), Command::None);
        assert_eq!(game_command(key(KeyCode::Esc), Position::TopLeft), Command::BackToMenu);
        assert_eq!(
            game_command(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Position::TopLeft),
            Command::Quit
        );
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(menu_command(key(KeyCode::Char('2'))), Command::StartGame(Mode::HumanVsComputer));
        assert_eq!(menu_command(key(KeyCode::Down)), Command::Select(1));
        assert_eq!(menu_command(key(KeyCode::Char('q'))), Command::Quit);
    }
}
