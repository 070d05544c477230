//! Screens and the transitions between them.

use tictactoe_core::{Mode, Position};

/// Entries on the menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Start a game in this mode.
    Play(Mode),
    /// Exit.
    Quit,
}

impl MenuItem {
    /// All entries in display order.
    pub const ALL: [MenuItem; 3] = [
        MenuItem::Play(Mode::HumanVsHuman),
        MenuItem::Play(Mode::HumanVsComputer),
        MenuItem::Quit,
    ];

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play(mode) => mode.label(),
            MenuItem::Quit => "Quit",
        }
    }
}

/// Mode selection screen.
#[derive(Debug, Clone, Default)]
pub struct MenuScreen {
    selected: usize,
}

impl MenuScreen {
    /// Creates the menu with the first entry highlighted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted entry.
    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    /// Index of the highlighted entry.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Moves the highlight, wrapping around.
    pub fn select(&mut self, delta: isize) {
        let len = MenuItem::ALL.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }
}

/// Board screen.
#[derive(Debug, Clone)]
pub struct GameScreen {
    cursor: Position,
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GameScreen {
    /// Creates the board screen with the cursor on the center square.
    pub fn new() -> Self {
        Self {
            cursor: Position::Center,
        }
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = pos;
    }
}

/// Screen currently shown.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Mode selection.
    Menu(MenuScreen),
    /// The board.
    Game(GameScreen),
}

impl Screen {
    /// True on the board screen.
    pub fn is_game(&self) -> bool {
        matches!(self, Screen::Game(_))
    }
}
