//! Terminal front end for tic-tac-toe.
//!
//! A menu to pick player-vs-player or player-vs-computer, a 3x3 board
//! driven by the keyboard, and a computer opponent whose replies arrive
//! after a short thinking delay.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod audio;
mod cli;
mod config;
mod input;
mod logging;
mod scheduler;
mod screen;
mod ui;
mod view;

pub use app::App;
pub use audio::{AudioController, MusicState, SoundCue};
pub use cli::{Cli, ModeArg};
pub use config::{AppConfig, ConfigError};
pub use input::{Command, digit_position, game_command, menu_command, move_cursor};
pub use logging::init_tracing;
pub use scheduler::ComputerMoveScheduler;
pub use screen::{GameScreen, MenuItem, MenuScreen, Screen};
pub use ui::draw;
pub use view::{BoardView, StatusLine};
