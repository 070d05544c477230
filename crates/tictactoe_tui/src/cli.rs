//! Command-line interface.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::Mode;

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Skip the menu and start straight in this mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Seed for the computer's random tie-breaks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computer thinking delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Start with music muted
    #[arg(long)]
    pub muted: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Game mode as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Player vs player
    Pvp,
    /// Player vs computer
    Pvc,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::HumanVsHuman,
            ModeArg::Pvc => Mode::HumanVsComputer,
        }
    }
}
