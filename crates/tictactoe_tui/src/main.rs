//! Tic-tac-toe terminal client.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tictactoe_tui::{App, AppConfig, Cli, Command, init_tracing};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present so RUST_LOG can live there.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)?;
    config.apply_overrides(&cli);

    init_tracing(config.log_file())?;
    info!(config = ?config, "Starting tictactoe");

    let mut app = App::new(&config);
    if let Some(mode) = cli.mode {
        app.handle_command(Command::StartGame(mode.into()));
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal).await;

    // Restore the terminal even if the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Goodbye");
    res
}
