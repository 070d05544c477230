//! Application state and the event loop.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use derive_getters::Getters;
use ratatui::{Terminal, backend::Backend};
use std::io::Write;
use tictactoe_core::{GameEngine, GameEvent, Mode, MoveTicket, Position};
use tokio::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::audio::{AudioController, SoundCue};
use crate::config::AppConfig;
use crate::input::{Command, game_command, menu_command};
use crate::scheduler::ComputerMoveScheduler;
use crate::screen::{GameScreen, MenuItem, MenuScreen, Screen};
use crate::ui;
use crate::view::BoardView;

/// Everything the front end owns.
///
/// The engine is the source of truth; [`BoardView`] and [`AudioController`]
/// only ever learn about it through the events it emits.
#[derive(Debug, Getters)]
pub struct App {
    engine: GameEngine,
    view: BoardView,
    audio: AudioController,
    screen: Screen,
    #[getter(skip)]
    scheduler: ComputerMoveScheduler,
    #[getter(skip)]
    should_quit: bool,
}

impl App {
    /// Builds the app on the menu screen.
    #[instrument(skip_all)]
    pub fn new(config: &AppConfig) -> Self {
        let engine = match config.seed() {
            Some(seed) => GameEngine::seeded(*seed),
            None => GameEngine::new(),
        };
        info!(seed = ?config.seed(), delay_ms = config.computer_delay_ms(), "Creating App");
        Self {
            engine,
            view: BoardView::new(),
            audio: AudioController::new(*config.music_volume(), *config.start_muted()),
            screen: Screen::Menu(MenuScreen::new()),
            scheduler: ComputerMoveScheduler::new(config.computer_delay()),
            should_quit: false,
        }
    }

    /// Mode of the current or last game.
    pub fn mode(&self) -> Mode {
        self.engine.mode()
    }

    /// True once the user asked to exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Translates a key press for the active screen and runs it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let command = match &self.screen {
            Screen::Menu(_) => menu_command(key),
            Screen::Game(game) => game_command(key, game.cursor()),
        };
        self.handle_command(command);
    }

    /// Runs one command.
    #[instrument(skip(self))]
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::StartGame(mode) => self.start_game(mode),
            Command::Select(delta) => {
                if let Screen::Menu(menu) = &mut self.screen {
                    menu.select(delta);
                }
            }
            Command::Confirm => {
                if let Screen::Menu(menu) = &self.screen {
                    match menu.selected() {
                        MenuItem::Play(mode) => self.start_game(mode),
                        MenuItem::Quit => self.should_quit = true,
                    }
                }
            }
            Command::MoveCursor(pos) => self.set_cursor(pos),
            Command::Play(pos) => self.play(pos),
            Command::Restart => {
                if self.screen.is_game() {
                    self.engine.reset();
                    self.set_cursor(Position::Center);
                }
            }
            Command::BackToMenu => self.back_to_menu(),
            Command::ToggleMute => {
                let in_game = self.screen.is_game();
                self.audio.toggle_mute(in_game);
            }
            Command::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
        self.dispatch_events();
    }

    fn start_game(&mut self, mode: Mode) {
        self.engine.start_game(mode);
        self.audio.start_music();
        self.screen = Screen::Game(GameScreen::new());
    }

    fn back_to_menu(&mut self) {
        // Resetting invalidates any computer move still in flight.
        self.engine.reset();
        self.engine.drain_events();
        self.audio.stop_music();
        self.view.clear();
        self.screen = Screen::Menu(MenuScreen::new());
    }

    fn set_cursor(&mut self, pos: Position) {
        if let Screen::Game(game) = &mut self.screen {
            game.set_cursor(pos);
        }
    }

    fn play(&mut self, pos: Position) {
        if !self.screen.is_game() {
            return;
        }
        self.set_cursor(pos);
        match self.engine.apply_move(pos.to_index()) {
            Ok(outcome) => debug!(%pos, ?outcome, "Human move accepted"),
            Err(e) if e.is_invalid_move() => debug!(%pos, error = %e, "Ignoring move"),
            Err(e) => warn!(%pos, error = %e, "Move failed"),
        }
    }

    /// Hands buffered engine events to the view, audio, and scheduler.
    fn dispatch_events(&mut self) {
        for event in self.engine.drain_events() {
            self.view.apply(&event);
            self.audio.observe(&event);
            if let GameEvent::ComputerMoveRequested(ticket) = event {
                self.scheduler.schedule(ticket);
            }
        }
    }

    /// Plays any computer moves whose delay has elapsed.
    pub fn tick(&mut self) {
        for ticket in self.scheduler.ready() {
            self.play_ticket(ticket);
        }
    }

    /// Waits for the next scheduled computer move and plays it.
    ///
    /// Returns false if no move arrives within a few seconds of the delay.
    pub async fn wait_for_computer(&mut self) -> bool {
        let limit = self.scheduler.delay() + Duration::from_secs(5);
        match tokio::time::timeout(limit, self.scheduler.next()).await {
            Ok(Some(ticket)) => {
                self.play_ticket(ticket);
                true
            }
            _ => false,
        }
    }

    fn play_ticket(&mut self, ticket: MoveTicket) {
        match self.engine.play_computer_move(ticket) {
            Ok(Some(pos)) => debug!(%pos, "Computer moved"),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Computer move failed"),
        }
        self.dispatch_events();
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip_all)]
    pub async fn run<B: Backend + Write>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        while !self.should_quit {
            terminal.draw(|f| ui::draw(f, self))?;

            // Short poll so computer moves land promptly.
            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                self.handle_key(key);
            }

            self.tick();

            if let Some(SoundCue::GameOver) = self.audio.take_cue() {
                let backend = terminal.backend_mut();
                backend.write_all(b"\x07")?;
                std::io::Write::flush(backend)?;
            }

            tokio::task::yield_now().await;
        }

        info!("Event loop finished");
        Ok(())
    }
}
