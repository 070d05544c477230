//! Background music and sound cues.
//!
//! There is no audio device behind this controller: it tracks what the
//! music would be doing so the UI can show it, and rings the terminal bell
//! when a game ends. The engine never reads any of this.

use tictactoe_core::GameEvent;
use tracing::{debug, instrument};

/// Playback state of the background track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum MusicState {
    /// Not playing, positioned at the start.
    #[default]
    Stopped,
    /// Playing.
    Playing,
}

/// A one-shot sound to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// A game was won or drawn.
    GameOver,
}

/// Music and sound-effect state.
#[derive(Debug, Clone)]
pub struct AudioController {
    music: MusicState,
    muted: bool,
    volume: f32,
    pending: Option<SoundCue>,
}

impl AudioController {
    /// Creates a stopped controller.
    pub fn new(volume: f32, muted: bool) -> Self {
        Self {
            music: MusicState::Stopped,
            muted,
            volume: volume.clamp(0.0, 1.0),
            pending: None,
        }
    }

    /// Music playback state.
    pub fn music(&self) -> MusicState {
        self.music
    }

    /// Whether output is muted.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Music volume (0.0 - 1.0).
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Volume actually reaching the speakers.
    pub fn effective_volume(&self) -> f32 {
        match (self.music, self.muted) {
            (MusicState::Playing, false) => self.volume,
            _ => 0.0,
        }
    }

    /// Starts the track when a game begins.
    #[instrument(skip(self))]
    pub fn start_music(&mut self) {
        self.music = MusicState::Playing;
        debug!(volume = self.volume, muted = self.muted, "Music started");
    }

    /// Stops and rewinds the track when leaving the game screen.
    #[instrument(skip(self))]
    pub fn stop_music(&mut self) {
        self.music = MusicState::Stopped;
        debug!("Music stopped");
    }

    /// Flips mute. Unmuting while a game is on resumes a stopped track.
    #[instrument(skip(self))]
    pub fn toggle_mute(&mut self, in_game: bool) -> bool {
        self.muted = !self.muted;
        if !self.muted && in_game && self.music == MusicState::Stopped {
            self.music = MusicState::Playing;
        }
        debug!(muted = self.muted, music = %self.music, "Mute toggled");
        self.muted
    }

    /// Reacts to engine events.
    pub fn observe(&mut self, event: &GameEvent) {
        if let GameEvent::GameEnded(_) = event
            && !self.muted
        {
            self.pending = Some(SoundCue::GameOver);
        }
    }

    /// Takes the cue waiting to be played, if any.
    pub fn take_cue(&mut self) -> Option<SoundCue> {
        self.pending.take()
    }

    /// Icon for the mute button.
    pub fn icon(&self) -> &'static str {
        if self.muted { "🔇" } else { "🔊" }
    }

    /// Label describing what the mute key will do.
    pub fn toggle_label(&self) -> &'static str {
        if self.muted { "Play music" } else { "Mute music" }
    }
}
