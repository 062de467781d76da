//! Contracts for the collaborators around the simulation core.
//!
//! The core reads input, hands out snapshots and cues, and reports the
//! session result. It never queries a renderer or a store for state.

use serde::{Deserialize, Serialize};

use crate::commands::InputFrame;
use crate::events::AudioCue;
use crate::state::GameStateSnapshot;

/// Supplies one set of intents per tick.
pub trait InputSource {
    /// Sample intents for the coming tick. `snapshot` is the last published
    /// state, for sources that react to the game (bots, replays).
    fn poll(&mut self, snapshot: &GameStateSnapshot) -> InputFrame;
}

/// Draws a finished tick.
pub trait Renderer {
    fn render(&mut self, snapshot: &GameStateSnapshot);
}

/// Plays audio cues. No acknowledgement is expected.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// Lives reached zero.
    GameOver,
    /// The player exited to the menu.
    Exited,
}

/// Final result handed to persistence at session end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub score: u32,
    pub currency: u32,
    pub level: u32,
    pub ticks: u64,
    pub outcome: SessionOutcome,
}

/// Persistence side of a finished session.
pub trait SessionReporter {
    type Error: std::error::Error;

    /// Merge the session result into the persistent stores.
    fn report(&mut self, summary: &SessionSummary) -> Result<(), Self::Error>;
}
