//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

/// Fire-and-forget audio cues. Emitted on the transition that causes them;
/// nothing in the simulation waits on playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AudioCue {
    /// Ship, enemy unit or boss fired.
    ShotFired,
    /// Enemy unit or boss destroyed.
    Explosion,
    /// Ship lost a life.
    LifeLost,
}
