//! Headless collaborators: a bot and a scripted input source, plus a
//! renderer and an audio sink that report through `tracing`.

use galaxian_core::collaborators::{AudioSink, InputSource, Renderer};
use galaxian_core::commands::InputFrame;
use galaxian_core::constants::TICK_RATE;
use galaxian_core::events::AudioCue;
use galaxian_core::state::GameStateSnapshot;

/// Simple bot: lines up under the boss or the closest enemy, fires
/// continuously, and sidesteps incoming shots near the bottom.
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Horizontal slack before the bot bothers moving.
    pub deadband: f64,
    /// Incoming shots below this height trigger a dodge.
    pub danger_height: f64,
    /// Half-width of the lane considered dangerous.
    pub danger_lane: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            deadband: 4.0,
            danger_height: 140.0,
            danger_lane: 36.0,
        }
    }
}

impl Autopilot {
    fn target_x(&self, snapshot: &GameStateSnapshot) -> Option<f64> {
        let ship_x = snapshot.ship.position.x;
        if let Some(boss) = &snapshot.boss {
            return Some(boss.position.x);
        }
        snapshot
            .enemies
            .iter()
            .map(|e| e.position.x)
            .min_by(|a, b| (a - ship_x).abs().total_cmp(&(b - ship_x).abs()))
    }

    /// Direction away from the closest threatening shot, if any.
    fn dodge(&self, snapshot: &GameStateSnapshot) -> Option<f64> {
        let ship = snapshot.ship.position;
        let boss_shots = snapshot.boss.iter().flat_map(|b| b.projectiles.iter());
        snapshot
            .enemy_projectiles
            .iter()
            .chain(boss_shots)
            .filter(|p| p.position.y < ship.y + self.danger_height)
            .map(|p| p.position.x - ship.x)
            .filter(|dx| dx.abs() < self.danger_lane)
            .min_by(|a, b| a.abs().total_cmp(&b.abs()))
            .map(|dx| if dx >= 0.0 { -1.0 } else { 1.0 })
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &GameStateSnapshot) -> InputFrame {
        let ship_x = snapshot.ship.position.x;
        let direction = self.dodge(snapshot).unwrap_or_else(|| {
            match self.target_x(snapshot) {
                Some(x) if x > ship_x + self.deadband => 1.0,
                Some(x) if x < ship_x - self.deadband => -1.0,
                _ => 0.0,
            }
        });
        InputFrame {
            move_left: direction < 0.0,
            move_right: direction > 0.0,
            fire: true,
            ..InputFrame::idle()
        }
    }
}

/// Replays a fixed list of frames, then stays idle.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<InputFrame>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<InputFrame>) -> Self {
        Self { frames, cursor: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _snapshot: &GameStateSnapshot) -> InputFrame {
        let frame = self.frames.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        frame
    }
}

/// Logs a status line once per simulated second.
#[derive(Debug, Default)]
pub struct TraceRenderer {
    last_level: u32,
}

impl Renderer for TraceRenderer {
    fn render(&mut self, snapshot: &GameStateSnapshot) {
        if snapshot.level != self.last_level {
            self.last_level = snapshot.level;
            tracing::info!(level = snapshot.level, wave = ?snapshot.wave_phase, "level start");
        }
        if snapshot.time.tick % TICK_RATE as u64 == 0 {
            tracing::debug!(
                tick = snapshot.time.tick,
                lives = snapshot.ship.lives,
                score = snapshot.ship.score,
                enemies = snapshot.enemies.len(),
                boss_health = snapshot.boss.as_ref().map(|b| b.health),
                "frame"
            );
        }
    }
}

/// Counts cues and logs them at trace level.
#[derive(Debug, Default)]
pub struct TraceAudio {
    pub played: u64,
}

impl AudioSink for TraceAudio {
    fn play(&mut self, cue: AudioCue) {
        self.played += 1;
        tracing::trace!(?cue, "audio cue");
    }
}
