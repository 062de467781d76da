//! Game loop: runs the simulation engine at 30Hz and hands every snapshot
//! to the renderer and audio sink.
//!
//! Input is polled once per tick from the `InputSource`. The loop stops when
//! the session finishes or the optional tick limit is reached.

use std::time::{Duration, Instant};

use galaxian_core::collaborators::{AudioSink, InputSource, Renderer};
use galaxian_core::constants::TICK_RATE;
use galaxian_core::error::SimError;
use galaxian_core::state::GameStateSnapshot;
use galaxian_sim::SimulationEngine;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Wall-clock pacing of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep between ticks to hold 30Hz.
    RealTime,
    /// Tick as fast as possible (bots, replays, tests).
    Unpaced,
}

/// How far the loop got.
#[derive(Debug)]
pub struct LoopReport {
    pub ticks_run: u64,
    pub last_snapshot: GameStateSnapshot,
}

/// Run `engine` until the session finishes or `max_ticks` loop iterations
/// have elapsed. Paused ticks count as iterations.
pub fn run_session(
    engine: &mut SimulationEngine,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    audio: &mut dyn AudioSink,
    pacing: Pacing,
    max_ticks: Option<u64>,
) -> Result<LoopReport, SimError> {
    let mut snapshot = engine.snapshot();
    let mut ticks_run = 0u64;
    let mut next_tick_time = Instant::now();

    while !snapshot.phase.is_finished() && max_ticks.map_or(true, |max| ticks_run < max) {
        // 1. Sample intents against the last published state
        let frame = input.poll(&snapshot);

        // 2. Advance one tick (engine handles pause semantics internally)
        snapshot = engine.tick(&frame)?;
        ticks_run += 1;

        // 3. Fan out cues and the frame
        for cue in &snapshot.audio_cues {
            audio.play(*cue);
        }
        renderer.render(&snapshot);

        // 4. Sleep until next tick
        if pacing == Pacing::RealTime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind: reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }

    Ok(LoopReport {
        ticks_run,
        last_snapshot: snapshot,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxian_core::commands::InputFrame;
    use galaxian_core::enums::GamePhase;
    use galaxian_core::events::AudioCue;
    use galaxian_sim::SimConfig;

    use crate::frontends::{Autopilot, ScriptedInput};

    #[derive(Default)]
    struct CountingRenderer {
        frames: u64,
        last_tick: u64,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, snapshot: &GameStateSnapshot) {
            self.frames += 1;
            self.last_tick = snapshot.time.tick;
        }
    }

    #[derive(Default)]
    struct RecordingAudio {
        cues: Vec<AudioCue>,
    }

    impl AudioSink for RecordingAudio {
        fn play(&mut self, cue: AudioCue) {
            self.cues.push(cue);
        }
    }

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn test_tick_duration_constant() {
        // 30Hz = 33.333ms per tick
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_stops_at_tick_limit() {
        let mut engine = engine();
        let mut renderer = CountingRenderer::default();
        let mut audio = RecordingAudio::default();
        let report = run_session(
            &mut engine,
            &mut Autopilot::default(),
            &mut renderer,
            &mut audio,
            Pacing::Unpaced,
            Some(120),
        )
        .unwrap();

        assert_eq!(report.ticks_run, 120);
        assert_eq!(renderer.frames, 120);
        assert_eq!(renderer.last_tick, 120);
        assert_eq!(report.last_snapshot.phase, GamePhase::Active);
        assert!(audio.cues.contains(&AudioCue::ShotFired));
    }

    #[test]
    fn test_loop_stops_on_exit() {
        let mut engine = engine();
        let mut input = ScriptedInput::new(vec![
            InputFrame::idle(),
            InputFrame::idle(),
            InputFrame {
                exit: true,
                ..InputFrame::idle()
            },
        ]);
        let report = run_session(
            &mut engine,
            &mut input,
            &mut CountingRenderer::default(),
            &mut RecordingAudio::default(),
            Pacing::Unpaced,
            None,
        )
        .unwrap();

        assert_eq!(report.ticks_run, 3);
        assert_eq!(report.last_snapshot.phase, GamePhase::Exited);
        assert_eq!(engine.time().tick, 2);
    }

    #[test]
    fn test_real_time_pacing_holds_rate() {
        let mut engine = engine();
        let start = Instant::now();
        run_session(
            &mut engine,
            &mut ScriptedInput::new(Vec::new()),
            &mut CountingRenderer::default(),
            &mut RecordingAudio::default(),
            Pacing::RealTime,
            Some(6),
        )
        .unwrap();
        // Six ticks at 30Hz take at least five full intervals.
        assert!(start.elapsed() >= TICK_DURATION * 5);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = engine();
        for _ in 0..50 {
            engine.tick(&InputFrame::idle()).unwrap();
        }

        let snapshot = engine.tick(&InputFrame::idle()).unwrap();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
