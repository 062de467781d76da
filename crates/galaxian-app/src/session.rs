//! One complete session: pick the player's ship, run the loop, and merge the
//! result into the profile store.

use anyhow::{Context, Result};

use galaxian_core::collaborators::{AudioSink, InputSource, Renderer, SessionReporter, SessionSummary};
use galaxian_core::commands::InputFrame;
use galaxian_core::config::GameConfig;
use galaxian_profile::{JsonProfileStore, ShipCatalog};
use galaxian_sim::{SimConfig, SimulationEngine};

use crate::game_loop::{self, Pacing};

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub seed: u64,
    pub game: GameConfig,
    pub max_ticks: Option<u64>,
    pub pacing: Pacing,
    /// Switch to this (already unlocked) ship before starting.
    pub ship: Option<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
            max_ticks: None,
            pacing: Pacing::RealTime,
            ship: None,
        }
    }
}

/// Run a session to completion and report it. A session cut short by the
/// tick limit is closed with an exit intent so it is still recorded.
pub fn play_session(
    options: SessionOptions,
    store: &mut JsonProfileStore,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    audio: &mut dyn AudioSink,
) -> Result<SessionSummary> {
    let catalog = ShipCatalog::default();
    let mut profile = store.load_profile().context("loading player profile")?;
    if let Some(ship) = &options.ship {
        profile.select(ship)?;
        store.save_profile(&profile)?;
    }
    let attributes = catalog.attributes(&profile.current_ship)?;
    tracing::info!(ship = %profile.current_ship, coins = profile.coins, "player loaded");

    let mut engine = SimulationEngine::new(SimConfig {
        seed: options.seed,
        game: options.game,
        ship: attributes,
    })
    .context("invalid game configuration")?;

    let report = game_loop::run_session(
        &mut engine,
        input,
        renderer,
        audio,
        options.pacing,
        options.max_ticks,
    )?;
    if !report.last_snapshot.phase.is_finished() {
        tracing::info!(ticks = report.ticks_run, "tick limit reached, exiting session");
        engine.tick(&InputFrame {
            exit: true,
            ..InputFrame::idle()
        })?;
    }

    let summary = engine.summary()?;
    store
        .report(&summary)
        .with_context(|| format!("saving session to {}", store.dir().display()))?;
    Ok(summary)
}
