//! Galaxian CLI: plays one session with the autopilot and records the
//! result in the profile directory.
//!
//! Usage:
//!   cargo run -p galaxian-app -- --seed 7 --unpaced --max-ticks 9000
//!   RUST_LOG=debug cargo run -p galaxian-app -- --config tuning.json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use galaxian_app::frontends::{Autopilot, TraceAudio, TraceRenderer};
use galaxian_app::game_loop::Pacing;
use galaxian_app::session::{play_session, SessionOptions};
use galaxian_core::config::GameConfig;
use galaxian_profile::JsonProfileStore;

#[derive(Parser, Debug)]
#[command(name = "galaxian")]
#[command(about = "Run a headless Galaxian session and record the result")]
struct Args {
    /// JSON tuning file (missing fields take defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed; equal seeds replay equal sessions
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many ticks and record the session as exited
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Directory holding highscores.json and player_data.json
    #[arg(long, default_value = ".")]
    profile_dir: PathBuf,

    /// Run as fast as possible instead of at 30Hz
    #[arg(long)]
    unpaced: bool,

    /// Initials for a qualifying high score
    #[arg(long, default_value = "AAA")]
    initials: String,

    /// Switch to an unlocked ship before playing
    #[arg(long)]
    ship: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let game = match &args.config {
        Some(path) => GameConfig::from_path(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => GameConfig::default(),
    };
    let options = SessionOptions {
        seed: args.seed,
        game,
        max_ticks: args.max_ticks,
        pacing: if args.unpaced {
            Pacing::Unpaced
        } else {
            Pacing::RealTime
        },
        ship: args.ship,
    };
    let mut store = JsonProfileStore::new(&args.profile_dir).with_initials(&args.initials);

    let summary = play_session(
        options,
        &mut store,
        &mut Autopilot::default(),
        &mut TraceRenderer::default(),
        &mut TraceAudio::default(),
    )?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
