//! Wave/level director.
//!
//! Tracks the current level and formation tuning, detects a cleared wave,
//! and decides what the next level brings: a boss on trigger levels, a
//! faster and more aggressive formation otherwise.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use galaxian_boss::profiles::profile_for_level;
use galaxian_boss::Boss;
use galaxian_core::components::EnemyUnit;
use galaxian_core::config::{FormationConfig, GameConfig};
use galaxian_core::enums::WavePhase;
use galaxian_core::error::SimError;

use super::cleanup;
use super::powerups::PowerUpSpawner;
use crate::world_setup;

/// Per-level director state.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveState {
    pub level: u32,
    /// +1 moving right, -1 moving left. Carried across levels.
    pub direction: f64,
    /// Formation pixels per tick.
    pub speed: f64,
    /// Ticks between enemy attacks.
    pub attack_interval: u32,
    pub attack_timer: u32,
}

impl WaveState {
    pub fn new(formation: &FormationConfig) -> Self {
        Self {
            level: 1,
            direction: 1.0,
            speed: formation.initial_speed,
            attack_interval: formation.initial_attack_interval,
            attack_timer: 0,
        }
    }

    /// Faster formation, shorter attack interval (never below the floor).
    pub fn escalate(&mut self, formation: &FormationConfig) {
        self.speed += formation.speed_step;
        self.attack_interval = self
            .attack_interval
            .saturating_sub(formation.attack_interval_step)
            .max(formation.attack_interval_floor);
    }
}

/// What a level advance produced.
#[derive(Debug)]
pub enum LevelAdvance {
    Formation { units: usize },
    Boss(Boss),
}

pub fn living_units(world: &World) -> usize {
    world
        .query::<&EnemyUnit>()
        .iter()
        .filter(|(_, unit)| unit.alive)
        .count()
}

pub fn wave_phase(world: &World, boss: Option<&Boss>) -> WavePhase {
    if boss.is_some_and(|b| !b.is_destroyed()) {
        WavePhase::BossActive
    } else if living_units(world) > 0 {
        WavePhase::WaveActive
    } else {
        WavePhase::WaveClear
    }
}

/// Move to the next level. The boss lookup happens before any state
/// changes, so a missing profile leaves the session untouched.
pub fn advance_level(
    world: &mut World,
    wave: &mut WaveState,
    spawner: &mut PowerUpSpawner,
    config: &GameConfig,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<Entity>,
) -> Result<LevelAdvance, SimError> {
    let next_level = wave.level + 1;
    let profile = profile_for_level(&config.boss, next_level)?;

    cleanup::despawn_wave(world, despawn_buffer);
    wave.level = next_level;
    spawner.reset(&config.powerups, rng);

    match profile {
        Some(profile) => {
            tracing::info!(level = next_level, boss = %profile.name, "boss level");
            Ok(LevelAdvance::Boss(Boss::spawn(
                profile,
                &config.boss,
                &config.playfield,
            )))
        }
        None => {
            wave.escalate(&config.formation);
            let units = world_setup::spawn_formation(world, &config.formation, &config.playfield);
            tracing::info!(
                level = next_level,
                units,
                speed = wave.speed,
                attack_interval = wave.attack_interval,
                "new formation"
            );
            Ok(LevelAdvance::Formation { units })
        }
    }
}
