//! Enemy unit attacks.
//!
//! A unit carries at most one projectile. The director wakes one idle unit
//! every `attack_interval` ticks; the shot falls straight down until it hits
//! the ship or leaves the playfield.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use galaxian_core::components::{EnemyUnit, FormationSlot};
use galaxian_core::config::EnemyConfig;
use galaxian_core::enums::ProjectileKind;
use galaxian_core::events::AudioCue;
use galaxian_core::projectile::Projectile;
use galaxian_core::types::{Playfield, Vec2};

use super::wave_director::WaveState;

/// Fire from just below the unit. No-op for dead or already attacking units.
/// Returns true if a projectile was launched.
pub fn attack(unit: &mut EnemyUnit, enemy: &EnemyConfig) -> bool {
    if !unit.alive || unit.attacking {
        return false;
    }
    let muzzle = Vec2::new(unit.position.x, unit.position.y - enemy.height / 2.0);
    unit.projectile = Some(Projectile::new(
        muzzle,
        Vec2::new(0.0, -enemy.bullet_speed),
        ProjectileKind::Plain,
    ));
    unit.attacking = true;
    true
}

/// Advance the unit's projectile; drop it once it leaves the playfield.
pub fn tick_unit(unit: &mut EnemyUnit, playfield: &Playfield) {
    if !unit.attacking {
        return;
    }
    match unit.projectile.as_mut() {
        Some(projectile) => {
            projectile.advance();
            if !playfield.contains(projectile.position) {
                unit.projectile = None;
                unit.attacking = false;
            }
        }
        None => unit.attacking = false,
    }
}

/// Advance every in-flight enemy projectile, including those of units
/// killed after firing.
pub fn advance_projectiles(world: &mut World, playfield: &Playfield) {
    for (_entity, unit) in world.query_mut::<&mut EnemyUnit>() {
        tick_unit(unit, playfield);
    }
}

/// Attack scheduler. Counts the timer up and, on reaching the interval,
/// makes one uniformly chosen idle living unit attack.
pub fn run(
    world: &mut World,
    wave: &mut WaveState,
    enemy: &EnemyConfig,
    rng: &mut ChaCha8Rng,
    audio_cues: &mut Vec<AudioCue>,
) {
    wave.attack_timer += 1;
    if wave.attack_timer < wave.attack_interval {
        return;
    }
    wave.attack_timer = 0;

    // Slot order keeps the choice independent of archetype layout.
    let mut idle: Vec<(FormationSlot, Entity)> = world
        .query::<(&EnemyUnit, &FormationSlot)>()
        .iter()
        .filter(|(_, (unit, _))| unit.alive && !unit.attacking)
        .map(|(entity, (_, slot))| (*slot, entity))
        .collect();
    if idle.is_empty() {
        return;
    }
    idle.sort_unstable_by_key(|(slot, _)| *slot);

    let (slot, entity) = idle[rng.gen_range(0..idle.len())];
    if let Ok(mut unit) = world.get::<&mut EnemyUnit>(entity) {
        if attack(&mut unit, enemy) {
            tracing::debug!(slot = slot.0, "enemy unit attacks");
            audio_cues.push(AudioCue::ShotFired);
        }
    }
}
