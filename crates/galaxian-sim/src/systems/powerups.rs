//! Power-up lifecycle: the kill-count spawn gate, pickup drift, and
//! collection by the ship.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use galaxian_core::components::Pickup;
use galaxian_core::config::PowerUpConfig;
use galaxian_core::enums::PowerUpKind;
use galaxian_core::types::Vec2;

use crate::ship::Ship;
use crate::world_setup;

/// Counts kills and decides when the next pickup drops.
#[derive(Debug, Clone)]
pub struct PowerUpSpawner {
    counter: u32,
    threshold: u32,
}

impl PowerUpSpawner {
    pub fn new(config: &PowerUpConfig, rng: &mut ChaCha8Rng) -> Self {
        Self {
            counter: 0,
            threshold: roll_threshold(config, rng),
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Count one kill. Returns the kind to drop once the threshold is reached,
    /// after which the counter restarts against a fresh threshold.
    pub fn record_kill(&mut self, config: &PowerUpConfig, rng: &mut ChaCha8Rng) -> Option<PowerUpKind> {
        self.counter += 1;
        if self.counter < self.threshold {
            return None;
        }
        let kind = PowerUpKind::ALL[rng.gen_range(0..PowerUpKind::ALL.len())];
        self.reset(config, rng);
        Some(kind)
    }

    /// Zero the counter and re-roll the threshold (level advance).
    pub fn reset(&mut self, config: &PowerUpConfig, rng: &mut ChaCha8Rng) {
        self.counter = 0;
        self.threshold = roll_threshold(config, rng);
    }
}

fn roll_threshold(config: &PowerUpConfig, rng: &mut ChaCha8Rng) -> u32 {
    rng.gen_range(config.threshold_min..=config.threshold_max)
}

/// Feed this tick's kills through the gate and drop pickups where they died.
pub fn spawn_from_kills(
    world: &mut World,
    spawner: &mut PowerUpSpawner,
    kills: &[Vec2],
    config: &PowerUpConfig,
    rng: &mut ChaCha8Rng,
) {
    for &position in kills {
        if let Some(kind) = spawner.record_kill(config, rng) {
            tracing::debug!(?kind, x = position.x, y = position.y, "power-up dropped");
            world_setup::spawn_pickup(world, position, kind);
        }
    }
}

/// Drift pickups downward and apply those that touch the ship.
/// Collected pickups are despawned here; pickups that fall off the
/// playfield are left to cleanup.
pub fn run(
    world: &mut World,
    ship: &mut Ship,
    config: &PowerUpConfig,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let hitbox = ship.bounding_box();

    let mut collected: Vec<PowerUpKind> = Vec::new();
    for (entity, pickup) in world.query_mut::<&mut Pickup>() {
        pickup.position.y -= config.drift_speed;
        if hitbox.contains_point(pickup.position) {
            collected.push(pickup.kind);
            despawn_buffer.push(entity);
        }
    }

    for kind in collected {
        let applied = match kind {
            PowerUpKind::Life => ship.gain_life(),
            PowerUpKind::Speed | PowerUpKind::Shield | PowerUpKind::DoubleShot => {
                ship.activate_powerup(kind)
            }
        };
        tracing::debug!(?kind, applied, "power-up collected");
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
