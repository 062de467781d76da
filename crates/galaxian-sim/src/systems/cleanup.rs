//! Cleanup system: removes pickups that left the playfield and clears a
//! finished wave.

use hecs::{Entity, World};

use galaxian_core::components::{EnemyUnit, Pickup};
use galaxian_core::types::Playfield;

/// Despawn pickups that drifted out of the playfield.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, playfield: &Playfield, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, pickup) in world.query_mut::<&Pickup>() {
        if !playfield.contains(pickup.position) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Despawn every enemy unit, dead or alive, along with any projectile still
/// in flight. Pickups survive the wave change.
pub fn despawn_wave(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, _unit) in world.query_mut::<&EnemyUnit>() {
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
