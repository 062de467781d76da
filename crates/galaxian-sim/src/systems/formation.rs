//! Formation movement: the whole wave sweeps sideways and reverses at the
//! playfield edges. Only living units count toward the edges and move.

use hecs::World;

use galaxian_core::components::EnemyUnit;
use galaxian_core::config::EnemyConfig;
use galaxian_core::types::{Aabb, Playfield};

use super::wave_director::WaveState;

/// Horizontal extent of the living formation as (left, right) edges,
/// or `None` when every unit is dead.
pub fn living_bounds(world: &World, enemy: &EnemyConfig) -> Option<(f64, f64)> {
    world
        .query::<&EnemyUnit>()
        .iter()
        .filter(|(_, unit)| unit.alive)
        .map(|(_, unit)| Aabb::from_size(unit.position, enemy.width, enemy.height))
        .fold(None, |bounds, aabb| {
            let (left, right) = bounds.unwrap_or((f64::INFINITY, f64::NEG_INFINITY));
            Some((left.min(aabb.left()), right.max(aabb.right())))
        })
}

/// Flip direction at the edges, then move every living unit one step.
pub fn run(world: &mut World, wave: &mut WaveState, enemy: &EnemyConfig, playfield: &Playfield) {
    if let Some((left, right)) = living_bounds(world, enemy) {
        if right >= playfield.width {
            wave.direction = -1.0;
        }
        if left <= 0.0 {
            wave.direction = 1.0;
        }
    }

    let dx = wave.direction * wave.speed;
    for (_entity, unit) in world.query_mut::<&mut EnemyUnit>() {
        if unit.alive {
            unit.position.x += dx;
        }
    }
}
