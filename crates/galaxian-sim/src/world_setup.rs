//! Entity spawn factories for setting up the simulation world.
//!
//! Creates formation units and pickups with their component bundles.

use hecs::{Entity, World};

use galaxian_core::components::{EnemyUnit, FormationSlot, Pickup};
use galaxian_core::config::FormationConfig;
use galaxian_core::enums::PowerUpKind;
use galaxian_core::types::{Playfield, Vec2};

/// Spawn a fresh formation: row `r` holds `base + r` units, centered
/// horizontally, rows stacked downward from the top margin.
/// Returns the number of units spawned.
pub fn spawn_formation(world: &mut World, formation: &FormationConfig, playfield: &Playfield) -> usize {
    let mut slot = 0u32;
    for row in 0..formation.rows {
        let count = formation.base + row;
        let total_width = (count - 1) as f64 * formation.spacing_x;
        let y = playfield.height - formation.top_margin - row as f64 * formation.spacing_y;
        let left = playfield.center_x() - total_width / 2.0;
        for i in 0..count {
            let x = left + i as f64 * formation.spacing_x;
            spawn_enemy_unit(world, Vec2::new(x, y), slot);
            slot += 1;
        }
    }
    slot as usize
}

pub fn spawn_enemy_unit(world: &mut World, position: Vec2, slot: u32) -> Entity {
    world.spawn((
        EnemyUnit {
            position,
            alive: true,
            attacking: false,
            projectile: None,
        },
        FormationSlot(slot),
    ))
}

pub fn spawn_pickup(world: &mut World, position: Vec2, kind: PowerUpKind) -> Entity {
    world.spawn((Pickup { position, kind },))
}
