//! Snapshot system: builds a GameStateSnapshot from the final state of a tick.

use hecs::World;

use galaxian_boss::Boss;
use galaxian_core::components::{EnemyUnit, FormationSlot, Pickup};
use galaxian_core::enums::GamePhase;
use galaxian_core::events::AudioCue;
use galaxian_core::projectile::Projectile;
use galaxian_core::state::*;
use galaxian_core::types::SimTime;

use super::wave_director::{self, WaveState};
use crate::ship::Ship;

/// Everything the snapshot is built from.
pub struct SnapshotInputs<'a> {
    pub world: &'a World,
    pub ship: &'a Ship,
    pub boss: Option<&'a Boss>,
    pub wave: &'a WaveState,
    pub time: SimTime,
    pub phase: GamePhase,
}

pub fn build_snapshot(inputs: SnapshotInputs<'_>, audio_cues: Vec<AudioCue>) -> GameStateSnapshot {
    let SnapshotInputs {
        world,
        ship,
        boss,
        wave,
        time,
        phase,
    } = inputs;

    GameStateSnapshot {
        time,
        phase,
        wave_phase: wave_director::wave_phase(world, boss),
        level: wave.level,
        ship: build_ship(ship),
        enemies: build_enemies(world),
        boss: boss.map(build_boss),
        enemy_projectiles: build_enemy_projectiles(world),
        pickups: build_pickups(world),
        audio_cues,
    }
}

fn build_ship(ship: &Ship) -> ShipView {
    ShipView {
        position: ship.position,
        lives: ship.lives,
        score: ship.score,
        currency: ship.currency,
        projectiles: ship.projectiles.clone(),
        active_powerups: ship.active_powerups(),
    }
}

/// Living units in formation order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut units: Vec<(FormationSlot, EnemyView)> = world
        .query::<(&EnemyUnit, &FormationSlot)>()
        .iter()
        .filter(|(_, (unit, _))| unit.alive)
        .map(|(_, (unit, slot))| {
            (
                *slot,
                EnemyView {
                    position: unit.position,
                    attacking: unit.attacking,
                },
            )
        })
        .collect();
    units.sort_unstable_by_key(|(slot, _)| *slot);
    units.into_iter().map(|(_, view)| view).collect()
}

/// In-flight unit projectiles, including those of units killed after firing.
fn build_enemy_projectiles(world: &World) -> Vec<Projectile> {
    let mut shots: Vec<(FormationSlot, Projectile)> = world
        .query::<(&EnemyUnit, &FormationSlot)>()
        .iter()
        .filter_map(|(_, (unit, slot))| unit.projectile.map(|p| (*slot, p)))
        .collect();
    shots.sort_unstable_by_key(|(slot, _)| *slot);
    shots.into_iter().map(|(_, p)| p).collect()
}

fn build_boss(boss: &Boss) -> BossView {
    BossView {
        profile: boss.name().to_string(),
        position: boss.position(),
        health: boss.health(),
        max_health: boss.max_health(),
        width: boss.width(),
        height: boss.height(),
        projectiles: boss.projectiles.clone(),
    }
}

/// Pickups sorted bottom-up, then left to right.
fn build_pickups(world: &World) -> Vec<PickupView> {
    let mut pickups: Vec<PickupView> = world
        .query::<&Pickup>()
        .iter()
        .map(|(_, pickup)| PickupView {
            position: pickup.position,
            kind: pickup.kind,
        })
        .collect();
    pickups.sort_by(|a, b| {
        a.position
            .y
            .total_cmp(&b.position.y)
            .then(a.position.x.total_cmp(&b.position.x))
    });
    pickups
}
