//! Collision resolution.
//!
//! Three passes in fixed order:
//! 1. ship bullets × living enemy units
//! 2. enemy and boss projectiles × ship
//! 3. ship bullets × boss
//!
//! Overlap is the strict half-extent test of [`Aabb::contains_point`]. A
//! bullet is consumed by its first hit, so it resolves at most one hit per tick.

use hecs::{Entity, World};

use galaxian_boss::Boss;
use galaxian_core::components::{EnemyUnit, FormationSlot};
use galaxian_core::config::{BossRules, EnemyConfig};
use galaxian_core::events::AudioCue;
use galaxian_core::types::{Aabb, Vec2};

use crate::ship::Ship;

/// What the passes changed, for the systems that run after them.
#[derive(Debug, Default)]
pub struct CollisionReport {
    /// Positions of enemy units killed this tick, in resolution order.
    pub kills: Vec<Vec2>,
    pub lives_lost: u32,
    pub boss_destroyed: bool,
}

/// Run all three passes.
pub fn run(
    world: &mut World,
    ship: &mut Ship,
    boss: Option<&mut Boss>,
    enemy: &EnemyConfig,
    rules: &BossRules,
    audio_cues: &mut Vec<AudioCue>,
) -> CollisionReport {
    let mut report = CollisionReport::default();
    ship_bullets_vs_units(world, ship, enemy, audio_cues, &mut report);
    let mut boss = boss.filter(|b| !b.is_destroyed());
    enemy_fire_vs_ship(world, ship, boss.as_deref_mut(), audio_cues, &mut report);
    if let Some(boss) = boss {
        ship_bullets_vs_boss(ship, boss, rules, audio_cues, &mut report);
    }
    report
}

fn ship_bullets_vs_units(
    world: &mut World,
    ship: &mut Ship,
    enemy: &EnemyConfig,
    audio_cues: &mut Vec<AudioCue>,
    report: &mut CollisionReport,
) {
    let mut targets: Vec<(FormationSlot, Entity, Vec2)> = world
        .query::<(&EnemyUnit, &FormationSlot)>()
        .iter()
        .filter(|(_, (unit, _))| unit.alive)
        .map(|(entity, (unit, slot))| (*slot, entity, unit.position))
        .collect();
    if targets.is_empty() || ship.projectiles.is_empty() {
        return;
    }
    targets.sort_unstable_by_key(|(slot, _, _)| *slot);

    let mut dead = vec![false; targets.len()];
    let mut killed: Vec<Entity> = Vec::new();
    ship.projectiles.retain(|bullet| {
        for (i, (_, entity, position)) in targets.iter().enumerate() {
            if dead[i] {
                continue;
            }
            if Aabb::from_size(*position, enemy.width, enemy.height).contains_point(bullet.position) {
                dead[i] = true;
                killed.push(*entity);
                report.kills.push(*position);
                return false;
            }
        }
        true
    });

    for entity in killed {
        if let Ok(mut unit) = world.get::<&mut EnemyUnit>(entity) {
            unit.alive = false;
        }
        ship.award(enemy.kill_score, enemy.kill_currency);
        audio_cues.push(AudioCue::Explosion);
    }
}

fn enemy_fire_vs_ship(
    world: &mut World,
    ship: &mut Ship,
    boss: Option<&mut Boss>,
    audio_cues: &mut Vec<AudioCue>,
    report: &mut CollisionReport,
) {
    let hitbox = ship.bounding_box();
    let mut hits = 0u32;

    for (_entity, unit) in world.query_mut::<&mut EnemyUnit>() {
        let hit = unit
            .projectile
            .is_some_and(|p| hitbox.contains_point(p.position));
        if hit {
            unit.projectile = None;
            unit.attacking = false;
            hits += 1;
        }
    }

    if let Some(boss) = boss {
        boss.projectiles.retain(|p| {
            let hit = hitbox.contains_point(p.position);
            if hit {
                hits += 1;
            }
            !hit
        });
    }

    for _ in 0..hits {
        if ship.lose_life() {
            report.lives_lost += 1;
            audio_cues.push(AudioCue::LifeLost);
        }
    }
}

fn ship_bullets_vs_boss(
    ship: &mut Ship,
    boss: &mut Boss,
    rules: &BossRules,
    audio_cues: &mut Vec<AudioCue>,
    report: &mut CollisionReport,
) {
    let hitbox = boss.bounding_box();
    let mut i = 0;
    while i < ship.projectiles.len() {
        if !hitbox.contains_point(ship.projectiles[i].position) {
            i += 1;
            continue;
        }
        ship.projectiles.remove(i);
        if boss.take_damage(rules.damage_per_hit) {
            ship.award(rules.kill_score, rules.kill_currency);
            audio_cues.push(AudioCue::Explosion);
            report.boss_destroyed = true;
            break;
        }
    }
}
