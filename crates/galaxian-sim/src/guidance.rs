//! Homing guidance for tracking projectiles.
//!
//! A tracking shot turns toward the ship by at most the configured turn rate
//! per tick and flies at constant homing speed while it is above the tracking
//! limit. Below the limit it keeps its last velocity.

use std::f64::consts::{PI, TAU};

use galaxian_core::config::HomingConfig;
use galaxian_core::enums::ProjectileKind;
use galaxian_core::projectile::Projectile;
use galaxian_core::types::Vec2;

/// Wrap an angle into (-π, π].
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// New velocity after turning from `velocity` toward `target`, limited to
/// `max_turn` radians, at constant `speed`.
pub fn steer_toward(position: Vec2, velocity: Vec2, target: Vec2, speed: f64, max_turn: f64) -> Vec2 {
    let current = velocity.y.atan2(velocity.x);
    let to_target = target - position;
    let desired = to_target.y.atan2(to_target.x);
    let turn = normalize_angle(desired - current).clamp(-max_turn, max_turn);
    let heading = current + turn;
    Vec2::new(heading.cos() * speed, heading.sin() * speed)
}

/// Apply one tick of homing to `projectile` if it is a tracking shot above
/// `tracking_limit`. Other kinds fly straight.
pub fn apply_homing(projectile: &mut Projectile, target: Vec2, homing: &HomingConfig, tracking_limit: f64) {
    match projectile.kind {
        ProjectileKind::Tracking => {
            if projectile.position.y > tracking_limit {
                projectile.velocity = steer_toward(
                    projectile.position,
                    projectile.velocity,
                    target,
                    homing.speed,
                    homing.turn_rate(),
                );
            }
        }
        ProjectileKind::Plain | ProjectileKind::Spread => {}
    }
}
