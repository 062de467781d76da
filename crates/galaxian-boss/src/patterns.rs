//! Boss attack patterns.
//!
//! Pure functions from pattern parameters and positions to projectiles.
//! Angles are radians measured counter-clockwise from +x; straight down
//! is 270°.

use galaxian_core::config::AttackPattern;
use galaxian_core::enums::ProjectileKind;
use galaxian_core::projectile::Projectile;
use galaxian_core::types::Vec2;

/// Straight down.
pub const DOWN_DEGREES: f64 = 270.0;

/// Headings of a spread fan: `count` shots evenly spaced across `arc_degrees`,
/// centered on straight down. A single shot goes straight down.
pub fn spread_headings(count: u32, arc_degrees: f64) -> Vec<f64> {
    if count <= 1 {
        return vec![DOWN_DEGREES.to_radians(); count as usize];
    }
    let start = DOWN_DEGREES - arc_degrees / 2.0;
    let step = arc_degrees / (count - 1) as f64;
    (0..count)
        .map(|i| (start + i as f64 * step).to_radians())
        .collect()
}

/// Headings of the two tracking shots: the direct line to `target`, rotated
/// by `-offset_degrees` and `+offset_degrees`.
pub fn tracking_headings(origin: Vec2, target: Vec2, offset_degrees: f64) -> [f64; 2] {
    let to_target = target - origin;
    let direct = to_target.y.atan2(to_target.x);
    let offset = offset_degrees.to_radians();
    [direct - offset, direct + offset]
}

/// Projectiles emitted by one `shoot` with `pattern`.
///
/// `muzzle` is where the shots appear; `aim_from` is the boss center used to
/// aim tracking shots at `target`.
pub fn emit(pattern: &AttackPattern, muzzle: Vec2, aim_from: Vec2, target: Vec2) -> Vec<Projectile> {
    match *pattern {
        AttackPattern::SpreadShot {
            count,
            arc_degrees,
            speed,
        } => spread_headings(count, arc_degrees)
            .into_iter()
            .map(|h| Projectile::from_heading(muzzle, h, speed, ProjectileKind::Spread))
            .collect(),
        AttackPattern::TrackingShot {
            speed,
            offset_degrees,
        } => tracking_headings(aim_from, target, offset_degrees)
            .into_iter()
            .map(|h| Projectile::from_heading(muzzle, h, speed, ProjectileKind::Tracking))
            .collect(),
    }
}
