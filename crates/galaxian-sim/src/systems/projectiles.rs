//! Boss projectile flight: homing correction, straight-line advance, cull.

use galaxian_core::config::HomingConfig;
use galaxian_core::projectile::{self, Projectile};
use galaxian_core::types::{Playfield, Vec2};

use crate::guidance;

/// Steer tracking shots toward the ship, advance everything, then drop
/// whatever left the playfield.
pub fn run(projectiles: &mut Vec<Projectile>, ship_position: Vec2, homing: &HomingConfig, playfield: &Playfield) {
    let tracking_limit = homing.tracking_limit(playfield);
    for projectile in projectiles.iter_mut() {
        guidance::apply_homing(projectile, ship_position, homing, tracking_limit);
    }
    projectile::advance_all(projectiles, playfield);
}
