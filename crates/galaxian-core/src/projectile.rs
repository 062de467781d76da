//! Projectiles and their straight-line kinematics.
//!
//! Velocities are per-tick displacements: one `advance` call is one fixed
//! simulation tick. Homing correction for tracking shots lives in the
//! simulation crate's guidance module and rewrites `velocity` before `advance`.

use serde::{Deserialize, Serialize};

use crate::enums::ProjectileKind;
use crate::types::{Playfield, Vec2};

/// A bullet in flight, owned by the collection of the entity that fired it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    #[serde(default)]
    pub kind: ProjectileKind,
}

impl Projectile {
    pub fn new(position: Vec2, velocity: Vec2, kind: ProjectileKind) -> Self {
        Self {
            position,
            velocity,
            kind,
        }
    }

    /// Projectile launched at `heading` (radians, 0 = +x, counter-clockwise).
    pub fn from_heading(position: Vec2, heading: f64, speed: f64, kind: ProjectileKind) -> Self {
        Self::new(
            position,
            Vec2::new(heading.cos() * speed, heading.sin() * speed),
            kind,
        )
    }

    /// Integrate one tick: position += velocity.
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Current heading in radians, in (-π, π].
    pub fn heading(&self) -> f64 {
        self.velocity.y.atan2(self.velocity.x)
    }

    /// Speed magnitude (pixels per tick).
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

/// Drop every projectile that left the open playfield rectangle.
pub fn cull(projectiles: &mut Vec<Projectile>, playfield: &Playfield) {
    projectiles.retain(|p| playfield.contains(p.position));
}

/// Advance every projectile one tick, then cull.
pub fn advance_all(projectiles: &mut Vec<Projectile>, playfield: &Playfield) {
    for projectile in projectiles.iter_mut() {
        projectile.advance();
    }
    cull(projectiles, playfield);
}
