//! Boss state machine.
//!
//! Spawned → Active (health > 0) → Destroyed (terminal). While active the
//! boss sweeps sideways, steps down at each edge, and fires its configured
//! pattern on a fixed cooldown. Projectile flight (including homing) is
//! advanced by the simulation; the boss only owns the collection.

use galaxian_core::config::{AttackPattern, BossProfile, BossRules};
use galaxian_core::projectile::Projectile;
use galaxian_core::types::{Aabb, Playfield, Vec2};

use crate::patterns;

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossState {
    Active,
    /// Health reached zero. Terminal.
    Destroyed,
}

/// A boss encounter, parameterized by its profile.
#[derive(Debug, Clone)]
pub struct Boss {
    profile: BossProfile,
    position: Vec2,
    health: i32,
    /// +1 moving right, -1 moving left.
    direction: f64,
    cooldown: u32,
    step_down: f64,
    state: BossState,
    pub projectiles: Vec<Projectile>,
}

impl Boss {
    /// Spawn at the top center of the playfield.
    pub fn spawn(profile: &BossProfile, rules: &BossRules, playfield: &Playfield) -> Self {
        Self {
            profile: profile.clone(),
            position: Vec2::new(
                playfield.center_x(),
                playfield.height - rules.spawn_offset_y,
            ),
            health: profile.health,
            direction: 1.0,
            cooldown: 0,
            step_down: rules.step_down,
            state: BossState::Active,
            projectiles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.profile.health
    }

    pub fn state(&self) -> BossState {
        self.state
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == BossState::Destroyed
    }

    pub fn attack_pattern(&self) -> &AttackPattern {
        &self.profile.attack_pattern
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn width(&self) -> f64 {
        self.profile.width
    }

    pub fn height(&self) -> f64 {
        self.profile.height
    }

    /// Sprite-sized hit box.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_size(self.position, self.profile.width, self.profile.height)
    }

    /// Advance movement and the shot cooldown by one tick.
    /// Returns true if the boss fired this tick.
    pub fn tick(&mut self, ship_position: Vec2, playfield: &Playfield) -> bool {
        if self.is_destroyed() {
            return false;
        }

        self.position.x += self.direction * self.profile.speed;
        let half_w = self.profile.width / 2.0;
        if self.position.x > playfield.width - half_w || self.position.x < half_w {
            self.direction = -self.direction;
            self.position.y -= self.step_down;
        }

        self.cooldown += 1;
        if self.cooldown >= self.profile.max_cooldown {
            self.shoot(ship_position);
            self.cooldown = 0;
            return true;
        }
        false
    }

    /// Fire the configured pattern from just below the sprite center.
    pub fn shoot(&mut self, ship_position: Vec2) {
        let muzzle = Vec2::new(
            self.position.x,
            self.position.y - self.profile.height / 2.0,
        );
        let shots = patterns::emit(
            &self.profile.attack_pattern,
            muzzle,
            self.position,
            ship_position,
        );
        self.projectiles.extend(shots);
    }

    /// Apply damage. Health floors at zero for display.
    ///
    /// Returns true only on the hit that destroys the boss; later hits on a
    /// destroyed boss return false.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.is_destroyed() {
            return false;
        }
        self.health = (self.health - amount).max(0);
        if self.health <= 0 {
            self.state = BossState::Destroyed;
            return true;
        }
        false
    }
}
