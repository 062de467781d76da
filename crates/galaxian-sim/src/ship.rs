//! The player ship.
//!
//! Owned by the engine rather than the ECS world: there is exactly one, and
//! most systems need it alongside a world query.

use galaxian_core::config::{ShipAttributes, ShipConfig};
use galaxian_core::enums::{PowerUpKind, ProjectileKind};
use galaxian_core::projectile::{self, Projectile};
use galaxian_core::state::ActivePowerUpView;
use galaxian_core::types::{Aabb, Playfield, Vec2};

/// Number of timed power-up kinds (everything but `Life`).
pub const TIMED_POWERUPS: usize = 3;

/// Per-kind timed power-up record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PowerUpTimer {
    pub active: bool,
    pub remaining: u32,
    pub duration: u32,
}

impl PowerUpTimer {
    fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ship {
    pub position: Vec2,
    pub lives: u32,
    pub score: u32,
    pub currency: u32,
    pub projectiles: Vec<Projectile>,
    cooldown: u32,
    base_speed: f64,
    base_fire_rate: u32,
    timers: [PowerUpTimer; TIMED_POWERUPS],
    config: ShipConfig,
}

impl Ship {
    /// Ship at the bottom center with the selected hull's attributes.
    pub fn new(attributes: &ShipAttributes, config: &ShipConfig, playfield: &Playfield) -> Self {
        Self {
            position: Vec2::new(playfield.center_x(), config.start_y),
            lives: attributes.lives.min(config.max_lives),
            score: 0,
            currency: 0,
            projectiles: Vec::new(),
            cooldown: 0,
            base_speed: attributes.speed,
            base_fire_rate: attributes.fire_rate,
            timers: [PowerUpTimer::default(); TIMED_POWERUPS],
            config: config.clone(),
        }
    }

    /// Effective speed multiplier: base, ×1.5 while `Speed` is active.
    pub fn speed(&self) -> f64 {
        if self.is_active(PowerUpKind::Speed) {
            self.base_speed * self.config.speed_multiplier
        } else {
            self.base_speed
        }
    }

    /// Effective ticks between shots: base, halved while `DoubleShot` is active.
    pub fn fire_rate(&self) -> u32 {
        if self.is_active(PowerUpKind::DoubleShot) {
            self.base_fire_rate / 2
        } else {
            self.base_fire_rate
        }
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_size(self.position, self.config.width, self.config.height)
    }

    /// Timer record for a timed kind. `Life` has none.
    pub fn powerup(&self, kind: PowerUpKind) -> Option<&PowerUpTimer> {
        kind.timer_slot().map(|slot| &self.timers[slot])
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.powerup(kind).is_some_and(|t| t.active)
    }

    /// Shift horizontally by `direction` scaled by the effective speed,
    /// staying fully inside the playfield.
    pub fn move_by(&mut self, direction: f64, playfield: &Playfield) {
        let half_w = self.config.width / 2.0;
        let x = self.position.x + direction * self.speed();
        self.position.x = x.clamp(half_w, playfield.width - half_w);
    }

    /// Fire if the cooldown has elapsed. Returns true when a shot left the ship.
    pub fn fire(&mut self) -> bool {
        if self.cooldown > 0 {
            return false;
        }
        let muzzle_y = self.position.y + self.config.height / 2.0;
        let velocity = Vec2::new(0.0, self.config.bullet_speed);
        if self.is_active(PowerUpKind::DoubleShot) {
            let offset = self.config.double_shot_offset;
            for dx in [-offset, offset] {
                self.projectiles.push(Projectile::new(
                    Vec2::new(self.position.x + dx, muzzle_y),
                    velocity,
                    ProjectileKind::Plain,
                ));
            }
        } else {
            self.projectiles.push(Projectile::new(
                Vec2::new(self.position.x, muzzle_y),
                velocity,
                ProjectileKind::Plain,
            ));
        }
        self.cooldown = self.fire_rate();
        true
    }

    /// Per-tick upkeep: cooldown, own projectiles, power-up timers.
    pub fn tick(&mut self, playfield: &Playfield) {
        self.cooldown = self.cooldown.saturating_sub(1);
        projectile::advance_all(&mut self.projectiles, playfield);
        for timer in &mut self.timers {
            timer.tick();
        }
    }

    /// Start or refresh a timed power-up. Re-activation only resets the
    /// timer; it never stacks. Returns false for `Life`, which is not timed.
    pub fn activate_powerup(&mut self, kind: PowerUpKind) -> bool {
        let Some(slot) = kind.timer_slot() else {
            return false;
        };
        let duration = self.config.powerup_duration;
        self.timers[slot] = PowerUpTimer {
            active: true,
            remaining: duration,
            duration,
        };
        true
    }

    /// +1 life up to the cap. Returns true if a life was added.
    pub fn gain_life(&mut self) -> bool {
        if self.lives >= self.config.max_lives {
            return false;
        }
        self.lives += 1;
        true
    }

    /// -1 life unless shielded, floored at zero. Returns true if a life was lost.
    pub fn lose_life(&mut self) -> bool {
        if self.is_active(PowerUpKind::Shield) || self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        true
    }

    pub fn award(&mut self, score: u32, currency: u32) {
        self.score = self.score.saturating_add(score);
        self.currency = self.currency.saturating_add(currency);
    }

    /// Running timers, in `PowerUpKind::ALL` order.
    pub fn active_powerups(&self) -> Vec<ActivePowerUpView> {
        PowerUpKind::ALL
            .iter()
            .filter_map(|&kind| {
                self.powerup(kind)
                    .filter(|t| t.active)
                    .map(|t| ActivePowerUpView {
                        kind,
                        remaining: t.remaining,
                        duration: t.duration,
                    })
            })
            .collect()
    }
}
