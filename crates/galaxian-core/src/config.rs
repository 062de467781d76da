//! Game configuration records.
//!
//! Every tuning value the simulation reads is carried here, including the
//! playfield size, so tests can run at arbitrary resolutions. Defaults match
//! the shipped game. Any field may be omitted from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};
use crate::types::Playfield;

/// Complete configuration for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield: Playfield,
    pub ship: ShipConfig,
    pub enemy: EnemyConfig,
    pub formation: FormationConfig,
    pub powerups: PowerUpConfig,
    pub homing: HomingConfig,
    pub boss: BossRules,
}

/// Per-ship parameters chosen at session start (from the player's current ship).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipAttributes {
    /// Base speed multiplier applied to the input step.
    pub speed: f64,
    /// Starting lives.
    pub lives: u32,
    /// Base ticks between shots.
    pub fire_rate: u32,
}

impl Default for ShipAttributes {
    fn default() -> Self {
        Self {
            speed: SHIP_BASE_SPEED,
            lives: SHIP_START_LIVES,
            fire_rate: SHIP_BASE_FIRE_RATE,
        }
    }
}

/// Ship geometry and weapon tuning shared by every ship model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    pub width: f64,
    pub height: f64,
    pub start_y: f64,
    pub input_step: f64,
    pub bullet_speed: f64,
    pub double_shot_offset: f64,
    pub max_lives: u32,
    pub powerup_duration: u32,
    pub speed_multiplier: f64,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            width: SHIP_WIDTH,
            height: SHIP_HEIGHT,
            start_y: SHIP_START_Y,
            input_step: SHIP_INPUT_STEP,
            bullet_speed: SHIP_BULLET_SPEED,
            double_shot_offset: DOUBLE_SHOT_OFFSET,
            max_lives: MAX_LIVES,
            powerup_duration: POWERUP_DURATION,
            speed_multiplier: SPEED_POWERUP_MULTIPLIER,
        }
    }
}

/// Enemy unit geometry and weapon tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub width: f64,
    pub height: f64,
    pub bullet_speed: f64,
    pub kill_score: u32,
    pub kill_currency: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            width: ALIEN_WIDTH,
            height: ALIEN_HEIGHT,
            bullet_speed: ALIEN_BULLET_SPEED,
            kill_score: ENEMY_KILL_SCORE,
            kill_currency: ENEMY_KILL_CURRENCY,
        }
    }
}

/// Formation layout and per-level escalation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationConfig {
    pub rows: u32,
    pub base: u32,
    pub spacing_x: f64,
    pub spacing_y: f64,
    pub top_margin: f64,
    pub initial_speed: f64,
    pub speed_step: f64,
    pub initial_attack_interval: u32,
    pub attack_interval_step: u32,
    pub attack_interval_floor: u32,
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            rows: FORMATION_ROWS,
            base: FORMATION_BASE,
            spacing_x: FORMATION_SPACING_X,
            spacing_y: FORMATION_SPACING_Y,
            top_margin: FORMATION_TOP_MARGIN,
            initial_speed: FORMATION_INITIAL_SPEED,
            speed_step: FORMATION_SPEED_STEP,
            initial_attack_interval: ATTACK_INITIAL_INTERVAL,
            attack_interval_step: ATTACK_INTERVAL_STEP,
            attack_interval_floor: ATTACK_INTERVAL_FLOOR,
        }
    }
}

/// Pickup spawn gate and drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerUpConfig {
    /// Inclusive lower bound of the kills-until-drop threshold.
    pub threshold_min: u32,
    /// Inclusive upper bound of the kills-until-drop threshold.
    pub threshold_max: u32,
    pub drift_speed: f64,
}

impl Default for PowerUpConfig {
    fn default() -> Self {
        Self {
            threshold_min: POWERUP_THRESHOLD_MIN,
            threshold_max: POWERUP_THRESHOLD_MAX,
            drift_speed: POWERUP_DRIFT_SPEED,
        }
    }
}

/// Steering parameters for tracking projectiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomingConfig {
    /// Tracking limit as a fraction of playfield height.
    pub tracking_limit_ratio: f64,
    pub speed: f64,
    pub turn_rate_degrees: f64,
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            tracking_limit_ratio: TRACKING_LIMIT_RATIO,
            speed: HOMING_SPEED,
            turn_rate_degrees: HOMING_TURN_RATE_DEG,
        }
    }
}

impl HomingConfig {
    /// Tracking limit y-coordinate for a playfield.
    pub fn tracking_limit(&self, playfield: &Playfield) -> f64 {
        playfield.height * self.tracking_limit_ratio
    }

    /// Turn rate in radians per tick.
    pub fn turn_rate(&self) -> f64 {
        self.turn_rate_degrees.to_radians()
    }
}

/// Boss projectile emission behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AttackPattern {
    /// Evenly spaced fan centered on straight down.
    SpreadShot {
        count: u32,
        arc_degrees: f64,
        speed: f64,
    },
    /// Two shots offset symmetrically from the line to the ship.
    TrackingShot { speed: f64, offset_degrees: f64 },
}

impl AttackPattern {
    pub fn spread_shot() -> Self {
        AttackPattern::SpreadShot {
            count: SPREAD_SHOT_COUNT,
            arc_degrees: SPREAD_SHOT_ARC_DEG,
            speed: SPREAD_SHOT_SPEED,
        }
    }

    pub fn tracking_shot() -> Self {
        AttackPattern::TrackingShot {
            speed: TRACKING_SHOT_SPEED,
            offset_degrees: TRACKING_SHOT_OFFSET_DEG,
        }
    }
}

/// A named boss configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossProfile {
    pub name: String,
    pub health: i32,
    pub speed: f64,
    /// Ticks between shots.
    pub max_cooldown: u32,
    pub attack_pattern: AttackPattern,
    /// Sprite width, used as the bounding box.
    pub width: f64,
    /// Sprite height, used as the bounding box.
    pub height: f64,
}

/// Spawn `profile` instead of a formation when the level reaches `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossTrigger {
    pub level: u32,
    pub profile: String,
}

/// Boss roster, triggers and rewards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossRules {
    pub triggers: Vec<BossTrigger>,
    pub profiles: Vec<BossProfile>,
    pub damage_per_hit: i32,
    pub kill_score: u32,
    pub kill_currency: u32,
    pub spawn_offset_y: f64,
    pub step_down: f64,
}

impl Default for BossRules {
    fn default() -> Self {
        Self {
            triggers: vec![
                BossTrigger {
                    level: 3,
                    profile: "boss_1".into(),
                },
                BossTrigger {
                    level: 6,
                    profile: "boss_2".into(),
                },
            ],
            profiles: vec![
                BossProfile {
                    name: "boss_1".into(),
                    health: 150,
                    speed: 4.0,
                    max_cooldown: 30,
                    attack_pattern: AttackPattern::tracking_shot(),
                    width: 100.0,
                    height: 100.0,
                },
                BossProfile {
                    name: "boss_2".into(),
                    health: 170,
                    speed: 4.0,
                    max_cooldown: 20,
                    attack_pattern: AttackPattern::spread_shot(),
                    width: 100.0,
                    height: 100.0,
                },
            ],
            damage_per_hit: BOSS_DAMAGE_PER_HIT,
            kill_score: BOSS_KILL_SCORE,
            kill_currency: BOSS_KILL_CURRENCY,
            spawn_offset_y: BOSS_SPAWN_OFFSET_Y,
            step_down: BOSS_STEP_DOWN,
        }
    }
}

impl BossRules {
    /// Profile name triggered at `level`, if any.
    pub fn trigger_for(&self, level: u32) -> Option<&str> {
        self.triggers
            .iter()
            .find(|t| t.level == level)
            .map(|t| t.profile.as_str())
    }

    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&BossProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values that would make the simulation misbehave.
    pub fn validate(&self) -> ConfigResult<()> {
        let Playfield { width, height } = self.playfield;
        if !is_positive(width) || !is_positive(height) {
            return Err(ConfigError::Invalid(format!(
                "playfield must be positive and finite, got {width}x{height}"
            )));
        }
        if !is_positive(self.ship.width) || self.ship.width >= width {
            return Err(ConfigError::Invalid(format!(
                "ship width {} must be positive and narrower than the playfield ({width})",
                self.ship.width
            )));
        }
        if self.formation.rows == 0 || self.formation.base == 0 {
            return Err(ConfigError::Invalid(
                "formation needs at least one row and one unit".into(),
            ));
        }
        if self.powerups.threshold_min == 0
            || self.powerups.threshold_min > self.powerups.threshold_max
        {
            return Err(ConfigError::Invalid(format!(
                "power-up threshold range {}..={} is empty or starts at zero",
                self.powerups.threshold_min, self.powerups.threshold_max
            )));
        }
        if self.boss.damage_per_hit <= 0 {
            return Err(ConfigError::Invalid(
                "boss damage per hit must be positive".into(),
            ));
        }
        for profile in &self.boss.profiles {
            if profile.health <= 0 || profile.max_cooldown == 0 {
                return Err(ConfigError::Invalid(format!(
                    "boss profile '{}' needs positive health and cooldown",
                    profile.name
                )));
            }
            if let AttackPattern::SpreadShot { count: 0, .. } = profile.attack_pattern {
                return Err(ConfigError::Invalid(format!(
                    "boss profile '{}' spread shot fires no projectiles",
                    profile.name
                )));
            }
        }
        for trigger in &self.boss.triggers {
            if self.boss.profile(&trigger.profile).is_none() {
                return Err(ConfigError::UnknownBossProfile {
                    level: trigger.level,
                    profile: trigger.profile.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Strictly positive and finite. NaN fails.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
