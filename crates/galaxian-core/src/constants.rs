//! Simulation constants and tuning parameters.
//!
//! These are the defaults baked into `GameConfig::default()`. Systems read
//! tuning from the config they are handed, never from here directly.

/// Simulation tick rate (Hz). One tick = one rendered frame.
pub const TICK_RATE: u32 = 30;

// --- Playfield ---

/// Default playfield width in pixels.
pub const PLAYFIELD_WIDTH: f64 = 800.0;

/// Default playfield height in pixels.
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

// --- Ship ---

/// Ship bounding box width.
pub const SHIP_WIDTH: f64 = 60.0;

/// Ship bounding box height.
pub const SHIP_HEIGHT: f64 = 20.0;

/// Ship spawn height above the bottom edge.
pub const SHIP_START_Y: f64 = 40.0;

/// Signed input magnitude applied per held move intent (multiplied by ship speed).
pub const SHIP_INPUT_STEP: f64 = 5.0;

/// Upward speed of ship bullets (pixels per tick).
pub const SHIP_BULLET_SPEED: f64 = 5.0;

/// Horizontal offset of each barrel while double-shot is active.
pub const DOUBLE_SHOT_OFFSET: f64 = 10.0;

/// Default ship base speed (input multiplier).
pub const SHIP_BASE_SPEED: f64 = 1.5;

/// Default ship fire rate (ticks between shots).
pub const SHIP_BASE_FIRE_RATE: u32 = 10;

/// Default starting lives.
pub const SHIP_START_LIVES: u32 = 3;

/// Hard cap on ship lives.
pub const MAX_LIVES: u32 = 5;

// --- Power-ups ---

/// Duration of every timed power-up (ticks). 10 seconds at 30 Hz.
pub const POWERUP_DURATION: u32 = 300;

/// Speed multiplier while the speed power-up is active.
pub const SPEED_POWERUP_MULTIPLIER: f64 = 1.5;

/// Downward drift of pickups (pixels per tick).
pub const POWERUP_DRIFT_SPEED: f64 = 1.0;

/// Lower bound (inclusive) of the kills-until-next-pickup threshold.
pub const POWERUP_THRESHOLD_MIN: u32 = 10;

/// Upper bound (inclusive) of the kills-until-next-pickup threshold.
pub const POWERUP_THRESHOLD_MAX: u32 = 30;

// --- Enemy units ---

/// Enemy unit bounding box width.
pub const ALIEN_WIDTH: f64 = 40.0;

/// Enemy unit bounding box height.
pub const ALIEN_HEIGHT: f64 = 20.0;

/// Downward speed of enemy projectiles (pixels per tick).
pub const ALIEN_BULLET_SPEED: f64 = 4.0;

// --- Formation ---

/// Rows per formation.
pub const FORMATION_ROWS: u32 = 5;

/// Units in the first row; each following row adds one.
pub const FORMATION_BASE: u32 = 5;

/// Horizontal spacing between units in a row.
pub const FORMATION_SPACING_X: f64 = 60.0;

/// Vertical spacing between rows.
pub const FORMATION_SPACING_Y: f64 = 40.0;

/// Distance from the top edge to the first row.
pub const FORMATION_TOP_MARGIN: f64 = 60.0;

/// Formation speed on level 1 (pixels per tick).
pub const FORMATION_INITIAL_SPEED: f64 = 2.0;

/// Speed added on each regular level advance.
pub const FORMATION_SPEED_STEP: f64 = 1.0;

/// Ticks between attacks on level 1.
pub const ATTACK_INITIAL_INTERVAL: u32 = 40;

/// Ticks removed from the attack interval on each regular level advance.
pub const ATTACK_INTERVAL_STEP: u32 = 5;

/// Attack interval never drops below this.
pub const ATTACK_INTERVAL_FLOOR: u32 = 10;

// --- Boss ---

/// Damage dealt to a boss by one ship bullet.
pub const BOSS_DAMAGE_PER_HIT: i32 = 5;

/// Score bonus for destroying a boss.
pub const BOSS_KILL_SCORE: u32 = 100;

/// Currency bonus for destroying a boss.
pub const BOSS_KILL_CURRENCY: u32 = 10;

/// Boss spawn distance below the top edge.
pub const BOSS_SPAWN_OFFSET_Y: f64 = 100.0;

/// Vertical step taken each time the boss bounces off a side.
pub const BOSS_STEP_DOWN: f64 = 10.0;

/// Default spread-shot fan size.
pub const SPREAD_SHOT_COUNT: u32 = 5;

/// Default spread-shot total arc (degrees).
pub const SPREAD_SHOT_ARC_DEG: f64 = 60.0;

/// Default spread-shot projectile speed.
pub const SPREAD_SHOT_SPEED: f64 = 4.0;

/// Default tracking-shot launch speed.
pub const TRACKING_SHOT_SPEED: f64 = 3.0;

/// Default angular offset of each tracking projectile from the direct line (degrees).
pub const TRACKING_SHOT_OFFSET_DEG: f64 = 90.0;

// --- Homing ---

/// Tracking limit as a fraction of playfield height.
pub const TRACKING_LIMIT_RATIO: f64 = 0.5;

/// Speed of a homing projectile once it steers.
pub const HOMING_SPEED: f64 = 4.0;

/// Maximum heading change per tick for homing projectiles (degrees).
pub const HOMING_TURN_RATE_DEG: f64 = 3.0;

// --- Scoring ---

/// Score per enemy unit destroyed.
pub const ENEMY_KILL_SCORE: u32 = 1;

/// Currency per enemy unit destroyed.
pub const ENEMY_KILL_CURRENCY: u32 = 1;

/// High-score table capacity.
pub const HIGH_SCORE_CAPACITY: usize = 10;
