//! Game state snapshot: everything a renderer needs after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioCue;
use crate::projectile::Projectile;
use crate::types::{SimTime, Vec2};

/// Complete read-only view of the session, built after the tick is final.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave_phase: WavePhase,
    pub level: u32,
    pub ship: ShipView,
    pub enemies: Vec<EnemyView>,
    pub boss: Option<BossView>,
    /// Enemy unit projectiles in flight.
    pub enemy_projectiles: Vec<Projectile>,
    pub pickups: Vec<PickupView>,
    pub audio_cues: Vec<AudioCue>,
}

/// Player ship status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Vec2,
    pub lives: u32,
    pub score: u32,
    pub currency: u32,
    pub projectiles: Vec<Projectile>,
    pub active_powerups: Vec<ActivePowerUpView>,
}

/// A running timed power-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivePowerUpView {
    pub kind: PowerUpKind,
    pub remaining: u32,
    pub duration: u32,
}

/// A living enemy unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec2,
    pub attacking: bool,
}

/// Boss status, including its health bar inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub profile: String,
    pub position: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub width: f64,
    pub height: f64,
    pub projectiles: Vec<Projectile>,
}

/// A falling pickup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Vec2,
    pub kind: PowerUpKind,
}
