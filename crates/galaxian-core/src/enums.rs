//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Projectile behavior tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileKind {
    /// Member of a boss spread fan. Straight-line.
    Spread,
    /// Boss tracking shot. Eligible for homing above the tracking limit.
    Tracking,
    /// Straight-line shot (ship and enemy bullets).
    /// Unrecognized tags in serialized data fall back to this, so it stays last.
    #[default]
    #[serde(other)]
    Plain,
}

/// Pickup kinds dropped by destroyed enemy units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    /// Instant +1 life, capped.
    Life,
    /// Timed movement speed boost.
    Speed,
    /// Timed immunity to life loss.
    Shield,
    /// Timed twin barrels with halved fire cooldown.
    DoubleShot,
}

impl PowerUpKind {
    /// Every kind, in drop-table order.
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Life,
        PowerUpKind::Speed,
        PowerUpKind::Shield,
        PowerUpKind::DoubleShot,
    ];

    /// Slot in the ship's timer table, or `None` for instant kinds.
    pub fn timer_slot(self) -> Option<usize> {
        match self {
            PowerUpKind::Life => None,
            PowerUpKind::Speed => Some(0),
            PowerUpKind::Shield => Some(1),
            PowerUpKind::DoubleShot => Some(2),
        }
    }
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    /// Simulation frozen; only pause-toggle and exit are honored.
    Paused,
    /// Ship ran out of lives.
    GameOver,
    /// Player left the session through the exit intent.
    Exited,
}

impl GamePhase {
    /// True once the session can no longer advance.
    pub fn is_finished(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Exited)
    }
}

/// Director state for the current level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    /// At least one living enemy unit.
    #[default]
    WaveActive,
    /// A boss is alive; regular attacks are suspended.
    BossActive,
    /// No living enemies and no boss; the level advances this tick.
    WaveClear,
}
