//! ECS components for hecs entities.
//!
//! Enemy units and pickups live in the simulation's hecs world. The ship and
//! the boss are singletons owned directly by the engine.

use serde::{Deserialize, Serialize};

use crate::enums::PowerUpKind;
use crate::projectile::Projectile;
use crate::types::Vec2;

/// One member of the current enemy wave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyUnit {
    pub position: Vec2,
    /// Cleared on hit. Dead units stay in the world until the wave is regenerated.
    pub alive: bool,
    /// Set while the unit's single projectile is in flight.
    pub attacking: bool,
    /// At most one projectile per unit.
    pub projectile: Option<Projectile>,
}

/// Spawn order inside the formation. Gives queries a stable iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FormationSlot(pub u32);

/// A power-up pickup drifting toward the bottom of the playfield.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub position: Vec2,
    pub kind: PowerUpKind,
}
