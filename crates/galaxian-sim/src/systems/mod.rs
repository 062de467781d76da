//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus the engine-owned singletons they touch. They keep no state of their own.

pub mod attack;
pub mod cleanup;
pub mod collision;
pub mod formation;
pub mod powerups;
pub mod projectiles;
pub mod snapshot;
pub mod wave_director;
