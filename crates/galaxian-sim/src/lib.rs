//! Simulation engine for the Galaxian combat core.
//!
//! Owns the hecs ECS world of enemy units and pickups, runs systems at a
//! fixed tick rate, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod guidance;
pub mod ship;
pub mod systems;
pub mod world_setup;

pub use galaxian_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use ship::Ship;
