//! Boss encounters for the Galaxian simulation.
//!
//! Implements the boss state machine, the data-driven attack patterns,
//! and trigger-level profile resolution. One `Boss` type covers every
//! profile; behavior differences are configuration, not code paths.

pub mod fsm;
pub mod patterns;
pub mod profiles;

pub use galaxian_core as core;
pub use fsm::{Boss, BossState};

#[cfg(test)]
mod tests;
