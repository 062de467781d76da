//! Headless Galaxian application.
//!
//! Wires the simulation engine to input, rendering, audio and the profile
//! store, and runs sessions at a fixed tick rate.

pub mod frontends;
pub mod game_loop;
pub mod session;

pub use galaxian_core as core;
