//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, TICK_RATE};

/// 2D position or per-tick velocity in playfield pixels.
/// Origin is the bottom-left corner, +y points up.
pub type Vec2 = glam::DVec2;

/// The playfield rectangle [0, width] × [0, height].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True if the point lies strictly inside the playfield on both axes.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x > 0.0 && point.x < self.width && point.y > 0.0 && point.y < self.height
    }

    /// Horizontal center line.
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// Axis-aligned box described by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    /// Box of the given full width/height centered on `center`.
    pub fn from_size(center: Vec2, width: f64, height: f64) -> Self {
        Self {
            center,
            half_extents: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    /// Strict overlap test: the point must be closer than the half extent on both axes.
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() < self.half_extents.x
            && (point.y - self.center.y).abs() < self.half_extents.y
    }

    pub fn left(&self) -> f64 {
        self.center.x - self.half_extents.x
    }

    pub fn right(&self) -> f64 {
        self.center.x + self.half_extents.x
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each simulated tick).
    pub tick: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Elapsed simulated seconds at the nominal tick rate.
    pub fn elapsed_secs(&self) -> f64 {
        self.tick as f64 / TICK_RATE as f64
    }
}
