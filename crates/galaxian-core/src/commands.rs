//! Player input intents, sampled once per tick.

use serde::{Deserialize, Serialize};

/// Abstract intents for one tick. Device polling belongs to the caller.
///
/// `move_left`, `move_right` and `fire` are level-triggered (held keys);
/// `pause_toggle` and `exit` are edge-triggered (pressed this tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    pub pause_toggle: bool,
    pub exit: bool,
}

impl InputFrame {
    /// No intents at all.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Net horizontal direction: -1, 0 or +1.
    pub fn horizontal(&self) -> f64 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
