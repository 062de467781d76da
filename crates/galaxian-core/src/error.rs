//! Error types for configuration and simulation.

use crate::enums::GamePhase;

/// Invalid or unreadable game configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A tuning value is out of its allowed range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A boss trigger names a profile that is not defined.
    #[error("Boss trigger at level {level} references unknown profile '{profile}'")]
    UnknownBossProfile { level: u32, profile: String },

    /// Malformed JSON.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error from filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal simulation errors. Everything else is clamped, not raised.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SimError {
    /// Level advance hit a boss trigger whose profile does not exist.
    #[error("No boss profile '{profile}' for trigger level {level}")]
    MissingBossProfile { level: u32, profile: String },

    /// A session summary was requested while the session is still running.
    #[error("Session has not finished (phase {phase:?})")]
    SessionNotFinished { phase: GamePhase },
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
