//! Error types for profile persistence and the ship shop.

/// Errors from loading, saving, or mutating persistent player data.
#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    /// IO error from filesystem
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The ship id is not in the catalog.
    #[error("Unknown ship '{0}'")]
    UnknownShip(String),

    /// Not enough coins to unlock the ship.
    #[error("Ship '{ship}' costs {price} coins, only {coins} available")]
    InsufficientCoins { ship: String, price: u32, coins: u32 },

    /// Selecting a ship that has not been unlocked.
    #[error("Ship '{0}' is locked")]
    ShipLocked(String),
}

/// Result type for profile operations
pub type ProfileResult<T> = std::result::Result<T, ProfileError>;
