//! Player profile and the ship catalog.
//!
//! Coins earned in sessions accumulate in the profile and buy ship hulls
//! from the catalog. The selected hull's attributes configure the next
//! session's ship.

use serde::{Deserialize, Serialize};

use galaxian_core::config::ShipAttributes;

use crate::error::{ProfileError, ProfileResult};

/// The hull every new profile owns.
pub const DEFAULT_SHIP: &str = "nave";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub coins: u32,
    pub current_ship: String,
    pub unlocked_ships: Vec<String>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            coins: 0,
            current_ship: DEFAULT_SHIP.to_string(),
            unlocked_ships: vec![DEFAULT_SHIP.to_string()],
        }
    }
}

impl PlayerProfile {
    pub fn credit(&mut self, coins: u32) {
        self.coins = self.coins.saturating_add(coins);
    }

    pub fn is_unlocked(&self, ship: &str) -> bool {
        self.unlocked_ships.iter().any(|s| s == ship)
    }

    /// Buy `ship` from the catalog. Unlocking an owned ship is a no-op.
    pub fn unlock(&mut self, ship: &str, catalog: &ShipCatalog) -> ProfileResult<()> {
        let listing = catalog
            .get(ship)
            .ok_or_else(|| ProfileError::UnknownShip(ship.to_string()))?;
        if self.is_unlocked(ship) {
            return Ok(());
        }
        if self.coins < listing.price {
            return Err(ProfileError::InsufficientCoins {
                ship: ship.to_string(),
                price: listing.price,
                coins: self.coins,
            });
        }
        self.coins -= listing.price;
        self.unlocked_ships.push(ship.to_string());
        tracing::info!(ship, price = listing.price, coins = self.coins, "ship unlocked");
        Ok(())
    }

    /// Make an unlocked ship the current one.
    pub fn select(&mut self, ship: &str) -> ProfileResult<()> {
        if !self.is_unlocked(ship) {
            return Err(ProfileError::ShipLocked(ship.to_string()));
        }
        self.current_ship = ship.to_string();
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipListing {
    pub id: String,
    pub attributes: ShipAttributes,
    pub price: u32,
}

/// Purchasable ship hulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipCatalog {
    pub ships: Vec<ShipListing>,
}

impl Default for ShipCatalog {
    fn default() -> Self {
        let listing = |id: &str, speed, lives, fire_rate, price| ShipListing {
            id: id.to_string(),
            attributes: ShipAttributes {
                speed,
                lives,
                fire_rate,
            },
            price,
        };
        Self {
            ships: vec![
                listing(DEFAULT_SHIP, 1.5, 3, 10, 0),
                listing("red", 3.0, 2, 10, 50),
                listing("orange", 0.75, 5, 10, 75),
                listing("green", 2.0, 3, 7, 100),
            ],
        }
    }
}

impl ShipCatalog {
    pub fn get(&self, id: &str) -> Option<&ShipListing> {
        self.ships.iter().find(|s| s.id == id)
    }

    pub fn attributes(&self, id: &str) -> ProfileResult<ShipAttributes> {
        self.get(id)
            .map(|s| s.attributes)
            .ok_or_else(|| ProfileError::UnknownShip(id.to_string()))
    }
}
