//! Persistent player data: the high-score table, the player profile with
//! its ship unlocks, and a JSON file store that merges finished sessions.

pub mod error;
pub mod highscores;
pub mod profile;
pub mod store;

pub use error::{ProfileError, ProfileResult};
pub use highscores::{HighScoreEntry, HighScoreTable};
pub use profile::{PlayerProfile, ShipCatalog, ShipListing};
pub use store::JsonProfileStore;
