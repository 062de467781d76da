//! JSON file persistence for high scores and the player profile.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use galaxian_core::collaborators::{SessionReporter, SessionSummary};

use crate::error::{ProfileError, ProfileResult};
use crate::highscores::HighScoreTable;
use crate::profile::PlayerProfile;

pub const HIGHSCORES_FILE: &str = "highscores.json";
pub const PLAYER_DATA_FILE: &str = "player_data.json";

/// Initials used for sessions reported without a signature.
pub const DEFAULT_INITIALS: &str = "AAA";

/// Reads and writes `highscores.json` and `player_data.json` in one directory.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    dir: PathBuf,
    initials: String,
}

impl JsonProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            initials: DEFAULT_INITIALS.to_string(),
        }
    }

    /// Sign high-score entries recorded by `report` with `initials`.
    pub fn with_initials(mut self, initials: &str) -> Self {
        self.initials = initials.to_string();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Missing file → empty table. Corrupt file → empty table and a warning.
    pub fn load_highscores(&self) -> ProfileResult<HighScoreTable> {
        let mut table: HighScoreTable = self.load_or_default(HIGHSCORES_FILE)?;
        table.normalize();
        Ok(table)
    }

    pub fn save_highscores(&self, table: &HighScoreTable) -> ProfileResult<()> {
        self.write_json(HIGHSCORES_FILE, table)
    }

    /// Missing or corrupt file → default profile.
    pub fn load_profile(&self) -> ProfileResult<PlayerProfile> {
        self.load_or_default(PLAYER_DATA_FILE)
    }

    pub fn save_profile(&self, profile: &PlayerProfile) -> ProfileResult<()> {
        self.write_json(PLAYER_DATA_FILE, profile)
    }

    /// Add a signed score to the table if it qualifies. Returns the rank.
    pub fn record_score(&self, initials: &str, score: u32) -> ProfileResult<Option<usize>> {
        let mut table = self.load_highscores()?;
        if !table.qualifies(score) {
            return Ok(None);
        }
        let rank = table.insert(initials, score);
        self.save_highscores(&table)?;
        Ok(rank)
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, file: &str) -> ProfileResult<T> {
        let path = self.path(file);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(ProfileError::Io(e)),
        };
        match serde_json::from_str(&json) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "corrupt data file, using defaults");
                Ok(T::default())
            }
        }
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> ProfileResult<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path(file), json)?;
        Ok(())
    }
}

impl SessionReporter for JsonProfileStore {
    type Error = ProfileError;

    /// Bank the session's coins and enter the score if it qualifies.
    fn report(&mut self, summary: &SessionSummary) -> Result<(), ProfileError> {
        let mut profile = self.load_profile()?;
        profile.credit(summary.currency);
        self.save_profile(&profile)?;

        let rank = self.record_score(&self.initials, summary.score)?;
        tracing::info!(
            score = summary.score,
            coins = profile.coins,
            rank = ?rank,
            outcome = ?summary.outcome,
            "session recorded"
        );
        Ok(())
    }
}
