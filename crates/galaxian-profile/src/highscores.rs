use serde::{Deserialize, Serialize};

use galaxian_core::constants::HIGH_SCORE_CAPACITY;

/// Number of letters in a high-score signature.
pub const INITIALS_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub initials: String,
    pub score: u32,
}

/// Top scores, highest first. Stored on disk as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScoreTable {
    entries: Vec<HighScoreEntry>,
}

impl HighScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `score` would earn a place: the table has room, or the score
    /// beats the lowest entry.
    pub fn qualifies(&self, score: u32) -> bool {
        match self.entries.last() {
            None => true,
            Some(_) if self.entries.len() < HIGH_SCORE_CAPACITY => true,
            Some(lowest) => score > lowest.score,
        }
    }

    /// Insert a score and keep the table sorted and capped. Ties rank below
    /// existing entries. Returns the 0-based rank, or `None` if the score
    /// fell off the end.
    pub fn insert(&mut self, initials: &str, score: u32) -> Option<usize> {
        let rank = self.entries.partition_point(|e| e.score >= score);
        if rank >= HIGH_SCORE_CAPACITY {
            return None;
        }
        self.entries.insert(
            rank,
            HighScoreEntry {
                initials: normalize_initials(initials),
                score,
            },
        );
        self.entries.truncate(HIGH_SCORE_CAPACITY);
        Some(rank)
    }

    /// Re-establish ordering and capacity after loading hand-edited data.
    pub fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(HIGH_SCORE_CAPACITY);
    }
}

/// Uppercase ASCII letters, padded with 'A' or cut to three.
pub fn normalize_initials(initials: &str) -> String {
    let mut letters: String = initials
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .take(INITIALS_LEN)
        .collect();
    while letters.len() < INITIALS_LEN {
        letters.push('A');
    }
    letters
}
