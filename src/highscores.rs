//! High score leaderboard
//!
//! Tracks the top 10 runs, persisted as JSON next to the settings.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::settings::SettingsError;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    /// Snake length when the run ended
    pub length: usize,
    /// Simulation ticks survived
    pub ticks: u64,
}

/// Leaderboard, sorted by score descending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Rank a score would achieve (1-indexed), None if it doesn't qualify
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Insert a run if it qualifies. Returns the rank achieved.
    pub fn add_score(&mut self, score: u32, length: usize, ticks: u64) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                score,
                length,
                ticks,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let scores: HighScores = serde_json::from_str(&json)?;
        log::info!("Loaded {} high scores", scores.entries.len());
        Ok(scores)
    }

    /// Load the leaderboard, starting fresh if it is missing or unreadable
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::info!("No high scores found, starting fresh ({})", e);
            Self::new()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, serde_json::to_string(self)?)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}
