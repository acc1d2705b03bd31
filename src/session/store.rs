//! Local JSON persistence
//!
//! Players, game results, and local stats live as JSON files under a data
//! directory (`players.json`, `results.json`, `stats.json`). There is no
//! backend; the leaderboard aggregates over these files.

use super::stats::LocalStats;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A registered player profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

/// One finished round, as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub player_id: String,
    pub word: String,
    pub attempts: usize,
    pub won: bool,
    pub played_at: DateTime<Utc>,
}

/// Error type for the store
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// Registration with a nickname that already exists
    NicknameTaken(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Store I/O error: {err}"),
            Self::Serde(err) => write!(f, "Store data error: {err}"),
            Self::NicknameTaken(nickname) => {
                write!(f, "Nickname '{nickname}' is already taken")
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err)
    }
}

/// JSON-file-backed store under one data directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open (creating if needed) the data directory
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
        })
    }

    fn read_list<T: for<'de> Deserialize<'de>>(&self, file: &str) -> Result<Vec<T>, StoreError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        let path = self.dir.join(file);
        let content = serde_json::to_string_pretty(value)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// All registered players
    ///
    /// # Errors
    /// Returns `StoreError` on I/O or parse failure.
    pub fn players(&self) -> Result<Vec<Player>, StoreError> {
        self.read_list("players.json")
    }

    /// Find a player by nickname, case-insensitively
    ///
    /// # Errors
    /// Returns `StoreError` on I/O or parse failure.
    pub fn find_player(&self, nickname: &str) -> Result<Option<Player>, StoreError> {
        Ok(self
            .players()?
            .into_iter()
            .find(|p| p.nickname.eq_ignore_ascii_case(nickname)))
    }

    /// Register a new player
    ///
    /// # Errors
    /// `StoreError::NicknameTaken` if the nickname exists (case-insensitive),
    /// otherwise I/O and parse errors.
    pub fn register_player(&self, nickname: &str) -> Result<Player, StoreError> {
        let mut players = self.players()?;
        if players
            .iter()
            .any(|p| p.nickname.eq_ignore_ascii_case(nickname))
        {
            return Err(StoreError::NicknameTaken(nickname.to_string()));
        }

        let player = Player {
            id: format!("{:032x}", rand::rng().random::<u128>()),
            nickname: nickname.to_string(),
            created_at: Utc::now(),
        };
        players.push(player.clone());
        self.write_json("players.json", &players)?;
        Ok(player)
    }

    /// All persisted game results
    ///
    /// # Errors
    /// Returns `StoreError` on I/O or parse failure.
    pub fn results(&self) -> Result<Vec<GameResult>, StoreError> {
        self.read_list("results.json")
    }

    /// Append one round result
    ///
    /// # Errors
    /// Returns `StoreError` on I/O or parse failure.
    pub fn record_result(&self, result: &GameResult) -> Result<(), StoreError> {
        let mut results = self.results()?;
        results.push(result.clone());
        self.write_json("results.json", &results)
    }

    /// Load local stats, defaulting to zeroes when absent
    ///
    /// # Errors
    /// Returns `StoreError` on I/O or parse failure.
    pub fn load_stats(&self) -> Result<LocalStats, StoreError> {
        let path = self.dir.join("stats.json");
        if !path.exists() {
            return Ok(LocalStats::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save local stats
    ///
    /// # Errors
    /// Returns `StoreError` on I/O or serialization failure.
    pub fn save_stats(&self, stats: &LocalStats) -> Result<(), StoreError> {
        self.write_json("stats.json", stats)
    }
}
