//! Game session orchestration
//!
//! [`GameSession`] sits between the surfaces (CLI/TUI) and the core: it
//! starts rounds from a word source, routes every guess through the single
//! `Round::submit` path, and finalizes terminal rounds exactly once:
//! recording stats and, for registered players, persisting the result.
//! Store failures degrade to warnings; they never block play.

pub mod leaderboard;
pub mod stats;
pub mod store;

pub use leaderboard::{LeaderboardEntry, SortKey};
pub use stats::LocalStats;
pub use store::{GameResult, JsonStore, Player, StoreError};

use crate::core::{Outcome, Round, SubmitError, Submission, Word};
use crate::words::{Category, WordEntry, WordSource, WordsError};
use chrono::Utc;

/// One in-flight round with its word metadata
#[derive(Debug, Clone)]
pub struct ActiveRound {
    pub round: Round,
    pub entry: WordEntry,
}

/// Session state for one player across rounds
pub struct GameSession {
    store: Option<JsonStore>,
    player: Option<Player>,
    stats: LocalStats,
    active: Option<ActiveRound>,
    warnings: Vec<String>,
}

impl GameSession {
    /// Create a session; loads stats from the store when one is given
    #[must_use]
    pub fn new(store: Option<JsonStore>, player: Option<Player>) -> Self {
        let mut warnings = Vec::new();
        let stats = match store.as_ref().map(JsonStore::load_stats) {
            Some(Ok(stats)) => stats,
            Some(Err(err)) => {
                warnings.push(format!("Could not load stats: {err}"));
                LocalStats::default()
            }
            None => LocalStats::default(),
        };

        Self {
            store,
            player,
            stats,
            active: None,
            warnings,
        }
    }

    /// Start a new round, replacing any previous one
    ///
    /// # Errors
    /// Returns `WordsError` if the source has no word for the category.
    pub fn begin(
        &mut self,
        source: &dyn WordSource,
        category: Category,
    ) -> Result<&ActiveRound, WordsError> {
        let entry = source.fetch(category)?;
        let round = Round::with_default_attempts(entry.word.clone());
        Ok(self.active.insert(ActiveRound { round, entry }))
    }

    /// Submit a guess against the active round
    ///
    /// When the submission decides the round, the result is finalized here:
    /// stats updated, result persisted for registered players, stats saved.
    ///
    /// # Errors
    /// `SubmitError` from the round; `RoundTerminated` also when no round
    /// has been started.
    pub fn submit(&mut self, guess: &Word) -> Result<Submission, SubmitError> {
        let active = self.active.as_mut().ok_or(SubmitError::RoundTerminated)?;
        let submission = active.round.submit(guess)?;

        if submission.outcome.is_terminal() {
            let won = submission.outcome == Outcome::Won;
            let attempts = active.round.attempt();
            let word = active.entry.word.text().to_string();
            self.finalize(won, attempts, &word);
        }
        Ok(submission)
    }

    fn finalize(&mut self, won: bool, attempts: usize, word: &str) {
        self.stats.record(won);

        if let Some(store) = &self.store {
            if let Some(player) = &self.player {
                let result = GameResult {
                    player_id: player.id.clone(),
                    word: word.to_string(),
                    attempts,
                    won,
                    played_at: Utc::now(),
                };
                if let Err(err) = store.record_result(&result) {
                    self.warnings.push(format!("Could not save result: {err}"));
                }
            }
            if let Err(err) = store.save_stats(&self.stats) {
                self.warnings.push(format!("Could not save stats: {err}"));
            }
        }
    }

    /// The active round, if one has started
    #[must_use]
    pub fn active(&self) -> Option<&ActiveRound> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> LocalStats {
        self.stats
    }

    /// Current win streak
    #[must_use]
    pub fn streak(&self) -> usize {
        self.stats.streak
    }

    /// Display name: nickname or Guest
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.player.as_ref().map_or("Guest", |p| p.nickname.as_str())
    }

    #[must_use]
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Drain accumulated non-fatal warnings (store failures)
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }
}
