//! Round state machine
//!
//! Owns one playthrough: the secret, the submitted rows, the aggregated
//! keyboard, and the outcome. Every submission (CLI, TUI, Enter key or
//! auto-submit on the last keystroke) goes through [`Round::submit`]; there
//! is exactly one scoring and transition path, and it is synchronous.

use super::keyboard::Keyboard;
use super::scoring::{LetterState, TileState, score};
use super::word::Word;
use std::fmt;

/// Standard number of attempts per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// True once the round has been decided
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One submitted guess with its per-position scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    word: Word,
    tiles: Vec<LetterState>,
}

impl GuessRow {
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn tiles(&self) -> &[LetterState] {
        &self.tiles
    }

    /// Iterate `(letter, state)` pairs in position order
    pub fn pairs(&self) -> impl Iterator<Item = (u8, LetterState)> + '_ {
        self.word.bytes().iter().copied().zip(self.tiles.iter().copied())
    }

    /// True when every position scored Correct
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.tiles.iter().all(|&t| t == LetterState::Correct)
    }
}

/// Rejection reasons for a submission
///
/// Both are contract violations by the caller, not transient conditions;
/// the round's state is unchanged when either is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Guess length differs from the secret's
    LengthMismatch { expected: usize, got: usize },
    /// The round already reached Won or Lost
    RoundTerminated,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "Guess must be {expected} letters, got {got}")
            }
            Self::RoundTerminated => write!(f, "Round is already over"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Everything the caller needs to render one accepted submission
#[derive(Debug, Clone)]
pub struct Submission {
    pub row: GuessRow,
    pub keyboard: Keyboard,
    pub outcome: Outcome,
}

/// State of a single playthrough for one secret word
///
/// Created per round and discarded when a new round starts; terminal
/// outcomes are final. Performs no I/O and holds no randomness.
#[derive(Debug, Clone)]
pub struct Round {
    secret: Word,
    max_attempts: usize,
    rows: Vec<GuessRow>,
    keyboard: Keyboard,
    outcome: Outcome,
}

impl Round {
    /// Start a round for a validated secret
    #[must_use]
    pub fn new(secret: Word, max_attempts: usize) -> Self {
        Self {
            secret,
            max_attempts,
            rows: Vec::new(),
            keyboard: Keyboard::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Start a round with the standard six attempts
    #[must_use]
    pub fn with_default_attempts(secret: Word) -> Self {
        Self::new(secret, DEFAULT_MAX_ATTEMPTS)
    }

    /// Submit a guess
    ///
    /// Scores the guess, appends the row, merges the keyboard, and decides
    /// the outcome: all-Correct wins (checked before exhaustion, so a
    /// correct final guess still wins); otherwise running out of attempts
    /// loses; otherwise the round continues.
    ///
    /// # Errors
    /// `LengthMismatch` if the guess length differs from the secret's,
    /// `RoundTerminated` if the outcome is already decided. State is
    /// untouched on error.
    pub fn submit(&mut self, guess: &Word) -> Result<Submission, SubmitError> {
        if self.outcome.is_terminal() {
            return Err(SubmitError::RoundTerminated);
        }
        if guess.len() != self.secret.len() {
            return Err(SubmitError::LengthMismatch {
                expected: self.secret.len(),
                got: guess.len(),
            });
        }

        let row = GuessRow {
            word: guess.clone(),
            tiles: score(&self.secret, guess),
        };
        self.keyboard.merge(row.pairs());

        self.outcome = if row.is_winning() {
            Outcome::Won
        } else if self.rows.len() + 1 >= self.max_attempts {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
        self.rows.push(row.clone());

        Ok(Submission {
            row,
            keyboard: self.keyboard.clone(),
            outcome: self.outcome,
        })
    }

    /// Full board for rendering: submitted rows, then the in-progress row
    /// built from `pending`, then empty rows up to `max_attempts`
    #[must_use]
    pub fn board(&self, pending: &str) -> Vec<Vec<(char, TileState)>> {
        let len = self.secret.len();
        let mut board: Vec<Vec<(char, TileState)>> = self
            .rows
            .iter()
            .map(|row| {
                row.pairs()
                    .map(|(letter, state)| (letter as char, TileState::from(state)))
                    .collect()
            })
            .collect();

        if !self.outcome.is_terminal() && board.len() < self.max_attempts {
            let pending = pending.to_lowercase();
            let mut current: Vec<(char, TileState)> = pending
                .chars()
                .take(len)
                .map(|c| (c, TileState::Filled))
                .collect();
            current.resize(len, (' ', TileState::Empty));
            board.push(current);
        }

        while board.len() < self.max_attempts {
            board.push(vec![(' ', TileState::Empty); len]);
        }
        board
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Row length for this round
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.secret.len()
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Number of guesses submitted so far
    #[must_use]
    pub fn attempt(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn round(secret: &str) -> Round {
        Round::with_default_attempts(word(secret))
    }

    #[test]
    fn new_round_is_in_progress() {
        let r = round("merli");
        assert_eq!(r.outcome(), Outcome::InProgress);
        assert_eq!(r.attempt(), 0);
        assert!(r.rows().is_empty());
        assert!(r.keyboard().is_empty());
        assert_eq!(r.max_attempts(), 6);
    }

    #[test]
    fn exact_guess_wins_immediately() {
        let mut r = round("merli");
        let sub = r.submit(&word("merli")).unwrap();

        assert_eq!(sub.outcome, Outcome::Won);
        assert!(sub.row.is_winning());
        assert_eq!(r.outcome(), Outcome::Won);
        assert_eq!(r.attempt(), 1);
    }

    #[test]
    fn wrong_guess_continues() {
        let mut r = round("satay");
        let sub = r.submit(&word("laksa")).unwrap();

        assert_eq!(sub.outcome, Outcome::InProgress);
        assert_eq!(r.attempt(), 1);
    }

    #[test]
    fn six_wrong_guesses_lose_on_the_sixth() {
        let mut r = round("kiasu");
        for i in 1..=5 {
            let sub = r.submit(&word("laksa")).unwrap();
            assert_eq!(sub.outcome, Outcome::InProgress, "attempt {i} ended early");
        }
        let sub = r.submit(&word("laksa")).unwrap();
        assert_eq!(sub.outcome, Outcome::Lost);
        assert_eq!(r.attempt(), 6);
    }

    #[test]
    fn correct_final_guess_wins_not_loses() {
        let mut r = round("kiasu");
        for _ in 0..5 {
            r.submit(&word("laksa")).unwrap();
        }
        let sub = r.submit(&word("kiasu")).unwrap();
        assert_eq!(sub.outcome, Outcome::Won);
    }

    #[test]
    fn length_mismatch_rejected_without_state_change() {
        let mut r = round("satay");
        r.submit(&word("tasty")).unwrap();
        let before_rows = r.rows().to_vec();
        let before_kb = r.keyboard().clone();

        let err = r.submit(&word("mee")).unwrap_err();
        assert_eq!(err, SubmitError::LengthMismatch { expected: 5, got: 3 });
        assert_eq!(r.rows(), before_rows.as_slice());
        assert_eq!(r.keyboard(), &before_kb);
        assert_eq!(r.outcome(), Outcome::InProgress);
    }

    #[test]
    fn submission_after_win_rejected() {
        let mut r = round("merli");
        r.submit(&word("merli")).unwrap();

        let err = r.submit(&word("satay")).unwrap_err();
        assert_eq!(err, SubmitError::RoundTerminated);
        assert_eq!(r.attempt(), 1);
        assert_eq!(r.outcome(), Outcome::Won);
    }

    #[test]
    fn submission_after_loss_rejected() {
        let mut r = round("kiasu");
        for _ in 0..6 {
            r.submit(&word("laksa")).unwrap();
        }
        assert_eq!(r.outcome(), Outcome::Lost);
        assert_eq!(r.submit(&word("kiasu")).unwrap_err(), SubmitError::RoundTerminated);
        assert_eq!(r.attempt(), 6);
    }

    #[test]
    fn keyboard_upgrades_across_rows() {
        // Guess 1 finds A out of position; guess 2 places it. The key
        // must end Correct and never revert.
        let mut r = round("satay");
        let first = r.submit(&word("aglio")).unwrap();
        assert_eq!(first.keyboard.status_of(b'a'), Some(LetterState::Present));

        let second = r.submit(&word("sanny")).unwrap();
        assert_eq!(second.keyboard.status_of(b'a'), Some(LetterState::Correct));

        let third = r.submit(&word("plump")).unwrap();
        assert_eq!(third.keyboard.status_of(b'a'), Some(LetterState::Correct));
    }

    #[test]
    fn submission_reports_scored_row() {
        let mut r = round("satay");
        let sub = r.submit(&word("tasty")).unwrap();
        assert_eq!(
            sub.row.tiles(),
            &[
                LetterState::Present,
                LetterState::Correct,
                LetterState::Present,
                LetterState::Absent,
                LetterState::Correct,
            ]
        );
        let pairs: Vec<_> = sub.row.pairs().collect();
        assert_eq!(pairs[0], (b't', LetterState::Present));
        assert_eq!(pairs[1], (b'a', LetterState::Correct));
    }

    #[test]
    fn board_shows_scored_pending_and_empty_rows() {
        let mut r = round("satay");
        r.submit(&word("tasty")).unwrap();

        let board = r.board("LA");
        assert_eq!(board.len(), 6);
        // Scored row
        assert_eq!(board[0][0], ('t', TileState::Present));
        assert_eq!(board[0][1], ('a', TileState::Correct));
        // Pending row: two filled, three empty
        assert_eq!(board[1][0], ('l', TileState::Filled));
        assert_eq!(board[1][1], ('a', TileState::Filled));
        assert_eq!(board[1][2], (' ', TileState::Empty));
        // Untouched row
        assert!(board[5].iter().all(|&(_, s)| s == TileState::Empty));
    }

    #[test]
    fn board_has_no_pending_row_after_termination() {
        let mut r = round("merli");
        r.submit(&word("merli")).unwrap();

        let board = r.board("xx");
        assert_eq!(board.len(), 6);
        assert!(board[1].iter().all(|&(_, s)| s == TileState::Empty));
    }

    #[test]
    fn custom_attempt_budget() {
        let mut r = Round::new(word("mee"), 2);
        r.submit(&word("teh")).unwrap();
        let sub = r.submit(&word("teh")).unwrap();
        assert_eq!(sub.outcome, Outcome::Lost);
    }
}
