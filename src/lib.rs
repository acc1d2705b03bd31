//! GuessSG
//!
//! A Singapore-themed word guessing game: six tries to find a local food,
//! landmark, or Singlish word, with a Merlion companion for hints.
//!
//! # Quick Start
//!
//! ```rust
//! use guess_sg::core::{Round, Word, Outcome};
//!
//! let secret = Word::new("laksa").unwrap();
//! let mut round = Round::with_default_attempts(secret);
//!
//! let guess = Word::new("satay").unwrap();
//! let submission = round.submit(&guess).unwrap();
//! assert_eq!(submission.outcome, Outcome::InProgress);
//! ```

// Core game types: words, scoring, keyboard, rounds
pub mod core;

// Word catalog and sources
pub mod words;

// Session orchestration, stats, persistence
pub mod session;

// The Merlion hint companion
pub mod companion;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
