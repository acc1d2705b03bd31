//! Core game types
//!
//! The scoring rules and round state machine, with zero I/O. Everything
//! here is pure and synchronous; presentation delays (tile flips, reveal
//! staggering) belong to the callers.

mod keyboard;
mod round;
mod scoring;
mod word;

pub use keyboard::Keyboard;
pub use round::{DEFAULT_MAX_ATTEMPTS, GuessRow, Outcome, Round, SubmitError, Submission};
pub use scoring::{LetterState, TileState, score};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
