//! Word catalog and word sources
//!
//! Supplies the secret word and its metadata at round start. The embedded
//! catalog is the default source; a custom catalog can be loaded from file.

mod embedded;
pub mod loader;

use crate::core::{Word, WordError};
use rand::prelude::IndexedRandom;
use std::fmt;

/// Word categories, each a separate daily pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Category {
    Food,
    Places,
    Singlish,
    All,
}

impl Category {
    /// All selectable categories
    pub const ALL: [Self; 4] = [Self::Food, Self::Places, Self::Singlish, Self::All];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Food => "Local Eats",
            Self::Places => "Landmarks",
            Self::Singlish => "Local Slang",
            Self::All => "Mix It Up",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Food => "Hawker favorites & dishes",
            Self::Places => "Iconic spots to visit",
            Self::Singlish => "Uniquely Singaporean lingo",
            Self::All => "A bit of everything!",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Food => "🍜",
            Self::Places => "🏙️",
            Self::Singlish => "🗣️",
            Self::All => "🎲",
        }
    }

    /// Offset so different categories land on different daily words
    fn daily_offset(self) -> usize {
        match self {
            Self::Food => 0,
            Self::Places => 3,
            Self::Singlish => 5,
            Self::All => 7,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Food => "food",
            Self::Places => "places",
            Self::Singlish => "singlish",
            Self::All => "all",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "places" => Ok(Self::Places),
            "singlish" => Ok(Self::Singlish),
            "all" => Ok(Self::All),
            other => Err(format!("Unknown category: {other}")),
        }
    }
}

/// A playable word with its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: Word,
    pub hint: String,
    pub emoji: String,
    pub category: Category,
}

/// Error type for word sourcing
#[derive(Debug)]
pub enum WordsError {
    /// No entries available for the requested category
    EmptyCatalog(Category),
    /// A catalog entry failed word validation
    InvalidWord(String, WordError),
    /// Custom catalog file problems
    Io(std::io::Error),
    /// A custom catalog line did not parse
    BadLine { line_no: usize, content: String },
}

impl fmt::Display for WordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog(category) => {
                write!(f, "No words available for category '{category}'")
            }
            Self::InvalidWord(word, err) => write!(f, "Invalid catalog word '{word}': {err}"),
            Self::Io(err) => write!(f, "Failed to read catalog: {err}"),
            Self::BadLine { line_no, content } => {
                write!(f, "Bad catalog line {line_no}: '{content}'")
            }
        }
    }
}

impl std::error::Error for WordsError {}

impl From<std::io::Error> for WordsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Supplies the secret word at round start
///
/// The core never validates what a source returns beyond using the word's
/// length; sources own freshness (daily rotation) and selection policy.
pub trait WordSource {
    /// Fetch a word for the category
    ///
    /// # Errors
    /// Returns `WordsError` if the source has no word for the category.
    fn fetch(&self, category: Category) -> Result<WordEntry, WordsError>;
}

/// How `CatalogSource` picks from a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickMode {
    /// Deterministic word of the day, keyed on the UTC day number
    #[default]
    Daily,
    /// Uniform random pick, for replay
    Random,
}

/// Word source backed by an in-memory catalog
pub struct CatalogSource {
    entries: Vec<WordEntry>,
    mode: PickMode,
}

impl CatalogSource {
    /// The embedded Singapore catalog
    ///
    /// # Panics
    /// Panics only if an embedded catalog entry is invalid, which the
    /// catalog tests rule out.
    #[must_use]
    pub fn embedded(mode: PickMode) -> Self {
        let convert = |pool: &[(&str, &str, &str)], category| {
            pool.iter()
                .map(move |&(word, hint, emoji)| WordEntry {
                    word: Word::new(word).expect("embedded catalog words are valid"),
                    hint: hint.to_string(),
                    emoji: emoji.to_string(),
                    category,
                })
                .collect::<Vec<_>>()
        };

        let mut entries = convert(embedded::FOOD, Category::Food);
        entries.extend(convert(embedded::PLACES, Category::Places));
        entries.extend(convert(embedded::SINGLISH, Category::Singlish));
        Self { entries, mode }
    }

    /// A catalog from explicit entries (custom files, tests)
    #[must_use]
    pub fn from_entries(entries: Vec<WordEntry>, mode: PickMode) -> Self {
        Self { entries, mode }
    }

    fn pool(&self, category: Category) -> Vec<&WordEntry> {
        self.entries
            .iter()
            .filter(|e| category == Category::All || e.category == category)
            .collect()
    }

    /// Deterministic pick for a given UTC day number
    fn pick_daily(pool: &[&WordEntry], category: Category, day: i64) -> WordEntry {
        let index = (day.unsigned_abs() as usize + category.daily_offset()) % pool.len();
        pool[index].clone()
    }
}

impl WordSource for CatalogSource {
    fn fetch(&self, category: Category) -> Result<WordEntry, WordsError> {
        let pool = self.pool(category);
        if pool.is_empty() {
            return Err(WordsError::EmptyCatalog(category));
        }

        Ok(match self.mode {
            PickMode::Daily => {
                let day = chrono::Utc::now().timestamp().div_euclid(86_400);
                Self::pick_daily(&pool, category, day)
            }
            PickMode::Random => {
                let entry = pool
                    .choose(&mut rand::rng())
                    .expect("pool checked non-empty");
                (*entry).clone()
            }
        })
    }
}
