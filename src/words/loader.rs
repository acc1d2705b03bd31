//! Custom catalog loading
//!
//! Loads word entries from a plain-text file, one entry per line:
//!
//! ```text
//! food|laksa|Spicy coconut noodle soup|🍜
//! places|bedok|Heartland town in the east|🏠
//! ```
//!
//! Blank lines and `#` comments are skipped.

use super::{Category, WordEntry, WordsError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load word entries from a catalog file
///
/// # Errors
///
/// Returns `WordsError::Io` if the file cannot be read,
/// `WordsError::BadLine` for a malformed line, and
/// `WordsError::InvalidWord` when an entry's word fails validation.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, WordsError> {
    let content = fs::read_to_string(path)?;
    parse_entries(&content)
}

fn parse_entries(content: &str) -> Result<Vec<WordEntry>, WordsError> {
    let mut entries = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.splitn(4, '|');
        let (Some(category), Some(word), Some(hint), Some(emoji)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(WordsError::BadLine {
                line_no: i + 1,
                content: trimmed.to_string(),
            });
        };

        let category: Category = category.trim().parse().map_err(|_| WordsError::BadLine {
            line_no: i + 1,
            content: trimmed.to_string(),
        })?;
        let word = Word::new(word.trim())
            .map_err(|e| WordsError::InvalidWord(word.trim().to_string(), e))?;

        entries.push(WordEntry {
            word,
            hint: hint.trim().to_string(),
            emoji: emoji.trim().to_string(),
            category,
        });
    }

    Ok(entries)
}
