//! Formatting utilities for terminal output

use crate::core::{GuessRow, Keyboard, LetterState};
use colored::Colorize;

/// QWERTY layout used for the keyboard hint line
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Format a scored row as colored letter tiles
#[must_use]
pub fn tile_row(row: &GuessRow) -> String {
    row.pairs()
        .map(|(letter, state)| {
            let cell = format!(" {} ", (letter as char).to_ascii_uppercase());
            match state {
                LetterState::Correct => cell.black().on_green().bold().to_string(),
                LetterState::Present => cell.black().on_yellow().bold().to_string(),
                LetterState::Absent => cell.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a scored row as a spoiler-free emoji string for sharing
#[must_use]
pub fn row_to_emoji(tiles: &[LetterState]) -> String {
    tiles
        .iter()
        .map(|state| match state {
            LetterState::Correct => '🟩',
            LetterState::Present => '🟨',
            LetterState::Absent => '⬜',
        })
        .collect()
}

/// Format the keyboard hint as colored QWERTY rows
#[must_use]
pub fn keyboard_lines(keyboard: &Keyboard) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys = row
                .bytes()
                .map(|letter| {
                    let key = (letter as char).to_ascii_uppercase().to_string();
                    match keyboard.status_of(letter) {
                        Some(LetterState::Correct) => key.black().on_green().bold().to_string(),
                        Some(LetterState::Present) => key.black().on_yellow().bold().to_string(),
                        Some(LetterState::Absent) => key.bright_black().to_string(),
                        None => key.white().to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}{}", " ".repeat(i), keys)
        })
        .collect()
}
