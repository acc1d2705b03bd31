//! Keyboard status aggregation
//!
//! Folds scored rows into one best-known state per letter, used to color
//! the on-screen key hints. A letter's state only ever improves: Correct
//! beats Present beats Absent beats unset.

use super::scoring::LetterState;
use rustc_hash::FxHashMap;

/// Best-known scoring state for each letter across a round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    status: FxHashMap<u8, LetterState>,
}

/// Precedence used when merging: higher never yields to lower
const fn rank(state: LetterState) -> u8 {
    match state {
        LetterState::Correct => 3,
        LetterState::Present => 2,
        LetterState::Absent => 1,
    }
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one scored row into the aggregate
    ///
    /// Idempotent: merging the same row twice is a no-op the second time.
    /// Monotonic: a letter's state never regresses.
    pub fn merge(&mut self, row: impl IntoIterator<Item = (u8, LetterState)>) {
        for (letter, candidate) in row {
            match self.status.get(&letter) {
                Some(&existing) if rank(existing) >= rank(candidate) => {}
                _ => {
                    self.status.insert(letter, candidate);
                }
            }
        }
    }

    /// Best-known state for a letter, `None` if not yet guessed
    #[must_use]
    pub fn status_of(&self, letter: u8) -> Option<LetterState> {
        self.status.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Iterate over all letters with a known state
    pub fn iter(&self) -> impl Iterator<Item = (u8, LetterState)> + '_ {
        self.status.iter().map(|(&l, &s)| (l, s))
    }

    /// Number of letters with a known state
    #[must_use]
    pub fn len(&self) -> usize {
        self.status.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterState::{Absent, Correct, Present};

    #[test]
    fn unset_letter_takes_any_state() {
        let mut kb = Keyboard::new();
        kb.merge([(b'a', Absent), (b'b', Present), (b'c', Correct)]);

        assert_eq!(kb.status_of(b'a'), Some(Absent));
        assert_eq!(kb.status_of(b'b'), Some(Present));
        assert_eq!(kb.status_of(b'c'), Some(Correct));
        assert_eq!(kb.status_of(b'z'), None);
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut kb = Keyboard::new();
        kb.merge([(b'a', Present)]);
        kb.merge([(b'a', Correct)]);
        assert_eq!(kb.status_of(b'a'), Some(Correct));
    }

    #[test]
    fn correct_never_downgrades() {
        let mut kb = Keyboard::new();
        kb.merge([(b'a', Correct)]);
        kb.merge([(b'a', Present)]);
        kb.merge([(b'a', Absent)]);
        assert_eq!(kb.status_of(b'a'), Some(Correct));
    }

    #[test]
    fn present_never_downgrades_to_absent() {
        let mut kb = Keyboard::new();
        kb.merge([(b'e', Present)]);
        // A later row where the same letter's duplicates score Absent
        kb.merge([(b'e', Absent)]);
        assert_eq!(kb.status_of(b'e'), Some(Present));
    }

    #[test]
    fn merge_is_idempotent() {
        let row = [(b's', Present), (b'a', Correct), (b't', Absent)];

        let mut once = Keyboard::new();
        once.merge(row);

        let mut twice = Keyboard::new();
        twice.merge(row);
        twice.merge(row);

        assert_eq!(once, twice);
    }

    #[test]
    fn upgrade_within_a_single_row() {
        // The same letter can appear twice in one row with different
        // states; the better one must stick regardless of order.
        let mut kb = Keyboard::new();
        kb.merge([(b'a', Absent), (b'a', Correct), (b'a', Present)]);
        assert_eq!(kb.status_of(b'a'), Some(Correct));
    }

    #[test]
    fn status_of_is_case_insensitive() {
        let mut kb = Keyboard::new();
        kb.merge([(b'k', Correct)]);
        assert_eq!(kb.status_of(b'K'), Some(Correct));
    }
}
