//! Guess scoring
//!
//! Scores a submitted guess against the secret with the standard two-pass
//! rule: exact matches are resolved first and consume their letter from the
//! secret's pool, then the remaining positions are checked left to right
//! against what is left of the pool. This caps Present credits for repeated
//! letters at the secret's actual occurrence count.

use super::Word;

/// Scoring outcome for one guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Right letter, right position
    Correct,
    /// Letter occurs in the secret, wrong position
    Present,
    /// Letter not in the secret (or all its occurrences already credited)
    Absent,
}

/// Visual state of one board cell
///
/// Extends [`LetterState`] with the two construction states a row passes
/// through before submission. A submitted row only ever holds the three
/// scored states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Empty,
    Filled,
    Correct,
    Present,
    Absent,
}

impl From<LetterState> for TileState {
    fn from(state: LetterState) -> Self {
        match state {
            LetterState::Correct => Self::Correct,
            LetterState::Present => Self::Present,
            LetterState::Absent => Self::Absent,
        }
    }
}

/// Score `guess` against `secret`, one state per position
///
/// Both words must have the same length; [`crate::core::Round`] rejects
/// mismatched submissions before calling.
///
/// # Algorithm
/// 1. Build a count map of the secret's letters.
/// 2. First pass: mark exact matches Correct and decrement their count.
/// 3. Second pass, left to right: remaining positions become Present while
///    their letter's count is positive (decrementing it), Absent otherwise.
///
/// # Examples
/// ```
/// use guess_sg::core::{score, LetterState, Word};
///
/// let secret = Word::new("satay").unwrap();
/// let guess = Word::new("tasty").unwrap();
/// assert_eq!(
///     score(&secret, &guess),
///     vec![
///         LetterState::Present, // T
///         LetterState::Correct, // A
///         LetterState::Present, // S
///         LetterState::Absent,  // second T exceeds the secret's count
///         LetterState::Correct, // Y
///     ]
/// );
/// ```
#[must_use]
pub fn score(secret: &Word, guess: &Word) -> Vec<LetterState> {
    debug_assert_eq!(secret.len(), guess.len(), "caller must reject mismatched lengths");

    let len = secret.len();
    let mut result = vec![LetterState::Absent; len];
    let mut remaining = secret.char_counts();

    // First pass: exact matches, fully resolved before any Present decision
    for i in 0..len {
        if guess.letter_at(i) == secret.letter_at(i) {
            result[i] = LetterState::Correct;
            if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: Present while the letter's pool lasts, left to right
    for i in 0..len {
        if result[i] == LetterState::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&guess.letter_at(i))
            && *count > 0
        {
            result[i] = LetterState::Present;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterState::{Absent, Correct, Present};

    fn run(secret: &str, guess: &str) -> Vec<LetterState> {
        score(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn all_correct_on_exact_match() {
        assert_eq!(run("merli", "merli"), vec![Correct; 5]);
        assert_eq!(run("kopitiam", "KOPITIAM"), vec![Correct; 8]);
    }

    #[test]
    fn all_absent_when_disjoint() {
        assert_eq!(run("laksa", "north"), vec![Absent; 5]);
    }

    #[test]
    fn satay_vs_tasty_canonical_repeated_letters() {
        // Secret SATAY (one S, two A, one T, one Y), guess TASTY:
        // T present (pool T=1), A correct, S present, second T absent
        // (pool exhausted), Y correct.
        assert_eq!(run("satay", "tasty"), vec![Present, Correct, Present, Absent, Correct]);
    }

    #[test]
    fn level_vs_elves_two_pass() {
        // Exact matches V and the second E resolve first; then the leading
        // E and L draw from what is left of the pool, S is absent.
        assert_eq!(run("level", "elves"), vec![Present, Present, Correct, Correct, Absent]);
    }

    #[test]
    fn excess_duplicates_in_guess_go_absent() {
        // Secret has a single A; only the leftmost non-exact A is credited.
        assert_eq!(run("char", "aata"), vec![Present, Absent, Absent, Absent]);
    }

    #[test]
    fn exact_match_consumes_pool_before_present() {
        // Secret ROTI, guess OTTO: the exact T at position 2 is resolved
        // first, so the earlier non-exact T gets no credit.
        assert_eq!(run("roti", "otto"), vec![Present, Absent, Correct, Absent]);
    }

    #[test]
    fn duplicates_credited_left_to_right() {
        // Secret ATAP, guess PAPA: single P in the pool goes to the
        // leftmost P, both As fit the pool of two.
        assert_eq!(run("atap", "papa"), vec![Present, Present, Absent, Present]);
    }

    #[test]
    fn multiset_bound_holds() {
        // Correct + Present for any letter never exceeds its count in the
        // secret, across a spread of repeated-letter pairs.
        let cases = [
            ("level", "elves"),
            ("satay", "tasty"),
            ("kiasu", "kakis"),
            ("atap", "papa"),
            ("kopitiam", "mataitai"),
        ];
        for (secret, guess) in cases {
            let secret = Word::new(secret).unwrap();
            let guess = Word::new(guess).unwrap();
            let states = score(&secret, &guess);
            let counts = secret.char_counts();

            for (&letter, &limit) in &counts {
                let credited = states
                    .iter()
                    .zip(guess.bytes())
                    .filter(|&(s, &g)| g == letter && *s != Absent)
                    .count();
                assert!(
                    credited <= usize::from(limit),
                    "{letter} over-credited for {secret}/{guess}"
                );
            }
        }
    }

    #[test]
    fn tile_state_from_letter_state() {
        assert_eq!(TileState::from(Correct), TileState::Correct);
        assert_eq!(TileState::from(Present), TileState::Present);
        assert_eq!(TileState::from(Absent), TileState::Absent);
    }
}
