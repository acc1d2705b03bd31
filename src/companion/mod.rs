//! Merlion companion
//!
//! The hint/commentary sidekick. The game only ever talks to the
//! [`Companion`] trait; replies are cosmetic free text and never feed back
//! into scoring or round outcomes. The built-in [`Merlion`] answers from a
//! script so the game works offline; a networked backend would implement
//! the same trait.

use crate::words::Category;
use rand::prelude::IndexedRandom;
use std::fmt;

/// What the player is asking the companion for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionRequest {
    /// A nudge toward the word, optionally answering a free-text question
    Hint { user_message: Option<String> },
    /// A short cultural explanation of the word after the round
    Explain,
    /// A bite-sized fun fact after the round
    FunFact,
    /// A reaction to the round result
    Reaction { won: bool, guess_number: usize },
}

/// Round context the companion may draw on
#[derive(Debug, Clone)]
pub struct WordContext {
    pub word: String,
    pub category: Category,
    pub hint: String,
}

/// Error type for companion backends
#[derive(Debug)]
pub enum CompanionError {
    /// The backend could not produce a reply
    Unavailable(String),
}

impl fmt::Display for CompanionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "Companion unavailable: {reason}"),
        }
    }
}

impl std::error::Error for CompanionError {}

/// A commentary backend
///
/// Implementations must never reveal the secret word in a `Hint` reply.
pub trait Companion {
    /// Produce a reply for the request
    ///
    /// # Errors
    /// Returns `CompanionError` if the backend cannot answer; callers must
    /// degrade gracefully and keep the round playable.
    fn respond(
        &mut self,
        ctx: &WordContext,
        request: &CompanionRequest,
    ) -> Result<String, CompanionError>;
}

/// Offline scripted Merlion with light Singlish flavour
#[derive(Debug, Default)]
pub struct Merlion;

const HINT_OPENERS: &[&str] = &[
    "Okay lah, one more clue:",
    "Don't kancheong, listen:",
    "Can, I help you:",
    "Aiyah, since you asked nicely:",
];

const WIN_LINES: &[&str] = &[
    "Shiok ah! You got it!",
    "Wah, steady lah!",
    "Power! Well played!",
];

const LOSS_LINES: &[&str] = &[
    "Jialat! Next round sure can.",
    "Aiyoh, so close. Try again lah!",
    "Never mind, tomorrow got new word.",
];

const FIRST_TRY_LINE: &str = "One try only?! Confirm plus chop, you damn zai!";

impl Merlion {
    fn category_flavor(category: Category) -> &'static str {
        match category {
            Category::Food => "Makan time thinking helps.",
            Category::Places => "Think of somewhere you can actually go.",
            Category::Singlish => "You hear this one at the kopitiam all the time.",
            Category::All => "Could be anything Singapore, keep an open mind.",
        }
    }

    fn pick<'a>(lines: &[&'a str]) -> &'a str {
        lines
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(lines[0])
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Companion for Merlion {
    fn respond(
        &mut self,
        ctx: &WordContext,
        request: &CompanionRequest,
    ) -> Result<String, CompanionError> {
        let reply = match request {
            CompanionRequest::Hint { user_message } => {
                let opener = Self::pick(HINT_OPENERS);
                let flavor = Self::category_flavor(ctx.category);
                match user_message {
                    Some(question) if !question.trim().is_empty() => {
                        format!(
                            "{opener} you asked \"{}\". I cannot say the word, but: {}. {flavor}",
                            question.trim(),
                            ctx.hint
                        )
                    }
                    _ => format!("{opener} {}. {flavor}", ctx.hint),
                }
            }
            CompanionRequest::Explain => format!(
                "{} is {}. Ask any local about it: it's part of the {} side of Singapore.",
                ctx.word.to_uppercase(),
                lowercase_first(&ctx.hint),
                ctx.category.label()
            ),
            CompanionRequest::FunFact => format!(
                "Did you know? {}: {}. Say it like a local and nobody will blink.",
                ctx.word.to_uppercase(),
                lowercase_first(&ctx.hint)
            ),
            CompanionRequest::Reaction { won, guess_number } => {
                if *won {
                    if *guess_number == 1 {
                        FIRST_TRY_LINE.to_string()
                    } else {
                        format!("{} Got it in {guess_number} tries.", Self::pick(WIN_LINES))
                    }
                } else {
                    Self::pick(LOSS_LINES).to_string()
                }
            }
        };

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> WordContext {
        WordContext {
            word: "laksa".to_string(),
            category: Category::Food,
            hint: "Spicy coconut noodle soup".to_string(),
        }
    }

    #[test]
    fn hint_never_contains_the_word() {
        let mut merlion = Merlion;
        for _ in 0..20 {
            let reply = merlion
                .respond(&ctx(), &CompanionRequest::Hint { user_message: None })
                .unwrap();
            assert!(!reply.to_lowercase().contains("laksa"), "leaked word: {reply}");
        }
    }

    #[test]
    fn hint_answers_a_question() {
        let mut merlion = Merlion;
        let reply = merlion
            .respond(
                &ctx(),
                &CompanionRequest::Hint {
                    user_message: Some("is it spicy?".to_string()),
                },
            )
            .unwrap();
        assert!(reply.contains("is it spicy?"));
        assert!(!reply.to_lowercase().contains("laksa"));
    }

    #[test]
    fn explain_and_funfact_name_the_word() {
        let mut merlion = Merlion;
        let explain = merlion.respond(&ctx(), &CompanionRequest::Explain).unwrap();
        let fact = merlion.respond(&ctx(), &CompanionRequest::FunFact).unwrap();
        assert!(explain.contains("LAKSA"));
        assert!(fact.contains("LAKSA"));
    }

    #[test]
    fn reaction_matches_result() {
        let mut merlion = Merlion;
        let win = merlion
            .respond(&ctx(), &CompanionRequest::Reaction { won: true, guess_number: 3 })
            .unwrap();
        assert!(win.contains("3 tries"));

        let first = merlion
            .respond(&ctx(), &CompanionRequest::Reaction { won: true, guess_number: 1 })
            .unwrap();
        assert_eq!(first, FIRST_TRY_LINE);

        let loss = merlion
            .respond(&ctx(), &CompanionRequest::Reaction { won: false, guess_number: 6 })
            .unwrap();
        assert!(!loss.is_empty());
    }
}
