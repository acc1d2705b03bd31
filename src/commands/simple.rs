//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI: type guesses, get colored tiles
//! and keyboard hints, chat with the Merlion for clues.

use crate::companion::{Companion, CompanionRequest, WordContext};
use crate::core::{Outcome, SubmitError, Word};
use crate::output::{print_round, print_round_summary};
use crate::session::GameSession;
use crate::words::{Category, WordSource};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple CLI game loop
///
/// # Errors
///
/// Returns an error if reading user input fails or no word is available
/// for the category.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(
    session: &mut GameSession,
    source: &dyn WordSource,
    companion: &mut dyn Companion,
    category: Category,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 GuessSG - guess Singapore in 6               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Playing as {} | Category: {} {}",
        session.display_name().bright_green(),
        category.icon(),
        category.label()
    );
    println!("\nType a guess and press Enter. Commands:");
    println!("  'hint'      show the basic hint");
    println!("  'ask <q>'   ask the Merlion a question");
    println!("  'new'       start a new round");
    println!("  'quit'      exit\n");

    loop {
        let entry = session
            .begin(source, category)
            .map_err(|e| e.to_string())?
            .entry
            .clone();
        let ctx = WordContext {
            word: entry.word.text().to_string(),
            category: entry.category,
            hint: entry.hint.clone(),
        };

        println!(
            "The word has {} letters. {} attempts. Good luck lah!",
            entry.word.len().to_string().bright_yellow().bold(),
            session
                .active()
                .map_or(6, |a| a.round.max_attempts())
        );

        // One round
        'round: loop {
            let attempt = session.active().map_or(0, |a| a.round.attempt());
            let max = session.active().map_or(6, |a| a.round.max_attempts());
            let input =
                get_user_input(&format!("Guess {}/{max}", attempt + 1))?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    println!("\n🔄 New round!\n");
                    break 'round;
                }
                "hint" | "h" => {
                    match companion.respond(&ctx, &CompanionRequest::Hint { user_message: None }) {
                        Ok(reply) => println!("🦁 {reply}\n"),
                        Err(err) => println!("{}\n", format!("🦁 ({err})").bright_black()),
                    }
                    continue;
                }
                "" => continue,
                _ => {}
            }

            if let Some(question) = input.strip_prefix("ask ") {
                let request = CompanionRequest::Hint {
                    user_message: Some(question.to_string()),
                };
                match companion.respond(&ctx, &request) {
                    Ok(reply) => println!("🦁 {reply}\n"),
                    Err(err) => println!("{}\n", format!("🦁 ({err})").bright_black()),
                }
                continue;
            }

            let guess = match Word::new(&input) {
                Ok(word) => word,
                Err(err) => {
                    println!("❌ {err}\n");
                    continue;
                }
            };

            let submission = match session.submit(&guess) {
                Ok(sub) => sub,
                Err(err @ SubmitError::LengthMismatch { .. }) => {
                    println!("❌ {err}\n");
                    continue;
                }
                Err(SubmitError::RoundTerminated) => break 'round,
            };

            if let Some(active) = session.active() {
                print_round(&active.round);
            }

            if submission.outcome.is_terminal() {
                let won = submission.outcome == Outcome::Won;
                let attempts = session.active().map_or(0, |a| a.round.attempt());

                if let Some(active) = session.active() {
                    print_round_summary(&active.round, &entry, session.streak());
                }
                for warning in session.take_warnings() {
                    println!("{}", format!("⚠ {warning}").bright_black());
                }

                let reaction = companion.respond(
                    &ctx,
                    &CompanionRequest::Reaction {
                        won,
                        guess_number: attempts,
                    },
                );
                if let Ok(reply) = reaction {
                    println!("\n🦁 {reply}");
                }

                offer_post_round(companion, &ctx)?;

                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        println!("\n🔄 New round!\n");
                        break 'round;
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Offer the post-round fun fact / explanation, skipping on any decline
fn offer_post_round(
    companion: &mut dyn Companion,
    ctx: &WordContext,
) -> Result<(), String> {
    if get_user_input("Fun fact? (yes/no)")?.to_lowercase().starts_with('y')
        && let Ok(fact) = companion.respond(ctx, &CompanionRequest::FunFact)
    {
        println!("\n🎯 {fact}\n");
    }
    if get_user_input("Learn more? (yes/no)")?.to_lowercase().starts_with('y')
        && let Ok(explanation) = companion.respond(ctx, &CompanionRequest::Explain)
    {
        println!("\n📚 {explanation}\n");
    }
    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
