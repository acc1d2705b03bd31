//! Display functions for command results

use super::formatters::{keyboard_lines, row_to_emoji, tile_row};
use crate::core::{Outcome, Round};
use crate::session::{LeaderboardEntry, LocalStats, leaderboard};
use crate::words::WordEntry;
use colored::Colorize;

/// Print the full round so far: scored rows and the keyboard hint
pub fn print_round(round: &Round) {
    println!();
    for row in round.rows() {
        println!("  {}", tile_row(row));
    }
    println!();
    for line in keyboard_lines(round.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-round banner with the share grid
pub fn print_round_summary(round: &Round, entry: &WordEntry, streak: usize) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match round.outcome() {
        Outcome::Won => {
            println!(
                "{} {}",
                entry.emoji,
                format!("Shiok ah! Got it in {} tries", round.attempt())
                    .bright_green()
                    .bold()
            );
            if streak > 1 {
                println!("{}", format!("🔥 {streak} streak!").bright_yellow());
            }
        }
        Outcome::Lost => {
            println!("{}", "😢 Jialat! The word was:".bright_red().bold());
        }
        Outcome::InProgress => {}
    }
    println!(
        "\n  {}: {}",
        entry.word.text().to_uppercase().bright_white().bold(),
        entry.hint.bright_black()
    );

    println!("\n  Share grid:");
    for row in round.rows() {
        println!("  {}", row_to_emoji(row.tiles()));
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print local player stats
pub fn print_stats(stats: &LocalStats) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    println!(" {} ", "YOUR STATS".bright_cyan().bold());
    println!("{}", "═".repeat(40).bright_cyan());
    println!("   Played:      {}", stats.played);
    println!(
        "   Win rate:    {}",
        format!("{}%", stats.win_percent()).bright_yellow()
    );
    println!("   Streak:      {}", stats.streak);
    println!("   Max streak:  {}", stats.max_streak);
}

/// Print the leaderboard table
pub fn print_leaderboard(entries: &[LeaderboardEntry], current_player: Option<&str>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(" {} ", "🏆 LEADERBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).bright_cyan());

    if entries.is_empty() {
        println!("\n   No players yet. Be the first!");
        return;
    }

    println!(
        "\n   {:<4} {:<16} {:>6} {:>6} {:>7} {:>6}",
        "", "Player", "Games", "Wins", "Rate", "Avg"
    );
    for (i, entry) in entries.iter().enumerate() {
        let you = current_player
            .is_some_and(|name| name.eq_ignore_ascii_case(&entry.nickname));
        let name = if you {
            format!("{} (you)", entry.nickname).bright_green().to_string()
        } else {
            entry.nickname.clone()
        };
        let avg = if entry.avg_attempts > 0.0 {
            format!("{:.1}", entry.avg_attempts)
        } else {
            "-".to_string()
        };
        println!(
            "   {:<4} {name:<16} {:>6} {:>6} {:>6}% {avg:>6}",
            leaderboard::medal(i),
            entry.games_played,
            entry.games_won,
            entry.win_rate,
        );
    }
}
