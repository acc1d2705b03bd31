//! GuessSG - CLI
//!
//! Singapore-themed word guessing with TUI and CLI modes: daily words from
//! local food, landmarks, and Singlish, plus stats and a leaderboard.

use anyhow::Result;
use clap::{Parser, Subcommand};
use guess_sg::{
    commands::{run_leaderboard, run_simple, run_stats},
    companion::Merlion,
    interactive::{App, run_tui},
    session::{GameSession, JsonStore, Player, SortKey},
    words::{CatalogSource, Category, PickMode, loader},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "guess-sg",
    about = "Guess Singapore in 6 tries - local food, landmarks, and Singlish",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Category: food, places, singlish, all
    #[arg(short, long, global = true, default_value = "all")]
    category: Category,

    /// Nickname to play under (registers on first use)
    #[arg(short, long, global = true)]
    nickname: Option<String>,

    /// Play as a guest; results are not written to the leaderboard
    #[arg(long, global = true)]
    guest: bool,

    /// Pick a random word instead of the word of the day
    #[arg(short, long, global = true)]
    random_word: bool,

    /// Custom catalog file (lines of 'category|word|hint|emoji')
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Directory for saved stats, players, and results
    #[arg(long, global = true, default_value = ".guess_sg")]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain text, no TUI)
    Simple,

    /// Show your local stats and streak
    Stats,

    /// Show the leaderboard of registered players
    Leaderboard {
        /// Sort order: wins (default), rate, games
        #[arg(short, long, default_value = "wins")]
        sort: SortKey,
    },

    /// List the word categories
    Categories,
}

/// Build the word source from the catalog flags
fn load_source(catalog: Option<&PathBuf>, random_word: bool) -> Result<CatalogSource> {
    let mode = if random_word {
        PickMode::Random
    } else {
        PickMode::Daily
    };

    match catalog {
        Some(path) => {
            let entries = loader::load_entries(path).map_err(|e| anyhow::anyhow!(e))?;
            Ok(CatalogSource::from_entries(entries, mode))
        }
        None => Ok(CatalogSource::embedded(mode)),
    }
}

/// Open the store and resolve the player from the nickname flags
///
/// A store that fails to open degrades to a guest session rather than
/// refusing to start the game.
fn resolve_session(data_dir: &PathBuf, nickname: Option<&str>, guest: bool) -> GameSession {
    let store = match JsonStore::open(data_dir) {
        Ok(store) => Some(store),
        Err(err) => {
            eprintln!("Warning: stats will not be saved ({err})");
            None
        }
    };

    let player = if guest {
        None
    } else {
        nickname.and_then(|name| resolve_player(store.as_ref(), name))
    };

    GameSession::new(store, player)
}

fn resolve_player(store: Option<&JsonStore>, nickname: &str) -> Option<Player> {
    let store = store?;
    match store.find_player(nickname) {
        Ok(Some(player)) => Some(player),
        Ok(None) => match store.register_player(nickname) {
            Ok(player) => {
                println!("Welcome, {nickname}! Playing under a new name.");
                Some(player)
            }
            Err(err) => {
                eprintln!("Warning: could not register '{nickname}' ({err})");
                None
            }
        },
        Err(err) => {
            eprintln!("Warning: could not look up '{nickname}' ({err})");
            None
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let source = load_source(cli.catalog.as_ref(), cli.random_word)?;
            let session = resolve_session(&cli.data_dir, cli.nickname.as_deref(), cli.guest);
            let app = App::new(session, Box::new(source), Box::new(Merlion));
            run_tui(app)
        }
        Commands::Simple => {
            let source = load_source(cli.catalog.as_ref(), cli.random_word)?;
            let mut session = resolve_session(&cli.data_dir, cli.nickname.as_deref(), cli.guest);
            let mut companion = Merlion;
            run_simple(&mut session, &source, &mut companion, cli.category)
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            let store = JsonStore::open(&cli.data_dir)?;
            run_stats(&store)?;
            Ok(())
        }
        Commands::Leaderboard { sort } => {
            let store = JsonStore::open(&cli.data_dir)?;
            run_leaderboard(&store, sort, cli.nickname.as_deref())?;
            Ok(())
        }
        Commands::Categories => {
            println!("\nCategories:\n");
            for category in Category::ALL {
                println!(
                    "  {:<10} {} {:<12} {}",
                    category.to_string(),
                    category.icon(),
                    category.label(),
                    category.subtitle()
                );
            }
            println!();
            Ok(())
        }
    }
}
