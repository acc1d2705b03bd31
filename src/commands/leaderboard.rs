//! Leaderboard report command

use crate::output::print_leaderboard;
use crate::session::{JsonStore, SortKey, StoreError, leaderboard};

/// Build and print the leaderboard from persisted results
///
/// # Errors
///
/// Returns `StoreError` if players or results cannot be read.
pub fn run_leaderboard(
    store: &JsonStore,
    sort: SortKey,
    current_player: Option<&str>,
) -> Result<(), StoreError> {
    let players = store.players()?;
    let results = store.results()?;
    let entries = leaderboard::build(&players, &results, sort);
    print_leaderboard(&entries, current_player);
    Ok(())
}
