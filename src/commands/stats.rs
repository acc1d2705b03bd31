//! Stats report command

use crate::output::print_stats;
use crate::session::{JsonStore, StoreError};

/// Print the local player's stats
///
/// # Errors
///
/// Returns `StoreError` if the stats file cannot be read.
pub fn run_stats(store: &JsonStore) -> Result<(), StoreError> {
    let stats = store.load_stats()?;
    print_stats(&stats);
    Ok(())
}
