//! Command implementations

pub mod leaderboard;
pub mod simple;
pub mod stats;

pub use leaderboard::run_leaderboard;
pub use simple::run_simple;
pub use stats::run_stats;
