//! Leaderboard aggregation
//!
//! Folds persisted results into per-player standings. Average attempts is
//! computed over wins only; players with no recorded games are dropped.

use super::store::{GameResult, Player};
use rustc_hash::FxHashMap;

/// One player's standing
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub nickname: String,
    pub games_played: usize,
    pub games_won: usize,
    /// Whole-percent win rate
    pub win_rate: u32,
    /// Average attempts across won games, 0.0 with no wins
    pub avg_attempts: f64,
}

/// Leaderboard orderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortKey {
    /// Most games won
    #[default]
    Wins,
    /// Highest win rate
    Rate,
    /// Most games played
    Games,
}

/// Maximum entries a leaderboard reports
pub const LEADERBOARD_LIMIT: usize = 50;

/// Aggregate results into sorted standings
#[must_use]
pub fn build(players: &[Player], results: &[GameResult], sort: SortKey) -> Vec<LeaderboardEntry> {
    struct Tally {
        played: usize,
        won: usize,
        total_attempts: usize,
    }

    let mut tallies: FxHashMap<&str, Tally> = FxHashMap::default();
    for result in results {
        let tally = tallies.entry(result.player_id.as_str()).or_insert(Tally {
            played: 0,
            won: 0,
            total_attempts: 0,
        });
        tally.played += 1;
        if result.won {
            tally.won += 1;
            tally.total_attempts += result.attempts;
        }
    }

    let mut entries: Vec<LeaderboardEntry> = players
        .iter()
        .filter_map(|player| {
            let tally = tallies.get(player.id.as_str())?;
            if tally.played == 0 {
                return None;
            }
            Some(LeaderboardEntry {
                nickname: player.nickname.clone(),
                games_played: tally.played,
                games_won: tally.won,
                win_rate: ((tally.won as f64 / tally.played as f64) * 100.0).round() as u32,
                avg_attempts: if tally.won > 0 {
                    tally.total_attempts as f64 / tally.won as f64
                } else {
                    0.0
                },
            })
        })
        .collect();

    entries.sort_by(|a, b| match sort {
        SortKey::Wins => b.games_won.cmp(&a.games_won),
        SortKey::Rate => b.win_rate.cmp(&a.win_rate),
        SortKey::Games => b.games_played.cmp(&a.games_played),
    });
    entries.truncate(LEADERBOARD_LIMIT);
    entries
}

/// Medal or rank marker for a standing
#[must_use]
pub fn medal(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        rank => format!("{}", rank + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn player(id: &str, nickname: &str) -> Player {
        Player {
            id: id.to_string(),
            nickname: nickname.to_string(),
            created_at: Utc::now(),
        }
    }

    fn result(player_id: &str, won: bool, attempts: usize) -> GameResult {
        GameResult {
            player_id: player_id.to_string(),
            word: "laksa".to_string(),
            attempts,
            won,
            played_at: Utc::now(),
        }
    }

    #[test]
    fn aggregates_per_player() {
        let players = [player("a", "Siti"), player("b", "Wei Ming")];
        let results = [
            result("a", true, 3),
            result("a", true, 5),
            result("a", false, 6),
            result("b", true, 2),
        ];

        let board = build(&players, &results, SortKey::Wins);
        assert_eq!(board.len(), 2);

        let siti = &board[0];
        assert_eq!(siti.nickname, "Siti");
        assert_eq!(siti.games_played, 3);
        assert_eq!(siti.games_won, 2);
        assert_eq!(siti.win_rate, 67);
        assert!((siti.avg_attempts - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn avg_attempts_counts_wins_only() {
        let players = [player("a", "Siti")];
        let results = [result("a", true, 2), result("a", false, 6)];

        let board = build(&players, &results, SortKey::Wins);
        assert!((board[0].avg_attempts - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn players_without_games_are_dropped() {
        let players = [player("a", "Siti"), player("b", "Idle")];
        let results = [result("a", true, 3)];

        let board = build(&players, &results, SortKey::Wins);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].nickname, "Siti");
    }

    #[test]
    fn no_wins_yields_zero_average() {
        let players = [player("a", "Siti")];
        let results = [result("a", false, 6)];

        let board = build(&players, &results, SortKey::Wins);
        assert_eq!(board[0].games_won, 0);
        assert_eq!(board[0].win_rate, 0);
        assert!((board[0].avg_attempts).abs() < f64::EPSILON);
    }

    #[test]
    fn sort_orders() {
        let players = [player("a", "ManyWins"), player("b", "HighRate")];
        // a: 3 wins of 6 games (50%), b: 2 wins of 2 games (100%)
        let results: Vec<GameResult> = (0..6)
            .map(|i| result("a", i < 3, 4))
            .chain((0..2).map(|_| result("b", true, 3)))
            .collect();

        let by_wins = build(&players, &results, SortKey::Wins);
        assert_eq!(by_wins[0].nickname, "ManyWins");

        let by_rate = build(&players, &results, SortKey::Rate);
        assert_eq!(by_rate[0].nickname, "HighRate");

        let by_games = build(&players, &results, SortKey::Games);
        assert_eq!(by_games[0].nickname, "ManyWins");
    }

    #[test]
    fn medals_then_ranks() {
        assert_eq!(medal(0), "🥇");
        assert_eq!(medal(1), "🥈");
        assert_eq!(medal(2), "🥉");
        assert_eq!(medal(3), "4");
    }
}
