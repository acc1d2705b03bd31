//! Local play statistics
//!
//! Played/won counts and the win streak shown in the stats dialog. Streak
//! resets to zero on any loss; the max streak high-water mark survives.

use serde::{Deserialize, Serialize};

/// Lifetime statistics for the local player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalStats {
    pub played: usize,
    pub won: usize,
    pub streak: usize,
    pub max_streak: usize,
}

impl LocalStats {
    /// Fold one finished round into the stats
    pub fn record(&mut self, won: bool) {
        self.played += 1;
        if won {
            self.won += 1;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }

    /// Win percentage, rounded to whole percent
    #[must_use]
    pub fn win_percent(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            ((self.won as f64 / self.played as f64) * 100.0).round() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wins_extend_the_streak() {
        let mut stats = LocalStats::default();
        stats.record(true);
        stats.record(true);

        assert_eq!(stats.played, 2);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.streak, 2);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn loss_resets_streak_but_not_max() {
        let mut stats = LocalStats::default();
        stats.record(true);
        stats.record(true);
        stats.record(false);

        assert_eq!(stats.streak, 0);
        assert_eq!(stats.max_streak, 2);

        stats.record(true);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn win_percent_rounds() {
        let mut stats = LocalStats::default();
        assert_eq!(stats.win_percent(), 0);

        stats.record(true);
        stats.record(true);
        stats.record(false);
        assert_eq!(stats.win_percent(), 67);
    }
}
