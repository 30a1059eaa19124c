//! Win/loss tally across matches.
//!
//! Kept in memory only. The type derives serde so the caller can store it
//! wherever it keeps settings.

use serde::{Deserialize, Serialize};

/// Running results for the human seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub games: u32,
    pub wins: u32,
    pub streak: u32,
    pub max_streak: u32,
}

impl MatchStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished match.
    pub fn record(&mut self, won: bool) {
        self.games += 1;
        if won {
            self.wins += 1;
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
        } else {
            self.streak = 0;
        }
    }

    /// Wins as a percentage of games, 0.0 before the first game.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.games) * 100.0
    }
}

impl std::fmt::Display for MatchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Games: {}\nWins: {}\nWin Rate: {:.1}%\nStreak: {}\nMax Streak: {}",
            self.games,
            self.wins,
            self.win_rate(),
            self.streak,
            self.max_streak
        )
    }
}
