//! CPU policy configuration.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Rank;

/// Ranks the CPU holds back by default: the two strongest ranks plus the
/// cut and skip ranks.
pub const DEFAULT_SCARCE_RANKS: [Rank; 4] = [Rank::Ace, Rank::Two, Rank::Five, Rank::Eight];

/// Holdback policy configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldbackConfig {
    /// Ranks whose last copies are only spent on a winning play.
    pub scarce_ranks: FxHashSet<Rank>,
}

impl Default for HoldbackConfig {
    fn default() -> Self {
        Self {
            scarce_ranks: DEFAULT_SCARCE_RANKS.into_iter().collect(),
        }
    }
}

impl HoldbackConfig {
    /// No scarce ranks: always play the weakest legal set.
    #[must_use]
    pub fn without_holdback() -> Self {
        Self {
            scarce_ranks: FxHashSet::default(),
        }
    }

    /// Replace the scarce rank set.
    #[must_use]
    pub fn with_scarce_ranks(mut self, ranks: impl IntoIterator<Item = Rank>) -> Self {
        self.scarce_ranks = ranks.into_iter().collect();
        self
    }

    #[must_use]
    pub fn is_scarce(&self, rank: Rank) -> bool {
        self.scarce_ranks.contains(&rank)
    }
}
