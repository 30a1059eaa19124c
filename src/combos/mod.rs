//! Combination generation.
//!
//! - `Combinations`: restartable pick-k-of-n iterator
//! - `candidate_plays`: every legal n-of-a-kind play from a hand
//!
//! Per rank there are at most C(4, k) subsets, so exhaustive enumeration
//! stays tiny (under 200 candidates for a full 13-rank hand).

pub mod candidates;
pub mod combinations;

pub use candidates::{candidate_plays, group_by_rank, rank_counts};
pub use combinations::{binomial, Combinations};
