//! Legal n-of-a-kind enumeration for a hand.

use rustc_hash::FxHashMap;

use crate::core::{Card, Play, Rank};
use crate::rules::RuleState;

use super::combinations::Combinations;

/// Group a hand by rank, groups in order of first appearance.
///
/// Cards keep their hand order inside each group.
#[must_use]
pub fn group_by_rank(hand: &[Card]) -> Vec<(Rank, Play)> {
    let mut groups: Vec<(Rank, Play)> = Vec::new();
    for &card in hand {
        match groups.iter_mut().find(|(rank, _)| *rank == card.rank) {
            Some((_, group)) => group.push(card),
            None => groups.push((card.rank, Play::from_slice(&[card]))),
        }
    }
    groups
}

/// Number of cards held per rank.
#[must_use]
pub fn rank_counts(hand: &[Card]) -> FxHashMap<Rank, usize> {
    let mut counts = FxHashMap::default();
    for card in hand {
        *counts.entry(card.rank).or_insert(0) += 1;
    }
    counts
}

/// Every play from `hand` that `rules` accepts on `field`.
///
/// Following (`field` non-empty) enumerates each rank's subsets of exactly
/// `field.len()` cards. Leading enumerates every size from one to the whole
/// group, smallest first. Suit choice matters for binding, so subsets of the
/// same rank are all listed.
#[must_use]
pub fn candidate_plays(rules: &RuleState, hand: &[Card], field: &[Card]) -> Vec<Play> {
    let required = field.len();
    let mut candidates = Vec::new();

    for (_, group) in group_by_rank(hand) {
        let sizes = if required == 0 {
            1..=group.len()
        } else if group.len() >= required {
            required..=required
        } else {
            continue;
        };

        for k in sizes {
            candidates.extend(
                Combinations::new(&group, k).filter(|combo| rules.can_play(combo, field)),
            );
        }
    }

    candidates
}
