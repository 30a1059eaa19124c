//! The CPU's default policy: withhold scarce ranks, play the weakest set.

use tracing::debug;

use crate::combos::{candidate_plays, rank_counts};
use crate::core::{Card, Play};
use crate::rules::{DisplayCards, RuleState};

use super::config::HoldbackConfig;
use super::policy::MovePolicy;

/// Withhold-scarce-ranks, weakest-first policy.
///
/// 1. Enumerate every legal play.
/// 2. Drop plays that would spend the last copies of a scarce rank, unless
///    the play empties the hand (a winning play is always allowed).
/// 3. Play the weakest survivor under the effective ordering.
///
/// Passes when nothing survives, even if a scarce play was legal. The
/// policy is deterministic: ties go to enumeration order.
#[derive(Clone, Debug, Default)]
pub struct HoldbackPolicy {
    config: HoldbackConfig,
}

impl HoldbackPolicy {
    #[must_use]
    pub fn new(config: HoldbackConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &HoldbackConfig {
        &self.config
    }

    /// Candidates that survive the holdback filter.
    #[must_use]
    pub fn allowed_plays(&self, hand: &[Card], candidates: Vec<Play>) -> Vec<Play> {
        let counts = rank_counts(hand);

        candidates
            .into_iter()
            .filter(|play| {
                if play.len() == hand.len() {
                    return true;
                }
                let rank = play[0].rank;
                if !self.config.is_scarce(rank) {
                    return true;
                }
                counts.get(&rank).copied().unwrap_or(0) > play.len()
            })
            .collect()
    }

    /// Choose a play without needing `&mut self`.
    #[must_use]
    pub fn choose(&self, rules: &RuleState, hand: &[Card], field: &[Card]) -> Option<Play> {
        if hand.is_empty() {
            return None;
        }

        let candidates = candidate_plays(rules, hand, field);
        if candidates.is_empty() {
            debug!(hand = %DisplayCards(hand), "no legal play, passing");
            return None;
        }

        let total = candidates.len();
        let mut allowed = self.allowed_plays(hand, candidates);
        if allowed.is_empty() {
            debug!(
                hand = %DisplayCards(hand),
                candidates = total,
                "holding scarce ranks, passing"
            );
            return None;
        }

        // Under reversal a higher stored strength is the weaker card.
        if rules.effective_revolution() {
            allowed.sort_by_key(|play| std::cmp::Reverse(play[0].strength()));
        } else {
            allowed.sort_by_key(|play| play[0].strength());
        }

        let choice = allowed.swap_remove(0);
        debug!(
            play = %DisplayCards(&choice),
            candidates = total,
            reversed = rules.effective_revolution(),
            "cpu chose play"
        );
        Some(choice)
    }
}

impl MovePolicy for HoldbackPolicy {
    fn decide_move(&mut self, rules: &RuleState, hand: &[Card], field: &[Card]) -> Option<Play> {
        self.choose(rules, hand, field)
    }

    fn name(&self) -> &'static str {
        "holdback"
    }
}

/// Decide with the default holdback policy.
#[must_use]
pub fn decide_move(rules: &RuleState, hand: &[Card], field: &[Card]) -> Option<Play> {
    HoldbackPolicy::default().choose(rules, hand, field)
}
