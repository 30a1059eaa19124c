//! Move policies for the CPU seat.
//!
//! A policy sees its own hand, the standing field and the rule state, and
//! either names a play or declines (`None`, a pass). Policies never mutate
//! the rule state; the caller commits whatever they return.

use crate::combos::candidate_plays;
use crate::core::{Card, GameRng, Play};
use crate::rules::RuleState;

/// Policy for choosing a play.
pub trait MovePolicy {
    /// Choose a play for `hand` against `field` (empty field = lead).
    ///
    /// Returns `None` to pass. Must only return plays that `rules.can_play`
    /// accepts and that are drawn from `hand`.
    fn decide_move(&mut self, rules: &RuleState, hand: &[Card], field: &[Card]) -> Option<Play>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Uniform random policy.
///
/// Picks uniformly among the legal candidates and only passes when there
/// are none. Used to drive self-play through odd table states.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("random-policy"),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn decide_move(&mut self, rules: &RuleState, hand: &[Card], field: &[Card]) -> Option<Play> {
        let candidates = candidate_plays(rules, hand, field);
        self.rng.choose(&candidates).cloned()
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
