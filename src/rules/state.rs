//! Table-wide rule state: revolution, J-back and suit binding.
//!
//! `RuleState` answers "may these cards go down on this field?" and turns
//! a committed play into the set of effects it triggered. Its fields are
//! private: the only mutations are `commit_play`, `reset_field` and
//! `reset_round`.
//!
//! ## Lifecycle
//!
//! - `reset_round` once per match (clears the permanent revolution)
//! - `reset_field` on every sweep (clears binding and J-back)
//! - `commit_play` after each accepted play
//!
//! ```
//! use daifugo_duel::core::card::parse_cards;
//! use daifugo_duel::rules::{GameEvent, RuleState};
//!
//! let mut rules = RuleState::new();
//! let field = parse_cards("3C").unwrap();
//! let play = parse_cards("4C").unwrap();
//!
//! assert!(rules.can_play(&play, &field));
//! let events = rules.commit_play(&play, &field);
//! assert!(events.contains(GameEvent::SuitBind));
//!
//! // Bound to clubs: a heart no longer follows.
//! assert!(!rules.can_play(&parse_cards("5H").unwrap(), &play));
//! assert!(rules.can_play(&parse_cards("6C").unwrap(), &play));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Card, Rank, Suit};

use super::events::{GameEvent, GameEvents};

/// Rank that cuts the field.
pub const CUT_RANK: Rank = Rank::Eight;

/// Rank that skips the opponent.
pub const SKIP_RANK: Rank = Rank::Five;

/// Rank that turns on the temporary reversal.
pub const J_BACK_RANK: Rank = Rank::Jack;

/// Cards in one play needed to toggle the permanent revolution.
pub const REVOLUTION_COUNT: usize = 4;

/// Table-wide modifiers for one match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleState {
    permanent_revolution: bool,
    temporary_reversal: bool,
    suit_bound: bool,
    bound_suit: Option<Suit>,
}

impl RuleState {
    /// Fresh state: normal ordering, nothing bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of a match: clear the permanent revolution and the field state.
    pub fn reset_round(&mut self) {
        self.permanent_revolution = false;
        self.reset_field();
    }

    /// Field sweep: clear suit binding and the temporary reversal.
    pub fn reset_field(&mut self) {
        self.suit_bound = false;
        self.bound_suit = None;
        self.temporary_reversal = false;
        trace!("field state reset");
    }

    /// Toggled by four-of-a-kind; survives sweeps.
    #[must_use]
    pub fn permanent_revolution(&self) -> bool {
        self.permanent_revolution
    }

    /// J-back; cleared on sweep.
    #[must_use]
    pub fn temporary_reversal(&self) -> bool {
        self.temporary_reversal
    }

    /// Whether follows must copy the field's suits.
    #[must_use]
    pub fn suit_bound(&self) -> bool {
        self.suit_bound
    }

    /// The bound suit, recorded only for single-card binds.
    #[must_use]
    pub fn bound_suit(&self) -> Option<Suit> {
        self.bound_suit
    }

    /// Ordering currently in force.
    #[must_use]
    pub fn effective_revolution(&self) -> bool {
        self.permanent_revolution ^ self.temporary_reversal
    }

    /// Check whether `cards` may be played on `field_top`.
    ///
    /// An empty or mixed-rank set never plays. On an empty field any
    /// single-rank set leads. Otherwise the counts must match, a bound field
    /// demands the same suits, and the play must be strictly stronger under
    /// the effective ordering.
    #[must_use]
    pub fn can_play(&self, cards: &[Card], field_top: &[Card]) -> bool {
        if !is_single_rank(cards) {
            return false;
        }
        if field_top.is_empty() {
            return true;
        }
        if cards.len() != field_top.len() {
            return false;
        }
        if self.suit_bound && !self.follows_binding(cards, field_top) {
            return false;
        }

        let play = cards[0].strength();
        let field = field_top[0].strength();
        if self.effective_revolution() {
            play < field
        } else {
            play > field
        }
    }

    fn follows_binding(&self, cards: &[Card], field_top: &[Card]) -> bool {
        match (self.bound_suit, cards) {
            (Some(suit), [card]) => card.suit == suit,
            _ => suits_match(cards, field_top),
        }
    }

    /// Apply a play that `can_play` accepted (or a lead) and report what it
    /// triggered.
    ///
    /// Legality is not re-checked here. The caller must not commit a
    /// rejected play.
    pub fn commit_play(&mut self, played: &[Card], previous_field_top: &[Card]) -> GameEvents {
        debug_assert!(
            is_single_rank(played),
            "commit_play requires a non-empty single-rank play"
        );

        let mut events = GameEvents::none();

        if played.iter().any(|c| c.rank == J_BACK_RANK) && !self.temporary_reversal {
            self.temporary_reversal = true;
            events |= GameEvent::JBack;
            events |= GameEvent::Revolution;
            trace!("j-back on");
        }

        if played.len() >= REVOLUTION_COUNT {
            self.permanent_revolution = !self.permanent_revolution;
            events |= GameEvent::Revolution;
            trace!(permanent = self.permanent_revolution, "revolution toggled");
        }

        if !self.suit_bound
            && !previous_field_top.is_empty()
            && suits_match(played, previous_field_top)
        {
            self.suit_bound = true;
            if let [card] = played {
                self.bound_suit = Some(card.suit);
            }
            events |= GameEvent::SuitBind;
            trace!(bound_suit = ?self.bound_suit, "suits bound");
        }

        if played.iter().any(|c| c.rank == CUT_RANK) {
            events |= GameEvent::EightEffect;
        }

        if played.iter().any(|c| c.rank == SKIP_RANK) {
            events |= GameEvent::FiveEffect;
        }

        debug!(
            played = %DisplayCards(played),
            %events,
            reversed = self.effective_revolution(),
            "play committed"
        );

        events
    }
}

/// True when `cards` is non-empty and every card shares one rank.
#[must_use]
pub fn is_single_rank(cards: &[Card]) -> bool {
    match cards.split_first() {
        Some((first, rest)) => rest.iter().all(|c| c.rank == first.rank),
        None => false,
    }
}

/// Order-independent suit-multiset equality.
#[must_use]
pub fn suits_match(a: &[Card], b: &[Card]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    sorted_suits(a) == sorted_suits(b)
}

fn sorted_suits(cards: &[Card]) -> SmallVec<[Suit; 4]> {
    let mut suits: SmallVec<[Suit; 4]> = cards.iter().map(|c| c.suit).collect();
    suits.sort_unstable();
    suits
}

/// Formats a card slice as `[3♠ 3♥]` for log fields.
pub struct DisplayCards<'a>(pub &'a [Card]);

impl std::fmt::Display for DisplayCards<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}
