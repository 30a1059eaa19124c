//! Resolve a single tapped card into a full play.

use tracing::trace;

use crate::core::{Card, Play};
use crate::rules::RuleState;

/// Resolve a tap on `tapped` into the play it forces, if any.
///
/// Only defined while following: on an empty field this always returns
/// `None`. The tapped rank's cards in `hand` resolve when
/// - there are exactly as many as the field requires, or
/// - there are more, the field is suit-bound, and exactly the required
///   number carry the field's suits (the tapped card itself may be outside
///   that set).
///
/// Anything else is ambiguous and returns `None`, leaving the choice to
/// explicit selection. A resolved set must still pass `can_play`.
#[must_use]
pub fn resolve_tap(tapped: Card, hand: &[Card], field: &[Card], rules: &RuleState) -> Option<Play> {
    if field.is_empty() {
        return None;
    }

    let required = field.len();
    let same_rank: Play = hand.iter().copied().filter(|c| c.rank == tapped.rank).collect();

    let resolved = if same_rank.len() < required {
        None
    } else if same_rank.len() == required {
        Some(same_rank)
    } else if rules.suit_bound() {
        let matching: Play = same_rank
            .into_iter()
            .filter(|c| field.iter().any(|f| f.suit == c.suit))
            .collect();
        (matching.len() == required).then_some(matching)
    } else {
        None
    };

    let play = resolved.filter(|play| rules.can_play(play, field));
    trace!(%tapped, resolved = play.is_some(), "tap resolution");
    play
}
