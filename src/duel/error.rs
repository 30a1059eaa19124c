//! Match controller errors.

use thiserror::Error;

use crate::core::{Card, Seat};

/// Why a match operation was refused.
///
/// A refused operation leaves the match unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("the match is already finished")]
    Finished,

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: Seat, actual: Seat },

    #[error("card {0} is not in the hand")]
    CardNotInHand(Card),

    #[error("card {0} appears more than once in the play")]
    DuplicateCard(Card),

    #[error("a play needs at least one card")]
    EmptyPlay,

    #[error("those cards cannot be played on the current field")]
    IllegalPlay,

    #[error("cannot pass while leading")]
    CannotPassOnLead,

    #[error("hand size {0} is out of range")]
    InvalidHandSize(usize),
}
