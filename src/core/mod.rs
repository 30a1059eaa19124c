//! Core types: cards, seats, RNG, configuration.
//!
//! Everything here is plain data with no rule knowledge. Legality and
//! table state live in `rules`.

pub mod card;
pub mod seat;
pub mod rng;
pub mod config;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use seat::{Seat, SeatMap};
pub use rng::{GameRng, GameRngState};
pub use config::{HandSize, MatchConfig, MAX_HAND_SIZE};

/// A set of same-rank cards played together (1-4 cards, stored inline).
pub type Play = smallvec::SmallVec<[Card; 4]>;
