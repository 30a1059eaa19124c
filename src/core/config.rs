//! Match configuration.
//!
//! Callers configure a duel at setup by providing a `MatchConfig`:
//! - `seed`: Root seed for every random stream in the match
//! - `hand_size`: Dice-rolled (default 2d6) or fixed number of cards per seat
//! - `first_seat`: Fixed lead seat, or `None` for a coin flip
//!
//! Loading the config from disk or the environment is the caller's concern;
//! the types only derive serde.

use serde::{Deserialize, Serialize};

use super::{GameRng, Seat};

/// Largest hand that still lets both seats be dealt from one deck.
pub const MAX_HAND_SIZE: usize = 26;

/// How many cards each seat is dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandSize {
    /// Sum of `count` dice with `sides` faces each.
    Dice { count: u8, sides: u8 },
    /// Always the same number of cards.
    Fixed(usize),
}

impl Default for HandSize {
    fn default() -> Self {
        HandSize::Dice { count: 2, sides: 6 }
    }
}

impl HandSize {
    /// Resolve the hand size, returning the rolled faces (empty for `Fixed`)
    /// and the total.
    pub fn roll(&self, rng: &mut GameRng) -> (Vec<u8>, usize) {
        match *self {
            HandSize::Dice { count, sides } => {
                let faces: Vec<u8> = (0..count).map(|_| rng.roll_die(sides)).collect();
                let total = faces.iter().map(|&f| usize::from(f)).sum();
                (faces, total)
            }
            HandSize::Fixed(n) => (Vec::new(), n),
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Root seed. Same seed produces the same deal and lead.
    pub seed: u64,

    /// Cards dealt to each seat.
    pub hand_size: HandSize,

    /// Seat that leads the first field. `None` flips a coin.
    pub first_seat: Option<Seat>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            hand_size: HandSize::default(),
            first_seat: None,
        }
    }
}

impl MatchConfig {
    /// Set the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Deal a fixed number of cards to each seat.
    #[must_use]
    pub fn with_fixed_hand_size(mut self, size: usize) -> Self {
        self.hand_size = HandSize::Fixed(size);
        self
    }

    /// Roll `count` dice of `sides` faces for the hand size.
    #[must_use]
    pub fn with_dice(mut self, count: u8, sides: u8) -> Self {
        self.hand_size = HandSize::Dice { count, sides };
        self
    }

    /// Fix the seat that leads first.
    #[must_use]
    pub fn with_first_seat(mut self, seat: Seat) -> Self {
        self.first_seat = Some(seat);
        self
    }
}
