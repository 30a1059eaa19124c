//! Card model: suits, ranks and climbing strength.
//!
//! ## Strength
//!
//! Daifugo climbs from 3 (weakest) to 2 (strongest):
//!
//! ```text
//! 3 4 5 6 7 8 9 10 J Q K A 2
//! 0 1 2 3 4 5 6 7  8 9 10 11 12
//! ```
//!
//! Under a revolution the ladder is flipped: `reversed = 12 - normal`.
//! Strength is always derived from the rank, never stored.
//!
//! ## Text Form
//!
//! ```
//! use daifugo_duel::core::{Card, Rank, Suit};
//!
//! let card: Card = "10H".parse().unwrap();
//! assert_eq!(card, Card::new(Suit::Hearts, Rank::Ten));
//! assert_eq!(card.to_string(), "10♥");
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

/// Card suit.
///
/// Declaration order is the tie-break order used when sorting cards and
/// when comparing suit multisets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All four suits in tie-break order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Display glyph.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    fn from_glyph(c: char) -> Option<Self> {
        match c {
            '♠' | 'S' | 's' => Some(Suit::Spades),
            '♥' | 'H' | 'h' => Some(Suit::Hearts),
            '♦' | 'D' | 'd' => Some(Suit::Diamonds),
            '♣' | 'C' | 'c' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Card rank, declared in climbing order (3 weakest, 2 strongest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Two,
}

impl Rank {
    /// All thirteen ranks, weakest first.
    pub const ALL: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    /// Highest strength value (the 2 under normal ordering).
    pub const MAX_STRENGTH: u8 = 12;

    /// Strength under normal ordering: 3 = 0 ... 2 = 12.
    #[must_use]
    pub const fn strength(self) -> u8 {
        self as u8
    }

    /// Strength under the given ordering.
    #[must_use]
    pub const fn strength_in(self, reversed: bool) -> u8 {
        if reversed {
            Self::MAX_STRENGTH - self.strength()
        } else {
            self.strength()
        }
    }

    /// Short label used in card text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
        }
    }

    fn from_label(s: &str) -> Option<Self> {
        let rank = match s {
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "t" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            "2" => Rank::Two,
            _ => return None,
        };
        Some(rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single playing card.
///
/// Ordering is by normal strength first, then suit. This is the display
/// order of a sorted hand, not a legality rule: legality goes through
/// [`RuleState`](crate::rules::RuleState).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Strength under normal ordering.
    #[must_use]
    pub const fn strength(self) -> u8 {
        self.rank.strength()
    }

    /// Strength under the given ordering.
    #[must_use]
    pub const fn strength_in(self, reversed: bool) -> u8 {
        self.rank.strength_in(reversed)
    }

    /// A full 52-card deck, ordered by suit then rank.
    #[must_use]
    pub fn deck() -> Vec<Card> {
        Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect()
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength()
            .cmp(&other.strength())
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Error returned when card text cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid card text: {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses `<rank><suit>`, e.g. `"3S"`, `"10h"`, `"TD"`, `"J♣"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseCardError(s.to_string());

        let suit_char = trimmed.chars().last().ok_or_else(err)?;
        let suit = Suit::from_glyph(suit_char).ok_or_else(err)?;
        let rank_text = &trimmed[..trimmed.len() - suit_char.len_utf8()];
        let rank = Rank::from_label(rank_text).ok_or_else(err)?;

        Ok(Card::new(suit, rank))
    }
}

/// Parse a whitespace-separated list of cards.
///
/// ```
/// use daifugo_duel::core::card::parse_cards;
///
/// let cards = parse_cards("3S 3H").unwrap();
/// assert_eq!(cards.len(), 2);
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}
