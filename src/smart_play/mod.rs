//! Smart play: turn one tapped card into a multi-card play when the field
//! leaves only one way to follow with that rank.
//!
//! ```
//! use daifugo_duel::core::card::parse_cards;
//! use daifugo_duel::rules::RuleState;
//! use daifugo_duel::smart_play::resolve_tap;
//!
//! let rules = RuleState::new();
//! let hand = parse_cards("4C 4D 9S").unwrap();
//! let field = parse_cards("3S 3H").unwrap();
//!
//! let play = resolve_tap(hand[0], &hand, &field, &rules).unwrap();
//! assert_eq!(play.as_slice(), &hand[..2]);
//! ```

pub mod resolver;

pub use resolver::resolve_tap;
