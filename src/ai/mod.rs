//! Automated player.
//!
//! Policies are trait-based so the table logic never depends on how a move
//! was picked:
//! - `HoldbackPolicy`: the CPU opponent (withhold scarce ranks, weakest first)
//! - `RandomPolicy`: uniform random legal play, for self-play testing
//!
//! ## Usage
//!
//! ```
//! use daifugo_duel::ai::decide_move;
//! use daifugo_duel::core::card::parse_cards;
//! use daifugo_duel::rules::RuleState;
//!
//! let rules = RuleState::new();
//! let hand = parse_cards("3C 5C").unwrap();
//! let field = parse_cards("4S").unwrap();
//!
//! // The only beating card is the last 5: hold it and pass.
//! assert!(decide_move(&rules, &hand, &field).is_none());
//! ```

pub mod config;
pub mod holdback;
pub mod policy;

pub use config::{HoldbackConfig, DEFAULT_SCARCE_RANKS};
pub use holdback::{decide_move, HoldbackPolicy};
pub use policy::{MovePolicy, RandomPolicy};
