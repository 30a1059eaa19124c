//! Match controller.
//!
//! `Match` owns a dealt duel and drives the turn flow around `RuleState`:
//! - a pass sweeps the field and the opponent leads
//! - an 8-cut sweeps the field and the same seat leads again
//! - a 5-skip leaves the field standing and the same seat acts again
//! - emptying a hand ends the match
//!
//! ## Usage
//!
//! ```
//! use daifugo_duel::ai::{HoldbackConfig, HoldbackPolicy, RandomPolicy};
//! use daifugo_duel::core::MatchConfig;
//! use daifugo_duel::duel::Match;
//!
//! let mut game = Match::new(&MatchConfig::default().with_seed(7)).unwrap();
//! let mut human = RandomPolicy::new(1);
//! let mut cpu = HoldbackPolicy::new(HoldbackConfig::default());
//!
//! let winner = game.play_out(&mut human, &mut cpu, 1_000).unwrap();
//! assert!(winner.is_some());
//! ```

pub mod error;
pub mod game;
pub mod stats;

pub use error::MatchError;
pub use game::{Match, TurnAction, TurnOutcome};
pub use stats::MatchStats;
