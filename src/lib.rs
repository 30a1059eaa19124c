//! # daifugo-duel
//!
//! Rule engine, move generation and CPU opponent for two-player Daifugo
//! (Japanese "Rich Man, Poor Man") with local rules.
//!
//! ## Rules Covered
//!
//! - **Revolution**: a four-of-a-kind flips card strength for the rest of
//!   the round
//! - **J-Back**: a Jack flips strength until the field is swept
//! - **8-Cut**: an 8 sweeps the field and its player leads again
//! - **5-Skip**: a 5 gives its player another turn on the standing field
//! - **Suit Binding**: following with the same suits locks the field to them
//!
//! Strength is 3 (weakest) through 2 (strongest); suits never order plays.
//!
//! ## Modules
//!
//! - `core`: Cards, seats, RNG, match configuration
//! - `rules`: `RuleState` legality checks and event commits
//! - `combos`: Combination iterator and legal-play enumeration
//! - `ai`: Move policies, including the holdback CPU opponent
//! - `smart_play`: One-tap resolution of forced multi-card follows
//! - `duel`: Dealing, turn flow, win detection and results tally
//!
//! ## Determinism
//!
//! Everything random draws from a `GameRng` seeded by the match config.
//! Rule evaluation, enumeration and the CPU policy are pure.

pub mod core;
pub mod rules;
pub mod combos;
pub mod ai;
pub mod smart_play;
pub mod duel;

// Re-export commonly used types
pub use crate::core::{
    Card, Rank, Suit, ParseCardError,
    Seat, SeatMap,
    GameRng, GameRngState,
    HandSize, MatchConfig, MAX_HAND_SIZE,
    Play,
};

pub use crate::rules::{GameEvent, GameEvents, RuleState};

pub use crate::combos::{candidate_plays, Combinations};

pub use crate::ai::{decide_move, HoldbackConfig, HoldbackPolicy, MovePolicy, RandomPolicy};

pub use crate::smart_play::resolve_tap;

pub use crate::duel::{Match, MatchError, MatchStats, TurnAction, TurnOutcome};
