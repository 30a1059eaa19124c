//! Rule state machine.
//!
//! - `RuleState`: legality checks and play commits
//! - `GameEvent` / `GameEvents`: what a commit triggered
//!
//! Illegal plays are rejected by `can_play` returning `false`; there is no
//! error path in this module.

pub mod events;
pub mod state;

pub use events::{GameEvent, GameEvents};
pub use state::{
    is_single_rank, suits_match, DisplayCards, RuleState, CUT_RANK, J_BACK_RANK,
    REVOLUTION_COUNT, SKIP_RANK,
};
