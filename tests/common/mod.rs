//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

use daifugo_duel::core::card::parse_cards;
use daifugo_duel::core::Card;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test-writer subscriber once per test binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let level = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(level))
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("test card list should parse")
}

pub fn card(s: &str) -> Card {
    s.parse().expect("test card should parse")
}
