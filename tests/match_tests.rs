//! Match controller integration tests.

mod common;

use common::{card, cards, init_logging};
use daifugo_duel::ai::{HoldbackConfig, HoldbackPolicy, MovePolicy, RandomPolicy};
use daifugo_duel::core::{Card, MatchConfig, Seat};
use daifugo_duel::duel::{Match, MatchError, MatchStats, TurnAction};
use daifugo_duel::rules::GameEvent;

// =============================================================================
// Dealing
// =============================================================================

#[test]
fn test_same_seed_same_deal() {
    init_logging();
    let config = MatchConfig::default().with_seed(2024);
    let a = Match::new(&config).unwrap();
    let b = Match::new(&config).unwrap();

    assert_eq!(a.dice(), b.dice());
    assert_eq!(a.to_act(), b.to_act());
    for seat in Seat::ALL {
        assert_eq!(a.hand(seat), b.hand(seat));
    }
}

#[test]
fn test_deals_are_disjoint_and_sized() {
    for seed in 0..50 {
        let game = Match::new(&MatchConfig::default().with_seed(seed)).unwrap();
        let size = game.hand_size();
        let rolled: usize = game.dice().iter().map(|&d| usize::from(d)).sum();
        assert_eq!(size, rolled);

        let human = game.hand(Seat::Human);
        let cpu = game.hand(Seat::Cpu);
        assert_eq!(human.len(), size);
        assert_eq!(cpu.len(), size);
        assert!(human.iter().all(|c| !cpu.contains(c)), "seed {seed} dealt a shared card");
    }
}

#[test]
fn test_full_deck_split() {
    let game = Match::new(&MatchConfig::default().with_fixed_hand_size(26)).unwrap();
    let mut all: Vec<Card> = game
        .hand(Seat::Human)
        .iter()
        .chain(game.hand(Seat::Cpu))
        .copied()
        .collect();
    all.sort();
    let mut deck = Card::deck();
    deck.sort();
    assert_eq!(all, deck);
}

#[test]
fn test_first_seat_override() {
    for seed in 0..10 {
        let config = MatchConfig::default()
            .with_seed(seed)
            .with_first_seat(Seat::Cpu);
        assert_eq!(Match::new(&config).unwrap().to_act(), Seat::Cpu);
    }
}

#[test]
fn test_coin_flip_reaches_both_seats() {
    let leads: Vec<Seat> = (0..64)
        .map(|seed| {
            Match::new(&MatchConfig::default().with_seed(seed))
                .unwrap()
                .to_act()
        })
        .collect();
    assert!(leads.contains(&Seat::Human));
    assert!(leads.contains(&Seat::Cpu));
}

// =============================================================================
// Turn Flow
// =============================================================================

#[test]
fn test_eight_sweeps_and_keeps_turn() {
    init_logging();
    let mut game = Match::from_hands(cards("3S 8H KD"), cards("4C 9C"), Seat::Human).unwrap();
    game.play(Seat::Human, &cards("3S")).unwrap();
    game.play(Seat::Cpu, &cards("4C")).unwrap();

    let outcome = game.play(Seat::Human, &cards("8H")).unwrap();
    assert!(outcome.events.contains(GameEvent::EightEffect));
    assert!(outcome.swept);
    assert_eq!(game.to_act(), Seat::Human);
    assert!(game.is_lead());
    assert!(!game.rules().suit_bound());
}

#[test]
fn test_five_keeps_turn_with_field() {
    let mut game = Match::from_hands(cards("5D 6D KS"), cards("4C 9C"), Seat::Human).unwrap();
    let outcome = game.play(Seat::Human, &cards("5D")).unwrap();

    assert!(outcome.events.contains(GameEvent::FiveEffect));
    assert_eq!(game.to_act(), Seat::Human);
    assert_eq!(game.field(), cards("5D").as_slice());

    // Same seat may pass on its own field; the opponent then leads.
    game.pass(Seat::Human).unwrap();
    assert_eq!(game.to_act(), Seat::Cpu);
    assert!(game.is_lead());
}

#[test]
fn test_pass_on_lead_rejected() {
    let mut game = Match::from_hands(cards("3S"), cards("4C"), Seat::Cpu).unwrap();
    assert_eq!(game.pass(Seat::Cpu).unwrap_err(), MatchError::CannotPassOnLead);
    assert_eq!(game.to_act(), Seat::Cpu);
}

#[test]
fn test_jack_reversal_ends_on_pass() {
    let mut game = Match::from_hands(cards("JS 3D 4D"), cards("9C QH"), Seat::Human).unwrap();
    game.play(Seat::Human, &cards("JS")).unwrap();
    assert!(game.rules().effective_revolution());

    // QH cannot beat a Jack under reversal; 9C can.
    assert_eq!(game.play(Seat::Cpu, &cards("QH")).unwrap_err(), MatchError::IllegalPlay);
    game.play(Seat::Cpu, &cards("9C")).unwrap();

    game.pass(Seat::Human).unwrap();
    assert!(!game.rules().effective_revolution());
    assert_eq!(game.to_act(), Seat::Cpu);
}

#[test]
fn test_tap_returns_none_when_ambiguous() {
    let mut game = Match::from_hands(cards("6S 9D"), cards("7C 7H 7D"), Seat::Human).unwrap();
    game.play(Seat::Human, &cards("6S")).unwrap();

    assert_eq!(game.tap(Seat::Cpu, card("7C")).unwrap(), None);
    assert_eq!(game.to_act(), Seat::Cpu);
    assert_eq!(game.hand(Seat::Cpu).len(), 3);
}

#[test]
fn test_finished_match_refuses_everything() {
    let mut game = Match::from_hands(cards("KS"), cards("4C 9C"), Seat::Human).unwrap();
    game.play(Seat::Human, &cards("KS")).unwrap();

    assert_eq!(game.winner(), Some(Seat::Human));
    assert_eq!(game.pass(Seat::Cpu).unwrap_err(), MatchError::Finished);
    assert_eq!(game.tap(Seat::Cpu, card("9C")).unwrap_err(), MatchError::Finished);
    let mut cpu = HoldbackPolicy::default();
    assert_eq!(game.step(&mut cpu).unwrap_err(), MatchError::Finished);
}

// =============================================================================
// Self-Play
// =============================================================================

#[test]
fn test_random_vs_holdback_terminates() {
    init_logging();
    for seed in 0..40 {
        let mut game = Match::new(&MatchConfig::default().with_seed(seed)).unwrap();
        let mut human = RandomPolicy::new(seed);
        let mut cpu = HoldbackPolicy::default();

        let winner = game.play_out(&mut human, &mut cpu, 2_000).unwrap();
        let winner = winner.unwrap_or_else(|| panic!("seed {seed} did not finish"));
        assert!(game.hand(winner).is_empty());
        assert!(!game.hand(winner.opponent()).is_empty());
    }
}

#[test]
fn test_random_self_play_terminates() {
    for seed in 0..40 {
        let mut game = Match::new(
            &MatchConfig::default()
                .with_seed(seed)
                .with_fixed_hand_size(26),
        )
        .unwrap();
        let mut human = RandomPolicy::new(seed);
        let mut cpu = RandomPolicy::new(seed + 1000);

        assert!(game.play_out(&mut human, &mut cpu, 5_000).unwrap().is_some());
    }
}

#[test]
fn test_step_outcomes_are_consistent() {
    let mut game = Match::new(&MatchConfig::default().with_seed(77)).unwrap();
    let mut human: Box<dyn MovePolicy> = Box::new(HoldbackPolicy::new(HoldbackConfig::without_holdback()));
    let mut cpu: Box<dyn MovePolicy> = Box::new(HoldbackPolicy::default());

    while !game.is_finished() && game.turns() < 1_000 {
        let seat = game.to_act();
        let before = game.hand(seat).len();
        let policy = match seat {
            Seat::Human => human.as_mut(),
            Seat::Cpu => cpu.as_mut(),
        };
        let outcome = game.step(policy).unwrap();

        assert_eq!(outcome.seat, seat);
        match &outcome.action {
            TurnAction::Played(play) => {
                assert_eq!(game.hand(seat).len(), before - play.len());
            }
            TurnAction::Passed | TurnAction::YieldedLead => {
                assert_eq!(game.hand(seat).len(), before);
                assert!(game.is_lead());
                assert_eq!(outcome.next, Some(seat.opponent()));
            }
        }
        if outcome.swept {
            assert!(game.is_lead());
        }
    }
    assert!(game.is_finished());
}

#[test]
fn test_stats_over_self_play() {
    let mut stats = MatchStats::new();
    for seed in 0..20 {
        let mut game = Match::new(&MatchConfig::default().with_seed(seed)).unwrap();
        let mut human = RandomPolicy::new(seed);
        let mut cpu = HoldbackPolicy::default();
        let winner = game.play_out(&mut human, &mut cpu, 2_000).unwrap();
        stats.record(winner == Some(Seat::Human));
    }

    assert_eq!(stats.games, 20);
    assert!(stats.wins <= 20);
    assert!(stats.max_streak >= stats.streak);
}
