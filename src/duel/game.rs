//! Headless two-seat match: deal, turn flow and win detection.

use tracing::{debug, info, warn};

use crate::ai::MovePolicy;
use crate::core::{Card, GameRng, MatchConfig, Play, Seat, SeatMap, MAX_HAND_SIZE};
use crate::rules::{DisplayCards, GameEvent, GameEvents, RuleState};
use crate::smart_play::resolve_tap;

use super::error::MatchError;

/// What the acting seat did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnAction {
    /// Cards went onto the field.
    Played(Play),
    /// Declined to follow; the field was swept.
    Passed,
    /// A policy found nothing it wanted to lead; the lead moved across.
    YieldedLead,
}

/// Result of one accepted turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Seat that acted.
    pub seat: Seat,
    pub action: TurnAction,
    /// Events triggered by the play (empty for passes).
    pub events: GameEvents,
    /// Whether the field was cleared as part of this turn.
    pub swept: bool,
    /// Seat to act next, `None` once the match is over.
    pub next: Option<Seat>,
    /// Set when this turn emptied the acting seat's hand.
    pub winner: Option<Seat>,
}

/// A single duel in progress.
///
/// Owns both hands, the field and the rule state. Every mutation goes
/// through `play`, `pass`, `tap` or `step`, each of which either applies a
/// whole turn or refuses it without side effects.
#[derive(Clone, Debug)]
pub struct Match {
    rules: RuleState,
    hands: SeatMap<Vec<Card>>,
    field: Play,
    to_act: Seat,
    winner: Option<Seat>,
    dice: Vec<u8>,
    hand_size: usize,
    turns: u32,
}

impl Match {
    /// Deal a new match from `config`.
    ///
    /// Dice, shuffle and lead choice each draw from their own stream of the
    /// config seed, so the same config always deals the same match.
    pub fn new(config: &MatchConfig) -> Result<Self, MatchError> {
        let root = GameRng::new(config.seed);

        let (dice, hand_size) = config.hand_size.roll(&mut root.for_context("dice"));
        if hand_size == 0 || hand_size > MAX_HAND_SIZE {
            return Err(MatchError::InvalidHandSize(hand_size));
        }

        let mut deck = Card::deck();
        root.for_context("shuffle").shuffle(&mut deck);
        let human = deck[..hand_size].to_vec();
        let cpu = deck[hand_size..hand_size * 2].to_vec();

        let first = config.first_seat.unwrap_or_else(|| {
            if root.for_context("lead").gen_bool(0.5) {
                Seat::Human
            } else {
                Seat::Cpu
            }
        });

        let mut game = Self::assemble(human, cpu, first);
        game.dice = dice;
        game.hand_size = hand_size;

        info!(
            seed = config.seed,
            hand_size,
            dice = ?game.dice,
            first = %first,
            "match dealt"
        );
        Ok(game)
    }

    /// Start from explicit hands.
    ///
    /// Both hands must be non-empty and no card may appear twice across
    /// them.
    pub fn from_hands(human: Vec<Card>, cpu: Vec<Card>, first: Seat) -> Result<Self, MatchError> {
        for hand in [&human, &cpu] {
            if hand.is_empty() || hand.len() > MAX_HAND_SIZE {
                return Err(MatchError::InvalidHandSize(hand.len()));
            }
        }

        let all: Vec<Card> = human.iter().chain(cpu.iter()).copied().collect();
        for (i, card) in all.iter().enumerate() {
            if all[..i].contains(card) {
                return Err(MatchError::DuplicateCard(*card));
            }
        }

        let hand_size = human.len().max(cpu.len());
        let mut game = Self::assemble(human, cpu, first);
        game.hand_size = hand_size;
        Ok(game)
    }

    fn assemble(mut human: Vec<Card>, mut cpu: Vec<Card>, first: Seat) -> Self {
        human.sort();
        cpu.sort();

        let mut hands = SeatMap::with_value(Vec::new());
        hands[Seat::Human] = human;
        hands[Seat::Cpu] = cpu;

        let mut rules = RuleState::new();
        rules.reset_round();

        Self {
            rules,
            hands,
            field: Play::new(),
            to_act: first,
            winner: None,
            dice: Vec::new(),
            hand_size: 0,
            turns: 0,
        }
    }

    // === Accessors ===

    /// A seat's hand, weakest card first.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat]
    }

    /// The standing field (empty on a lead).
    #[must_use]
    pub fn field(&self) -> &[Card] {
        &self.field
    }

    #[must_use]
    pub fn rules(&self) -> &RuleState {
        &self.rules
    }

    #[must_use]
    pub fn to_act(&self) -> Seat {
        self.to_act
    }

    /// Whether the seat to act is leading a fresh field.
    #[must_use]
    pub fn is_lead(&self) -> bool {
        self.field.is_empty()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Faces rolled for the hand size (empty for fixed sizes).
    #[must_use]
    pub fn dice(&self) -> &[u8] {
        &self.dice
    }

    /// Cards dealt to each seat.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// Accepted turns so far.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    // === Turn operations ===

    /// Play `cards` from `seat`'s hand.
    pub fn play(&mut self, seat: Seat, cards: &[Card]) -> Result<TurnOutcome, MatchError> {
        self.check_turn(seat)?;

        if cards.is_empty() {
            return Err(MatchError::EmptyPlay);
        }
        let hand = &self.hands[seat];
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(MatchError::DuplicateCard(*card));
            }
            if !hand.contains(card) {
                return Err(MatchError::CardNotInHand(*card));
            }
        }
        if !self.rules.can_play(cards, &self.field) {
            debug!(
                %seat,
                play = %DisplayCards(cards),
                field = %DisplayCards(&self.field),
                "play rejected"
            );
            return Err(MatchError::IllegalPlay);
        }

        Ok(self.apply_play(seat, Play::from_slice(cards)))
    }

    /// Decline to follow. Sweeps the field; the opponent leads.
    pub fn pass(&mut self, seat: Seat) -> Result<TurnOutcome, MatchError> {
        self.check_turn(seat)?;
        if self.field.is_empty() {
            return Err(MatchError::CannotPassOnLead);
        }

        Ok(self.hand_over(seat, TurnAction::Passed))
    }

    /// Smart play: resolve a tapped card and play it when the follow is
    /// forced.
    ///
    /// Returns `Ok(None)` when the tap is ambiguous or cannot follow; the
    /// caller then falls back to explicit selection.
    pub fn tap(&mut self, seat: Seat, card: Card) -> Result<Option<TurnOutcome>, MatchError> {
        self.check_turn(seat)?;
        if !self.hands[seat].contains(&card) {
            return Err(MatchError::CardNotInHand(card));
        }

        match resolve_tap(card, &self.hands[seat], &self.field, &self.rules) {
            Some(play) => Ok(Some(self.apply_play(seat, play))),
            None => Ok(None),
        }
    }

    /// Let `policy` act for the seat to move.
    ///
    /// A decline while following is a pass. A decline on a lead hands the
    /// lead to the opponent.
    pub fn step<P: MovePolicy + ?Sized>(&mut self, policy: &mut P) -> Result<TurnOutcome, MatchError> {
        if self.winner.is_some() {
            return Err(MatchError::Finished);
        }
        let seat = self.to_act;

        match policy.decide_move(&self.rules, &self.hands[seat], &self.field) {
            Some(play) => self.play(seat, &play).inspect_err(|err| {
                warn!(%seat, policy = policy.name(), %err, "policy chose an illegal play");
            }),
            None if self.field.is_empty() => {
                debug!(%seat, policy = policy.name(), "nothing to lead, yielding");
                Ok(self.hand_over(seat, TurnAction::YieldedLead))
            }
            None => self.pass(seat),
        }
    }

    /// Alternate `human` and `cpu` policies until someone wins or
    /// `max_turns` turns have been taken. Returns the winner, if any.
    pub fn play_out(
        &mut self,
        human: &mut dyn MovePolicy,
        cpu: &mut dyn MovePolicy,
        max_turns: u32,
    ) -> Result<Option<Seat>, MatchError> {
        while self.winner.is_none() && self.turns < max_turns {
            match self.to_act {
                Seat::Human => self.step(&mut *human)?,
                Seat::Cpu => self.step(&mut *cpu)?,
            };
        }
        Ok(self.winner)
    }

    // === Internals ===

    fn check_turn(&self, seat: Seat) -> Result<(), MatchError> {
        if self.winner.is_some() {
            return Err(MatchError::Finished);
        }
        if seat != self.to_act {
            return Err(MatchError::NotYourTurn {
                expected: self.to_act,
                actual: seat,
            });
        }
        Ok(())
    }

    /// Commit an already-validated play and apply its flow consequences.
    fn apply_play(&mut self, seat: Seat, play: Play) -> TurnOutcome {
        self.hands[seat].retain(|card| !play.contains(card));
        let previous = std::mem::replace(&mut self.field, play.clone());
        let events = self.rules.commit_play(&self.field, &previous);
        self.turns += 1;

        if self.hands[seat].is_empty() {
            self.winner = Some(seat);
            info!(winner = %seat, turns = self.turns, "match finished");
            return TurnOutcome {
                seat,
                action: TurnAction::Played(play),
                events,
                swept: false,
                next: None,
                winner: Some(seat),
            };
        }

        let (swept, next) = if events.contains(GameEvent::EightEffect) {
            self.sweep();
            (true, seat)
        } else if events.contains(GameEvent::FiveEffect) {
            (false, seat)
        } else {
            (false, seat.opponent())
        };
        self.to_act = next;

        debug!(
            %seat,
            play = %DisplayCards(&play),
            %events,
            left = self.hands[seat].len(),
            next = %next,
            "turn played"
        );

        TurnOutcome {
            seat,
            action: TurnAction::Played(play),
            events,
            swept,
            next: Some(next),
            winner: None,
        }
    }

    /// Give the lead to `seat`'s opponent on a swept field.
    fn hand_over(&mut self, seat: Seat, action: TurnAction) -> TurnOutcome {
        let next = seat.opponent();
        let swept = !self.field.is_empty();
        self.sweep();
        self.to_act = next;
        self.turns += 1;

        debug!(%seat, ?action, next = %next, "turn handed over");

        TurnOutcome {
            seat,
            action,
            events: GameEvents::none(),
            swept,
            next: Some(next),
            winner: None,
        }
    }

    fn sweep(&mut self) {
        self.field.clear();
        self.rules.reset_field();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{HoldbackConfig, HoldbackPolicy};
    use crate::core::card::parse_cards;
    use crate::core::HandSize;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).unwrap()
    }

    fn duel(human: &str, cpu: &str, first: Seat) -> Match {
        Match::from_hands(cards(human), cards(cpu), first).unwrap()
    }

    #[test]
    fn test_deal_from_config() {
        let game = Match::new(&MatchConfig::default().with_seed(9)).unwrap();

        let size = game.hand_size();
        assert!((2..=12).contains(&size));
        assert_eq!(game.dice().len(), 2);
        assert_eq!(game.dice().iter().map(|&d| d as usize).sum::<usize>(), size);
        assert_eq!(game.hand(Seat::Human).len(), size);
        assert_eq!(game.hand(Seat::Cpu).len(), size);
        assert!(game.is_lead());
        assert!(!game.is_finished());

        for seat in Seat::ALL {
            let hand = game.hand(seat);
            assert!(hand.windows(2).all(|w| w[0] < w[1]), "hand should be sorted");
        }
        assert!(game
            .hand(Seat::Human)
            .iter()
            .all(|c| !game.hand(Seat::Cpu).contains(c)));
    }

    #[test]
    fn test_invalid_hand_size() {
        let config = MatchConfig::default().with_fixed_hand_size(27);
        assert_eq!(Match::new(&config).unwrap_err(), MatchError::InvalidHandSize(27));

        let config = MatchConfig::default().with_fixed_hand_size(0);
        assert_eq!(Match::new(&config).unwrap_err(), MatchError::InvalidHandSize(0));

        let config = MatchConfig {
            hand_size: HandSize::Dice { count: 0, sides: 6 },
            ..MatchConfig::default()
        };
        assert!(Match::new(&config).is_err());
    }

    #[test]
    fn test_from_hands_rejects_shared_card() {
        let err = Match::from_hands(cards("3S 4H"), cards("4H 9C"), Seat::Human).unwrap_err();
        assert_eq!(err, MatchError::DuplicateCard("4H".parse().unwrap()));
    }

    #[test]
    fn test_turn_order_enforced() {
        let mut game = duel("3S 9H", "4D 10C", Seat::Human);
        let err = game.play(Seat::Cpu, &cards("4D")).unwrap_err();
        assert_eq!(
            err,
            MatchError::NotYourTurn {
                expected: Seat::Human,
                actual: Seat::Cpu
            }
        );
    }

    #[test]
    fn test_play_validation() {
        let mut game = duel("3S 9H 9D", "4D 10C", Seat::Human);

        assert_eq!(game.play(Seat::Human, &[]).unwrap_err(), MatchError::EmptyPlay);
        assert_eq!(
            game.play(Seat::Human, &cards("4D")).unwrap_err(),
            MatchError::CardNotInHand("4D".parse().unwrap())
        );
        assert_eq!(
            game.play(Seat::Human, &cards("9H 9H")).unwrap_err(),
            MatchError::DuplicateCard("9H".parse().unwrap())
        );
        assert_eq!(
            game.play(Seat::Human, &cards("3S 9H")).unwrap_err(),
            MatchError::IllegalPlay
        );

        // Nothing above changed the match.
        assert_eq!(game.hand(Seat::Human).len(), 3);
        assert_eq!(game.turns(), 0);
    }

    #[test]
    fn test_normal_play_switches_turn() {
        let mut game = duel("3S 9H", "4D 10C", Seat::Human);
        let outcome = game.play(Seat::Human, &cards("3S")).unwrap();

        assert_eq!(outcome.next, Some(Seat::Cpu));
        assert!(!outcome.swept);
        assert_eq!(game.field(), cards("3S").as_slice());
        assert_eq!(game.hand(Seat::Human), cards("9H").as_slice());
    }

    #[test]
    fn test_cannot_pass_on_lead() {
        let mut game = duel("3S 9H", "4D 10C", Seat::Human);
        assert_eq!(game.pass(Seat::Human).unwrap_err(), MatchError::CannotPassOnLead);
    }

    #[test]
    fn test_pass_sweeps_and_opponent_leads() {
        let mut game = duel("3S 9H", "4D 10C", Seat::Human);
        game.play(Seat::Human, &cards("9H")).unwrap();

        let outcome = game.pass(Seat::Cpu).unwrap();
        assert_eq!(outcome.action, TurnAction::Passed);
        assert!(outcome.swept);
        assert_eq!(outcome.next, Some(Seat::Human));
        assert!(game.is_lead());
    }

    #[test]
    fn test_eight_cut_keeps_lead() {
        let mut game = duel("8S 9H", "4D 10C", Seat::Human);
        let outcome = game.play(Seat::Human, &cards("8S")).unwrap();

        assert!(outcome.events.contains(GameEvent::EightEffect));
        assert!(outcome.swept);
        assert_eq!(outcome.next, Some(Seat::Human));
        assert!(game.is_lead());
    }

    #[test]
    fn test_five_skip_keeps_turn_with_field() {
        let mut game = duel("5S 9H", "4D 10C", Seat::Human);
        let outcome = game.play(Seat::Human, &cards("5S")).unwrap();

        assert!(outcome.events.contains(GameEvent::FiveEffect));
        assert!(!outcome.swept);
        assert_eq!(outcome.next, Some(Seat::Human));
        assert_eq!(game.field(), cards("5S").as_slice());

        // Following their own 5 with a 9.
        assert!(game.play(Seat::Human, &cards("9H")).is_ok());
    }

    #[test]
    fn test_sweep_clears_binding() {
        let mut game = duel("3S 5S 9D", "4S 10C", Seat::Human);
        game.play(Seat::Human, &cards("3S")).unwrap();
        game.play(Seat::Cpu, &cards("4S")).unwrap();
        assert!(game.rules().suit_bound());

        game.pass(Seat::Human).unwrap();
        assert!(!game.rules().suit_bound());
    }

    #[test]
    fn test_win_ends_match() {
        let mut game = duel("9H", "4D 10C", Seat::Human);
        let outcome = game.play(Seat::Human, &cards("9H")).unwrap();

        assert_eq!(outcome.winner, Some(Seat::Human));
        assert_eq!(outcome.next, None);
        assert_eq!(game.winner(), Some(Seat::Human));
        assert_eq!(game.play(Seat::Cpu, &cards("10C")).unwrap_err(), MatchError::Finished);
    }

    #[test]
    fn test_win_on_eight_ends_before_sweep() {
        let mut game = duel("8H", "4D", Seat::Human);
        let outcome = game.play(Seat::Human, &cards("8H")).unwrap();
        assert_eq!(outcome.winner, Some(Seat::Human));
        assert!(!outcome.swept);
    }

    #[test]
    fn test_tap_resolves_forced_pair() {
        let mut game = duel("3S 3H 9C", "4D 4C KH", Seat::Human);
        game.play(Seat::Human, &cards("3S 3H")).unwrap();

        let outcome = game.tap(Seat::Cpu, "4D".parse().unwrap()).unwrap().unwrap();
        assert_eq!(outcome.action, TurnAction::Played(Play::from_slice(&cards("4D 4C"))));
        assert_eq!(game.hand(Seat::Cpu), cards("KH").as_slice());
    }

    #[test]
    fn test_tap_ambiguous_changes_nothing() {
        let mut game = duel("9C 9D KS", "3S 4H", Seat::Human);

        assert_eq!(game.tap(Seat::Human, "9C".parse().unwrap()).unwrap(), None);
        assert_eq!(
            game.tap(Seat::Human, "2C".parse().unwrap()).unwrap_err(),
            MatchError::CardNotInHand("2C".parse().unwrap())
        );
        assert_eq!(game.turns(), 0);
    }

    #[test]
    fn test_step_policy_passes_when_following() {
        let mut game = duel("2S 3D", "5C KH", Seat::Human);
        game.play(Seat::Human, &cards("2S")).unwrap();

        let mut cpu = HoldbackPolicy::default();
        let outcome = game.step(&mut cpu).unwrap();
        assert_eq!(outcome.action, TurnAction::Passed);
        assert_eq!(game.to_act(), Seat::Human);
    }

    #[test]
    fn test_step_policy_yields_lead() {
        let mut game = duel("3S 4D", "8C 5D", Seat::Cpu);
        let mut cpu = HoldbackPolicy::default();

        let outcome = game.step(&mut cpu).unwrap();
        assert_eq!(outcome.action, TurnAction::YieldedLead);
        assert!(!outcome.swept);
        assert_eq!(game.to_act(), Seat::Human);
        assert!(game.is_lead());
    }

    #[test]
    fn test_play_out_finishes() {
        let mut game = Match::new(&MatchConfig::default().with_seed(5)).unwrap();
        let mut human = HoldbackPolicy::new(HoldbackConfig::without_holdback());
        let mut cpu = HoldbackPolicy::default();

        let winner = game.play_out(&mut human, &mut cpu, 500).unwrap();
        assert!(winner.is_some());
        assert!(game.hand(winner.unwrap()).is_empty());
    }
}
