//! Table events emitted by a committed play.
//!
//! A commit can trigger several effects at once (a pair of Jacks that also
//! binds suits, four 8s that revolt and cut). `GameEvents` is the union of
//! everything one commit triggered. It carries no state and is consumed by
//! the caller to decide the follow-up flow: sweep-and-replay, skip, or a
//! normal turn switch.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// A single table effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// Visible ordering reversal: permanent revolution toggled, or J-back
    /// switched on.
    Revolution,
    /// An 8 was played: sweep the field, same seat leads.
    EightEffect,
    /// A 5 was played: skip the opponent, field stays.
    FiveEffect,
    /// A Jack turned on the temporary reversal.
    JBack,
    /// Suits locked for the rest of this field.
    SuitBind,
}

impl GameEvent {
    /// All events in declaration order.
    pub const ALL: [GameEvent; 5] = [
        GameEvent::Revolution,
        GameEvent::EightEffect,
        GameEvent::FiveEffect,
        GameEvent::JBack,
        GameEvent::SuitBind,
    ];

    /// Short announcement text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            GameEvent::Revolution => "Revolution!",
            GameEvent::EightEffect => "8-Cut!",
            GameEvent::FiveEffect => "5-Skip!",
            GameEvent::JBack => "J-Back!",
            GameEvent::SuitBind => "Suit Binding!",
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of events triggered by one commit.
///
/// ```
/// use daifugo_duel::rules::{GameEvent, GameEvents};
///
/// let events = GameEvents::from(GameEvent::JBack) | GameEvent::Revolution;
/// assert!(events.contains(GameEvent::JBack));
/// assert!(!events.contains(GameEvent::SuitBind));
/// assert_eq!(events.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameEvents {
    revolution: bool,
    eight_effect: bool,
    five_effect: bool,
    j_back: bool,
    suit_bind: bool,
}

impl GameEvents {
    /// The empty set.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            revolution: false,
            eight_effect: false,
            five_effect: false,
            j_back: false,
            suit_bind: false,
        }
    }

    fn slot(&self, event: GameEvent) -> bool {
        match event {
            GameEvent::Revolution => self.revolution,
            GameEvent::EightEffect => self.eight_effect,
            GameEvent::FiveEffect => self.five_effect,
            GameEvent::JBack => self.j_back,
            GameEvent::SuitBind => self.suit_bind,
        }
    }

    fn slot_mut(&mut self, event: GameEvent) -> &mut bool {
        match event {
            GameEvent::Revolution => &mut self.revolution,
            GameEvent::EightEffect => &mut self.eight_effect,
            GameEvent::FiveEffect => &mut self.five_effect,
            GameEvent::JBack => &mut self.j_back,
            GameEvent::SuitBind => &mut self.suit_bind,
        }
    }

    /// Add an event to the set.
    pub fn insert(&mut self, event: GameEvent) {
        *self.slot_mut(event) = true;
    }

    #[must_use]
    pub fn contains(&self, event: GameEvent) -> bool {
        self.slot(event)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Union of two sets.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let mut out = self;
        for event in other.iter() {
            out.insert(event);
        }
        out
    }

    /// Iterate over contained events in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = GameEvent> + '_ {
        GameEvent::ALL.into_iter().filter(|&e| self.contains(e))
    }
}

impl From<GameEvent> for GameEvents {
    fn from(event: GameEvent) -> Self {
        let mut events = Self::none();
        events.insert(event);
        events
    }
}

impl FromIterator<GameEvent> for GameEvents {
    fn from_iter<I: IntoIterator<Item = GameEvent>>(iter: I) -> Self {
        let mut events = Self::none();
        for event in iter {
            events.insert(event);
        }
        events
    }
}

impl BitOr for GameEvents {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOr<GameEvent> for GameEvents {
    type Output = Self;

    fn bitor(mut self, rhs: GameEvent) -> Self::Output {
        self.insert(rhs);
        self
    }
}

impl BitOrAssign for GameEvents {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitOrAssign<GameEvent> for GameEvents {
    fn bitor_assign(&mut self, rhs: GameEvent) {
        self.insert(rhs);
    }
}

impl std::fmt::Display for GameEvents {
    /// Space-separated announcement, e.g. `"Revolution! J-Back!"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, event) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(event.label())?;
        }
        Ok(())
    }
}
