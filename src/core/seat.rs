//! The two seats at the table and per-seat storage.
//!
//! ## Seat
//!
//! A duel always has exactly two participants: the human at the device and
//! the CPU opponent. `Seat::opponent` is the only turn-order rule needed.
//!
//! ## SeatMap
//!
//! Fixed two-slot storage indexed by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Cpu,
}

impl Seat {
    /// Both seats, human first.
    pub const ALL: [Seat; 2] = [Seat::Human, Seat::Cpu];

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Seat::Human => Seat::Cpu,
            Seat::Cpu => Seat::Human,
        }
    }

    /// Slot index (human = 0, cpu = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Cpu => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human => f.write_str("Human"),
            Seat::Cpu => f.write_str("CPU"),
        }
    }
}

/// Per-seat data storage.
///
/// ```
/// use daifugo_duel::core::{Seat, SeatMap};
///
/// let mut counts: SeatMap<u32> = SeatMap::with_value(0);
/// counts[Seat::Cpu] += 3;
/// assert_eq!(counts[Seat::Human], 0);
/// assert_eq!(counts[Seat::Cpu], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Human), factory(Seat::Cpu)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over `(seat, value)` pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
