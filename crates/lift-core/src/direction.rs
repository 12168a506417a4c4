//! Travel intent of an elevator car, or of a waiting passenger.

use std::fmt;

use crate::Floor;

/// An elevator's current travel intent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Direction needed to travel from `from` to `to`; `Idle` when equal.
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Direction {
        use std::cmp::Ordering::*;
        match to.cmp(&from) {
            Greater => Direction::Up,
            Less    => Direction::Down,
            Equal   => Direction::Idle,
        }
    }

    #[inline]
    pub fn is_idle(self) -> bool {
        self == Direction::Idle
    }

    /// `true` if a car heading this way may still serve `target` from
    /// `current` without reversing.  An idle car can serve any floor.
    #[inline]
    pub fn admits(self, current: Floor, target: Floor) -> bool {
        match self {
            Direction::Up   => target >= current,
            Direction::Down => target <= current,
            Direction::Idle => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
