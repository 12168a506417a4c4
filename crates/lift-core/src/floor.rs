//! Floor numbers.
//!
//! Floors are numbered from 1 (the ground floor) to `floors` inclusive, the
//! way building occupants count them.  Wait queues are stored in a `Vec`
//! and addressed through [`Floor::index`].

use std::fmt;

/// A 1-based floor number.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// The floor every car starts on unless told otherwise.
    pub const GROUND: Floor = Floor(1);

    /// Zero-based offset for per-floor `Vec` storage.
    ///
    /// # Panics
    /// Panics in debug mode for `Floor(0)`, which is never a valid floor.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The floor whose storage offset is `index`.
    #[inline]
    pub fn from_index(index: usize) -> Floor {
        Floor(index as u32 + 1)
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    #[inline]
    pub fn above(self) -> Floor {
        Floor(self.0 + 1)
    }

    #[inline]
    pub fn below(self) -> Floor {
        Floor(self.0.saturating_sub(1))
    }

    /// `true` if this floor exists in a building with `floors` floors.
    #[inline]
    pub fn within(self, floors: u32) -> bool {
        (1..=floors).contains(&self.0)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
