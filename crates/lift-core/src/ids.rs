//! Strongly typed, zero-cost identifier wrappers.
//!
//! Ids are assigned from 1 upwards (passenger `1..=total_people`, elevator
//! `1..=elevators`), so `.index()` is *not* a `Vec` offset; use
//! [`ElevatorId::slot`] when indexing the fleet.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $prefix:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw id as `usize`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl From<$name> for u32 {
            #[inline(always)]
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

typed_id! {
    /// Identity of one transport request.  Monotonically assigned in
    /// admission order, starting at 1.
    pub struct PersonId(u32) => "P";
}

typed_id! {
    /// Identity of one elevator car, starting at 1.
    pub struct ElevatorId(u32) => "E";
}

impl ElevatorId {
    /// Id of the car stored at `slot` in the fleet `Vec`.
    #[inline]
    pub fn from_slot(slot: usize) -> Self {
        ElevatorId(slot as u32 + 1)
    }

    /// Position of this car in the fleet `Vec`.
    #[inline]
    pub fn slot(self) -> usize {
        self.index() - 1
    }
}
