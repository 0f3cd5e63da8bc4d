//! Strongly typed, zero-cost identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into per-seat `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helpers for clarity.
//!
//! A `ForkId` equals the ring position of the fork; philosopher `i` reaches
//! fork `i` on the left and fork `(i + 1) % n` on the right.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a philosopher seated at the table, `0..n`.
    pub struct PhilosopherId(u32);
}

typed_id! {
    /// Ring index of a fork on the table, `0..n`.
    pub struct ForkId(u32);
}

impl ForkId {
    /// The fork to the left of philosopher `who` at a table of `n` seats.
    #[inline]
    pub fn left_of(who: PhilosopherId, _n: usize) -> ForkId {
        ForkId(who.0)
    }

    /// The fork to the right of philosopher `who` at a table of `n` seats.
    #[inline]
    pub fn right_of(who: PhilosopherId, n: usize) -> ForkId {
        ForkId(((who.index() + 1) % n) as u32)
    }
}
