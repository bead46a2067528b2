//! Named capture slots.

use std::fmt;

/// A named capture slot in a pattern.
///
/// The set is fixed and small; each slot binds to exactly one descriptor
/// per match, and every later occurrence of the same slot must see that
/// same descriptor.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Placeholder {
    T = 0,
    U = 1,
    V = 2,
    T1 = 3,
    T2 = 4,
    T3 = 5,
    T4 = 6,
    T5 = 7,
    T6 = 8,
    T7 = 9,
    T8 = 10,
}

impl Placeholder {
    /// Number of distinct slots.
    pub const COUNT: usize = 11;

    /// Every slot, in slot order.
    pub const ALL: [Placeholder; Self::COUNT] = [
        Self::T,
        Self::U,
        Self::V,
        Self::T1,
        Self::T2,
        Self::T3,
        Self::T4,
        Self::T5,
        Self::T6,
        Self::T7,
        Self::T8,
    ];

    /// Slot number, `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name as written in patterns.
    pub const fn name(self) -> &'static str {
        match self {
            Self::T => "T",
            Self::U => "U",
            Self::V => "V",
            Self::T1 => "T1",
            Self::T2 => "T2",
            Self::T3 => "T3",
            Self::T4 => "T4",
            Self::T5 => "T5",
            Self::T6 => "T6",
            Self::T7 => "T7",
            Self::T8 => "T8",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
