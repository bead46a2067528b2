//! Type descriptor handle.
//!
//! `Idx` is the descriptor the matcher works with. Every type lives in a
//! [`Pool`](crate::Pool) and is referred to by its 32-bit index.
//!
//! # Design
//!
//! - Scalar types have fixed indices (0-16) and need no pool lookup
//! - Descriptor identity is index equality
//! - Copy, lightweight passing

use std::fmt;

/// A 32-bit index into the type pool.
///
/// Two descriptors are the same type exactly when their indices are equal.
/// Structural types are hash-consed by the pool, so `[]int` built twice
/// yields the same `Idx`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Scalar Types (indices 0-16) ===
    // Pre-interned at pool creation, in `Kind::SCALARS` order.

    /// `bool`.
    pub const BOOL: Self = Self(0);
    /// `int`.
    pub const INT: Self = Self(1);
    /// `int8`.
    pub const INT8: Self = Self(2);
    /// `int16`.
    pub const INT16: Self = Self(3);
    /// `int32`.
    pub const INT32: Self = Self(4);
    /// `int64`.
    pub const INT64: Self = Self(5);
    /// `uint`.
    pub const UINT: Self = Self(6);
    /// `uint8`.
    pub const UINT8: Self = Self(7);
    /// `uint16`.
    pub const UINT16: Self = Self(8);
    /// `uint32`.
    pub const UINT32: Self = Self(9);
    /// `uint64`.
    pub const UINT64: Self = Self(10);
    /// `uintptr`.
    pub const UINTPTR: Self = Self(11);
    /// `float32`.
    pub const FLOAT32: Self = Self(12);
    /// `float64`.
    pub const FLOAT64: Self = Self(13);
    /// `complex64`.
    pub const COMPLEX64: Self = Self(14);
    /// `complex128`.
    pub const COMPLEX128: Self = Self(15);
    /// `string`.
    pub const STRING: Self = Self(16);

    /// Number of pre-interned scalar types.
    pub const SCALAR_COUNT: u32 = 17;

    /// Sentinel value indicating no type.
    pub const NONE: Self = Self(u32::MAX);

    /// Create an index from a raw u32 value.
    ///
    /// The index is only meaningful for the pool that produced it.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position of this type in the pool's storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the source-level name of a scalar type.
    ///
    /// Returns `None` for pool-allocated types, whose rendering needs
    /// the pool (see `Pool::format_type`).
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("bool"),
            1 => Some("int"),
            2 => Some("int8"),
            3 => Some("int16"),
            4 => Some("int32"),
            5 => Some("int64"),
            6 => Some("uint"),
            7 => Some("uint8"),
            8 => Some("uint16"),
            9 => Some("uint32"),
            10 => Some("uint64"),
            11 => Some("uintptr"),
            12 => Some("float32"),
            13 => Some("float64"),
            14 => Some("complex64"),
            15 => Some("complex128"),
            16 => Some("string"),
            _ => None,
        }
    }
}

impl Default for Idx {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Idx::{}", name.to_ascii_uppercase()),
            None if self.is_none() => write!(f, "Idx::NONE"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None if self.is_none() => f.write_str("<none>"),
            None => write!(f, "type#{}", self.0),
        }
    }
}

// Idx must stay exactly 4 bytes; bindings store one per placeholder.
const _: () = assert!(std::mem::size_of::<Idx>() == 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_indices_are_dense() {
        assert_eq!(Idx::BOOL.raw(), 0);
        assert_eq!(Idx::INT.raw(), 1);
        assert_eq!(Idx::STRING.raw(), Idx::SCALAR_COUNT - 1);
    }

    #[test]
    fn none_checks() {
        assert!(Idx::NONE.is_none());
        assert!(!Idx::INT.is_none());
        assert_eq!(Idx::default(), Idx::NONE);
    }

    #[test]
    fn every_scalar_has_a_name() {
        for raw in 0..Idx::SCALAR_COUNT {
            assert!(Idx::from_raw(raw).name().is_some(), "scalar {raw} unnamed");
        }
        assert_eq!(Idx::from_raw(Idx::SCALAR_COUNT).name(), None);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(Idx::INT.to_string(), "int");
        assert_eq!(Idx::COMPLEX128.to_string(), "complex128");
        assert_eq!(Idx::NONE.to_string(), "<none>");
        assert_eq!(Idx::from_raw(40).to_string(), "type#40");

        assert_eq!(format!("{:?}", Idx::UINT8), "Idx::UINT8");
        assert_eq!(format!("{:?}", Idx::NONE), "Idx::NONE");
        assert_eq!(format!("{:?}", Idx::from_raw(40)), "Idx(40)");
    }
}
