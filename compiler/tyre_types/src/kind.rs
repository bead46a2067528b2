//! Type kind tags and channel directions.
//!
//! Every descriptor has a `Kind`. The kind decides which substructure
//! accessors are meaningful:
//! - scalars, structs, interfaces: none
//! - pointer, slice, array, channel: one element
//! - map: key and value
//! - function: parameter list and result list

use std::fmt;

use crate::Idx;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Kind {
    /// No type: the `NONE` sentinel or a named type that was never defined.
    Invalid = 0,

    // === Scalars (1-17) ===
    Bool = 1,
    Int = 2,
    Int8 = 3,
    Int16 = 4,
    Int32 = 5,
    Int64 = 6,
    Uint = 7,
    Uint8 = 8,
    Uint16 = 9,
    Uint32 = 10,
    Uint64 = 11,
    Uintptr = 12,
    Float32 = 13,
    Float64 = 14,
    Complex64 = 15,
    Complex128 = 16,
    String = 17,

    // === Nominal (32-33) ===
    /// Struct type, identified by name.
    Struct = 32,
    /// Interface type, identified by name and described by its method set.
    Interface = 33,

    // === Composite (48-53) ===
    /// Pointer `*E`.
    Pointer = 48,
    /// Slice `[]E`.
    Slice = 49,
    /// Array `[N]E`.
    Array = 50,
    /// Map `map[K]V`.
    Map = 51,
    /// Function `func(P...) (R...)`.
    Func = 52,
    /// Channel `chan E`, with a direction.
    Chan = 53,
}

impl Kind {
    /// Scalar kinds in pre-interned order: `SCALARS[i]` is the kind of
    /// `Idx::from_raw(i)`.
    pub const SCALARS: [Kind; Idx::SCALAR_COUNT as usize] = [
        Kind::Bool,
        Kind::Int,
        Kind::Int8,
        Kind::Int16,
        Kind::Int32,
        Kind::Int64,
        Kind::Uint,
        Kind::Uint8,
        Kind::Uint16,
        Kind::Uint32,
        Kind::Uint64,
        Kind::Uintptr,
        Kind::Float32,
        Kind::Float64,
        Kind::Complex64,
        Kind::Complex128,
        Kind::String,
    ];

    /// Check if this kind carries substructure.
    #[inline]
    pub const fn is_composite(self) -> bool {
        matches!(
            self,
            Self::Pointer | Self::Slice | Self::Array | Self::Map | Self::Func | Self::Chan
        )
    }

    /// Lowercase name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uintptr => "uintptr",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Complex64 => "complex64",
            Self::Complex128 => "complex128",
            Self::String => "string",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Pointer => "ptr",
            Self::Slice => "slice",
            Self::Array => "array",
            Self::Map => "map",
            Self::Func => "func",
            Self::Chan => "chan",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a channel type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChanDir {
    /// Receive-only `<-chan E`.
    Recv,
    /// Send-only `chan<- E`.
    Send,
    /// Bidirectional `chan E`.
    Both,
}

impl ChanDir {
    /// Type-syntax prefix for a channel of this direction.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Recv => "<-chan ",
            Self::Send => "chan<- ",
            Self::Both => "chan ",
        }
    }
}

impl fmt::Display for ChanDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().trim_end())
    }
}

#[cfg(test)]
mod tests;
