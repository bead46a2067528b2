//! Stored representation of one type in the pool.

use crate::{ChanDir, Idx, Kind};

/// The data the pool keeps for each `Idx`.
///
/// Everything except `Named` is hash-consed: equal data means equal index.
/// Named types are always fresh, which is what makes them nominal and
/// lets them refer to themselves.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeData {
    /// A pre-interned scalar.
    Scalar(Kind),
    /// Struct type with its method set (sorted, deduplicated).
    Struct {
        name: Box<str>,
        methods: Box<[Box<str>]>,
    },
    /// Interface type with its method set (sorted, deduplicated).
    Interface {
        name: Box<str>,
        methods: Box<[Box<str>]>,
    },
    Pointer(Idx),
    Slice(Idx),
    Array {
        len: u64,
        elem: Idx,
    },
    Map {
        key: Idx,
        value: Idx,
    },
    Func {
        params: Box<[Idx]>,
        results: Box<[Idx]>,
    },
    Chan {
        dir: ChanDir,
        elem: Idx,
    },
    /// Named type. `underlying` is `Idx::NONE` until defined, and is never
    /// itself a named type once set.
    Named {
        name: Box<str>,
        underlying: Idx,
    },
}

impl TypeData {
    /// Kind of this entry, without following named types.
    ///
    /// Named entries report `Kind::Invalid`; the pool resolves them.
    pub fn kind(&self) -> Kind {
        match self {
            TypeData::Scalar(kind) => *kind,
            TypeData::Struct { .. } => Kind::Struct,
            TypeData::Interface { .. } => Kind::Interface,
            TypeData::Pointer(_) => Kind::Pointer,
            TypeData::Slice(_) => Kind::Slice,
            TypeData::Array { .. } => Kind::Array,
            TypeData::Map { .. } => Kind::Map,
            TypeData::Func { .. } => Kind::Func,
            TypeData::Chan { .. } => Kind::Chan,
            TypeData::Named { .. } => Kind::Invalid,
        }
    }
}
