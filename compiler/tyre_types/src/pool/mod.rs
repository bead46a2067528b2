//! Type pool: storage and lookup for all descriptors.
//!
//! The pool hash-conses structural types, so building `map[string]int`
//! twice returns the same `Idx` and descriptor identity is plain index
//! equality. Struct and interface types are keyed by name and method set.
//! Named types are never deduplicated; each `declare` yields a new type.
//!
//! # Recursive Types
//!
//! A named type is declared first and defined afterwards, so its own
//! handle can appear in its definition:
//!
//! ```text
//! let rec = pool.declare("recFunc");
//! let body = pool.func(&[], &[rec]);
//! pool.define(rec, body)?;          // type recFunc func() recFunc
//! ```

mod construct;
mod format;

use rustc_hash::FxHashMap;

use crate::{ChanDir, Idx, Kind, TypeData, TypeSource};

/// Storage for every type descriptor.
pub struct Pool {
    /// Type data, indexed by `Idx::index()`.
    types: Vec<TypeData>,
    /// Deduplication table for every entry except named types.
    dedup: FxHashMap<TypeData, Idx>,
}

impl Pool {
    /// Create a pool with the scalar types pre-interned.
    pub fn new() -> Self {
        let mut pool = Self {
            types: Vec::with_capacity(64),
            dedup: FxHashMap::default(),
        };
        for kind in Kind::SCALARS {
            pool.intern(TypeData::Scalar(kind));
        }
        debug_assert_eq!(pool.len(), Idx::SCALAR_COUNT as usize);
        pool
    }

    /// Number of types in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: scalars are pre-interned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Intern `data`, returning the existing index if already present.
    fn intern(&mut self, data: TypeData) -> Idx {
        if let Some(&idx) = self.dedup.get(&data) {
            return idx;
        }
        let idx = self.push(data.clone());
        self.dedup.insert(data, idx);
        idx
    }

    /// Append without deduplication.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a pool never approaches u32::MAX types"
    )]
    fn push(&mut self, data: TypeData) -> Idx {
        let idx = Idx::from_raw(self.types.len() as u32);
        self.types.push(data);
        idx
    }

    /// Stored data for `idx`, without resolving named types.
    #[inline]
    pub fn get(&self, idx: Idx) -> Option<&TypeData> {
        self.types.get(idx.index())
    }

    /// Resolve a named type to its underlying type.
    ///
    /// Returns `idx` itself for every other type, and `Idx::NONE` for an
    /// undefined named type.
    pub fn underlying(&self, idx: Idx) -> Idx {
        match self.get(idx) {
            Some(TypeData::Named { underlying, .. }) => *underlying,
            _ => idx,
        }
    }

    /// Data of the underlying type of `idx`.
    fn resolved(&self, idx: Idx) -> Option<&TypeData> {
        self.get(self.underlying(idx))
    }

    /// Kind of `idx`, looking through named types.
    pub fn kind(&self, idx: Idx) -> Kind {
        self.resolved(idx).map_or(Kind::Invalid, TypeData::kind)
    }

    /// Check if `idx` was created by `declare`.
    pub fn is_named(&self, idx: Idx) -> bool {
        matches!(self.get(idx), Some(TypeData::Named { .. }))
    }

    /// Name of a struct, interface or named type.
    pub fn name(&self, idx: Idx) -> Option<&str> {
        match self.get(idx)? {
            TypeData::Struct { name, .. }
            | TypeData::Interface { name, .. }
            | TypeData::Named { name, .. } => Some(&**name),
            _ => None,
        }
    }

    /// Element of a pointer, slice, array or channel; `NONE` otherwise.
    pub fn elem(&self, idx: Idx) -> Idx {
        match self.resolved(idx) {
            Some(
                TypeData::Pointer(elem)
                | TypeData::Slice(elem)
                | TypeData::Array { elem, .. }
                | TypeData::Chan { elem, .. },
            ) => *elem,
            _ => Idx::NONE,
        }
    }

    /// Direction of a channel type.
    pub fn chan_dir(&self, idx: Idx) -> Option<ChanDir> {
        match self.resolved(idx) {
            Some(TypeData::Chan { dir, .. }) => Some(*dir),
            _ => None,
        }
    }

    /// Key type of a map; `NONE` otherwise.
    pub fn map_key(&self, idx: Idx) -> Idx {
        match self.resolved(idx) {
            Some(TypeData::Map { key, .. }) => *key,
            _ => Idx::NONE,
        }
    }

    /// Value type of a map; `NONE` otherwise.
    pub fn map_value(&self, idx: Idx) -> Idx {
        match self.resolved(idx) {
            Some(TypeData::Map { value, .. }) => *value,
            _ => Idx::NONE,
        }
    }

    /// Parameter types of a function; empty otherwise.
    pub fn params(&self, idx: Idx) -> &[Idx] {
        match self.resolved(idx) {
            Some(TypeData::Func { params, .. }) => &params[..],
            _ => &[],
        }
    }

    /// Result types of a function; empty otherwise.
    pub fn results(&self, idx: Idx) -> &[Idx] {
        match self.resolved(idx) {
            Some(TypeData::Func { results, .. }) => &results[..],
            _ => &[],
        }
    }

    /// Method set of `idx`.
    ///
    /// Structs and interfaces carry their own; a pointer to a struct
    /// exposes the struct's methods. Named types expose the methods of
    /// their underlying type.
    pub fn methods(&self, idx: Idx) -> &[Box<str>] {
        match self.resolved(idx) {
            Some(TypeData::Struct { methods, .. } | TypeData::Interface { methods, .. }) => {
                &methods[..]
            }
            Some(TypeData::Pointer(elem)) => match self.resolved(*elem) {
                Some(TypeData::Struct { methods, .. }) => &methods[..],
                _ => &[],
            },
            _ => &[],
        }
    }

    /// Assignability: identical types, or an interface target whose
    /// methods are all present in the source's method set.
    pub fn is_assignable_to(&self, from: Idx, to: Idx) -> bool {
        if from == to {
            return self.get(from).is_some();
        }
        if self.kind(from) == Kind::Invalid || self.kind(to) != Kind::Interface {
            return false;
        }

        let have = self.methods(from);
        self.methods(to)
            .iter()
            .all(|want| have.binary_search(want).is_ok())
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeSource for Pool {
    #[inline]
    fn contains(&self, ty: Idx) -> bool {
        self.get(ty).is_some()
    }

    #[inline]
    fn kind(&self, ty: Idx) -> Kind {
        Pool::kind(self, ty)
    }

    #[inline]
    fn is_named(&self, ty: Idx) -> bool {
        Pool::is_named(self, ty)
    }

    #[inline]
    fn elem(&self, ty: Idx) -> Idx {
        Pool::elem(self, ty)
    }

    #[inline]
    fn chan_dir(&self, ty: Idx) -> Option<ChanDir> {
        Pool::chan_dir(self, ty)
    }

    #[inline]
    fn map_key(&self, ty: Idx) -> Idx {
        Pool::map_key(self, ty)
    }

    #[inline]
    fn map_value(&self, ty: Idx) -> Idx {
        Pool::map_value(self, ty)
    }

    #[inline]
    fn params(&self, ty: Idx) -> &[Idx] {
        Pool::params(self, ty)
    }

    #[inline]
    fn results(&self, ty: Idx) -> &[Idx] {
        Pool::results(self, ty)
    }

    #[inline]
    fn is_assignable_to(&self, from: Idx, to: Idx) -> bool {
        Pool::is_assignable_to(self, from, to)
    }

    fn describe(&self, ty: Idx) -> String {
        self.format_type(ty)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
