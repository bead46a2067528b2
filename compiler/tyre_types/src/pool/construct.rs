//! Type construction helpers for the Pool.
//!
//! Provides ergonomic methods for creating compound types.

use crate::{ChanDir, Idx, Pool, PoolError, TypeData};

/// Sort and deduplicate a method list so lookups can binary-search it.
fn method_set(methods: &[&str]) -> Box<[Box<str>]> {
    let mut set: Vec<Box<str>> = methods.iter().map(|&m| Box::from(m)).collect();
    set.sort_unstable();
    set.dedup();
    set.into_boxed_slice()
}

impl Pool {
    // === Single-Element Constructors ===

    /// Create a pointer type `*elem`.
    pub fn pointer(&mut self, elem: Idx) -> Idx {
        self.intern(TypeData::Pointer(elem))
    }

    /// Create a slice type `[]elem`.
    pub fn slice(&mut self, elem: Idx) -> Idx {
        self.intern(TypeData::Slice(elem))
    }

    /// Create an array type `[len]elem`.
    pub fn array(&mut self, len: u64, elem: Idx) -> Idx {
        self.intern(TypeData::Array { len, elem })
    }

    /// Create a channel type with the given direction.
    pub fn chan(&mut self, dir: ChanDir, elem: Idx) -> Idx {
        self.intern(TypeData::Chan { dir, elem })
    }

    // === Two-Element Constructors ===

    /// Create a map type `map[key]value`.
    pub fn map(&mut self, key: Idx, value: Idx) -> Idx {
        self.intern(TypeData::Map { key, value })
    }

    // === Function Constructors ===

    /// Create a function type `func(params...) (results...)`.
    pub fn func(&mut self, params: &[Idx], results: &[Idx]) -> Idx {
        self.intern(TypeData::Func {
            params: params.into(),
            results: results.into(),
        })
    }

    /// Create a function type with no results.
    pub fn procedure(&mut self, params: &[Idx]) -> Idx {
        self.func(params, &[])
    }

    // === Nominal Constructors ===

    /// Create a struct type with the given method set.
    ///
    /// The same name and methods always produce the same type.
    pub fn struct_type(&mut self, name: &str, methods: &[&str]) -> Idx {
        self.intern(TypeData::Struct {
            name: name.into(),
            methods: method_set(methods),
        })
    }

    /// Create an interface type with the given method set.
    pub fn interface(&mut self, name: &str, methods: &[&str]) -> Idx {
        self.intern(TypeData::Interface {
            name: name.into(),
            methods: method_set(methods),
        })
    }

    // === Named Types ===

    /// Declare a new named type with no definition yet.
    ///
    /// Every call returns a distinct type, even for a repeated name.
    /// Until [`define`](Self::define) is called the type has kind
    /// `Kind::Invalid`.
    pub fn declare(&mut self, name: &str) -> Idx {
        self.push(TypeData::Named {
            name: name.into(),
            underlying: Idx::NONE,
        })
    }

    /// Give a declared named type its underlying type.
    ///
    /// A named `underlying` is resolved first, so `type A B` takes `B`'s
    /// underlying type.
    pub fn define(&mut self, named: Idx, underlying: Idx) -> Result<(), PoolError> {
        match self.get(named) {
            Some(TypeData::Named { underlying: existing, .. }) if !existing.is_none() => {
                return Err(PoolError::AlreadyDefined(named));
            }
            Some(TypeData::Named { .. }) => {}
            _ => return Err(PoolError::NotNamed(named)),
        }

        let resolved = self.underlying(underlying);
        if resolved.is_none() || self.get(resolved).is_none() {
            return Err(PoolError::Undefined(underlying));
        }

        if let Some(TypeData::Named { underlying: slot, .. }) = self.types.get_mut(named.index()) {
            *slot = resolved;
        }
        tracing::trace!(?named, ?resolved, "defined named type");
        Ok(())
    }

    /// Declare and define a named type in one step.
    ///
    /// `build` receives the new type's own handle, so the definition may
    /// refer to itself.
    pub fn named(
        &mut self,
        name: &str,
        build: impl FnOnce(&mut Pool, Idx) -> Idx,
    ) -> Result<Idx, PoolError> {
        let named = self.declare(name);
        let underlying = build(self, named);
        self.define(named, underlying)?;
        Ok(named)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
