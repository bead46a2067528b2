//! Capture bindings.
//!
//! A binding set maps each [`Placeholder`] to at most one descriptor. It is
//! a fixed-size `Copy` array, so when the engine forks a branch the new
//! branch gets its own copy and no two live branches ever share storage.

use std::fmt;

use tyre_types::Idx;

use crate::Placeholder;

/// Placeholder → descriptor bindings produced by a match.
///
/// Unbound slots hold `Idx::NONE` internally and read as `None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bindings {
    slots: [Idx; Placeholder::COUNT],
}

impl Bindings {
    /// Empty binding set.
    pub const fn new() -> Self {
        Self {
            slots: [Idx::NONE; Placeholder::COUNT],
        }
    }

    /// Descriptor bound to `placeholder`, if any.
    #[inline]
    pub fn get(&self, placeholder: Placeholder) -> Option<Idx> {
        let ty = self.slots[placeholder.index()];
        (!ty.is_none()).then_some(ty)
    }

    /// Bind `placeholder` to `ty`, returning the extended set.
    ///
    /// Binding an already bound slot succeeds only when the descriptor is
    /// the same. `Idx::NONE` is never bindable.
    #[must_use]
    pub fn bind(mut self, placeholder: Placeholder, ty: Idx) -> Option<Self> {
        if ty.is_none() {
            return None;
        }
        let slot = &mut self.slots[placeholder.index()];
        if slot.is_none() {
            *slot = ty;
            Some(self)
        } else if *slot == ty {
            Some(self)
        } else {
            None
        }
    }

    /// Check if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|ty| ty.is_none())
    }

    /// Number of bound placeholders.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|ty| !ty.is_none()).count()
    }

    /// Bound placeholders in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, Idx)> + '_ {
        Placeholder::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|ty| (p, ty)))
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
