//! Compiled-pattern cache.
//!
//! Compiling is cheap but not free, and the same handful of patterns tends
//! to be matched against many types. `PatternCache` keeps one compiled
//! automaton per distinct pattern and hands out shared references.
//!
//! # Thread Safety
//! Uses a `RwLock` around the map; compilation happens outside the lock
//! and the insert double-checks, so concurrent first uses of a pattern may
//! compile twice but always return the same automaton afterwards.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tyre_types::TypeSource;

use crate::{Automaton, Pattern, PatternError};

/// Pattern → compiled automaton cache.
///
/// Automata refer to descriptors of the source they were compiled
/// against, so one cache must only ever be used with one type source.
#[derive(Default)]
pub struct PatternCache {
    entries: RwLock<FxHashMap<Pattern, Arc<Automaton>>>,
}

impl PatternCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the compiled automaton for `pattern`, compiling it on first
    /// use. Malformed patterns are not cached.
    pub fn get_or_compile<S>(
        &self,
        source: &S,
        pattern: &Pattern,
    ) -> Result<Arc<Automaton>, PatternError>
    where
        S: TypeSource + ?Sized,
    {
        // Fast path: already compiled
        if let Some(automaton) = self.entries.read().get(pattern) {
            return Ok(Arc::clone(automaton));
        }

        let compiled = Arc::new(Automaton::compile(source, pattern)?);

        // Double-check after acquiring write lock
        let mut guard = self.entries.write();
        let automaton = guard.entry(pattern.clone()).or_insert(compiled);
        tracing::trace!(%pattern, "cached compiled pattern");
        Ok(Arc::clone(automaton))
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every cached automaton.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
