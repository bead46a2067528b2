//! Public matching entry points.

use std::sync::Arc;

use tyre_types::{Idx, TypeSource};

use crate::{Automaton, Bindings, Pattern, PatternError};

/// Match `subject` against `pattern`.
///
/// Returns `Ok(Some(bindings))` on a match, `Ok(None)` when the type does
/// not match, and `Err` only when the pattern itself is malformed.
///
/// The pattern is compiled on every call; use a [`Matcher`] or a
/// [`PatternCache`](crate::PatternCache) to reuse the compiled form.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(subject = %source.describe(subject), %pattern)
)]
pub fn match_type<S>(
    source: &S,
    subject: Idx,
    pattern: &Pattern,
) -> Result<Option<Bindings>, PatternError>
where
    S: TypeSource + ?Sized,
{
    let automaton = Automaton::compile(source, pattern)?;
    let result = automaton.matches(source, subject);
    tracing::debug!(matched = result.is_some(), bindings = ?result, "match_type");
    Ok(result)
}

/// A compiled pattern bound to the type source it was compiled against.
pub struct Matcher<'s, S: ?Sized> {
    source: &'s S,
    automaton: Arc<Automaton>,
}

impl<'s, S> Matcher<'s, S>
where
    S: TypeSource + ?Sized,
{
    /// Compile `pattern` against `source`.
    pub fn new(source: &'s S, pattern: &Pattern) -> Result<Self, PatternError> {
        let automaton = Automaton::compile(source, pattern)?;
        Ok(Self::from_automaton(source, Arc::new(automaton)))
    }

    /// Wrap an automaton already compiled against `source`, e.g. one from a
    /// [`PatternCache`](crate::PatternCache).
    pub fn from_automaton(source: &'s S, automaton: Arc<Automaton>) -> Self {
        Self { source, automaton }
    }

    /// The compiled automaton.
    pub fn automaton(&self) -> &Arc<Automaton> {
        &self.automaton
    }

    /// Match `subject`, returning the captured bindings on success.
    pub fn matches(&self, subject: Idx) -> Option<Bindings> {
        self.automaton.matches(self.source, subject)
    }

    /// Check whether `subject` matches.
    pub fn is_match(&self, subject: Idx) -> bool {
        self.matches(subject).is_some()
    }
}
