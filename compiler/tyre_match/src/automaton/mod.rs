//! Compiled patterns: Thompson-style automata over descriptor sequences.
//!
//! # Design
//!
//! - All states of a pattern, including the nested automata of composite
//!   shapes, live in one arena and are addressed by [`StateId`]
//! - State 0 is the unique acceptance state; every (nested) automaton
//!   ends there
//! - Predicates are plain data ([`Test`]), so an automaton is `Send + Sync`
//!   and can be cached and shared
//!
//! A consuming state's [`Test`] for a composite shape refers to the start
//! state of a nested automaton. The engine runs that nested automaton as a
//! separate match; the outer automaton has no edge into it.

mod compile;

use std::fmt;

use tyre_types::{ChanDir, Idx, Kind, TypeSource};

use crate::engine::Engine;
use crate::{Bindings, Pattern, PatternError, Placeholder};

/// Index of a state in an [`Automaton`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct StateId(u32);

impl StateId {
    /// The acceptance state.
    pub const ACCEPT: StateId = StateId(0);

    /// Position in the state arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ACCEPT {
            write!(f, "StateId::ACCEPT")
        } else {
            write!(f, "StateId({})", self.0)
        }
    }
}

/// Single-descriptor predicate of a consuming state.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Test {
    /// Descriptor is exactly this one.
    Identical(Idx),
    /// Always succeeds.
    Any,
    /// Descriptor has this kind.
    KindIs(Kind),
    /// `is_assignable_to(descriptor, target)`.
    AssignableTo(Idx),
    /// `is_assignable_to(source, descriptor)`.
    AssignableFrom(Idx),
    /// Bind the descriptor to a placeholder.
    Bind(Placeholder),
    /// Pointer, slice or array: kind, then the element against `elem`.
    Elem { kind: Kind, elem: StateId },
    /// Channel: direction, then the element against `elem`.
    Chan { dir: ChanDir, elem: StateId },
    /// Map: key against `key`, then value against `value`.
    Map { key: StateId, value: StateId },
    /// Function: parameters against `params`, then results against `results`.
    Func { params: StateId, results: StateId },
}

/// One automaton state.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum State {
    /// The acceptance state. Only `StateId::ACCEPT` holds it.
    Accept,
    /// Epsilon branch to two successors; `out` is explored first.
    Split { out: StateId, out1: StateId },
    /// Consume one descriptor if `test` passes, then continue at `out`.
    Consume { test: Test, out: StateId },
}

/// A compiled pattern.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Automaton {
    states: Vec<State>,
    start: StateId,
}

impl Automaton {
    /// Compile a pattern that matches exactly one descriptor.
    pub fn compile<S>(source: &S, pattern: &Pattern) -> Result<Self, PatternError>
    where
        S: TypeSource + ?Sized,
    {
        Self::compile_sequence(source, std::slice::from_ref(pattern))
    }

    /// Compile a pattern sequence, matched element-wise against a
    /// descriptor sequence (like a parameter list).
    #[tracing::instrument(level = "debug", skip_all, fields(len = patterns.len()))]
    pub fn compile_sequence<S>(source: &S, patterns: &[Pattern]) -> Result<Self, PatternError>
    where
        S: TypeSource + ?Sized,
    {
        let mut compiler = compile::Compiler::new(source);
        let start = compiler.compile_sequence(patterns)?;
        let automaton = Self {
            states: compiler.finish(),
            start,
        };
        tracing::debug!(states = automaton.len(), "compiled pattern");
        Ok(automaton)
    }

    /// Entry state.
    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    /// State at `id`.
    #[inline]
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    /// Number of states, nested automata included.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: the acceptance state exists in every automaton.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Match a single descriptor.
    ///
    /// `source` must be the source the automaton was compiled against.
    pub fn matches<S>(&self, source: &S, subject: Idx) -> Option<Bindings>
    where
        S: TypeSource + ?Sized,
    {
        self.match_sequence(source, &[subject])
    }

    /// Match a descriptor sequence against an automaton built with
    /// [`compile_sequence`](Self::compile_sequence).
    pub fn match_sequence<S>(&self, source: &S, subjects: &[Idx]) -> Option<Bindings>
    where
        S: TypeSource + ?Sized,
    {
        Engine::new(source, self).run(self.start, Bindings::new(), subjects)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
