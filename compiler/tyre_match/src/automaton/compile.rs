//! Pattern compiler.
//!
//! Each pattern node is compiled against a continuation state (what to do
//! after the node has matched) and returns its own entry state. Sequences
//! are compiled back to front, starting from `StateId::ACCEPT`.
//!
//! Composite shapes compile their children eagerly into nested automata
//! in the same arena, so configuration errors surface here and matching
//! never compiles anything.

use std::slice;

use tyre_types::{ChanDir, Idx, Kind, TypeSource};

use super::{State, StateId, Test};
use crate::stack::ensure_sufficient_stack;
use crate::{Pattern, PatternError};

/// Builds the state arena for one automaton.
pub(super) struct Compiler<'s, S: ?Sized> {
    source: &'s S,
    states: Vec<State>,
    /// Named literals currently being decomposed, innermost last.
    expanding: Vec<Idx>,
}

impl<'s, S> Compiler<'s, S>
where
    S: TypeSource + ?Sized,
{
    pub(super) fn new(source: &'s S) -> Self {
        Self {
            source,
            states: vec![State::Accept],
            expanding: Vec::new(),
        }
    }

    /// Hand over the finished arena.
    pub(super) fn finish(self) -> Vec<State> {
        self.states
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "pattern automata stay far below u32::MAX states"
    )]
    fn push(&mut self, state: State) -> StateId {
        let id = StateId(self.states.len() as u32);
        self.states.push(state);
        id
    }

    fn consume(&mut self, test: Test, out: StateId) -> StateId {
        self.push(State::Consume { test, out })
    }

    /// Compile a sequence ending in acceptance; returns its entry state.
    pub(super) fn compile_sequence(&mut self, patterns: &[Pattern]) -> Result<StateId, PatternError> {
        let mut next = StateId::ACCEPT;
        for pattern in patterns.iter().rev() {
            next = self.compile(pattern, next)?;
        }
        Ok(next)
    }

    fn compile(&mut self, pattern: &Pattern, next: StateId) -> Result<StateId, PatternError> {
        ensure_sufficient_stack(|| self.compile_node(pattern, next))
    }

    fn compile_node(&mut self, pattern: &Pattern, next: StateId) -> Result<StateId, PatternError> {
        match pattern {
            Pattern::Type(idx) => self.compile_type(*idx, next),

            Pattern::Pointer(elem) => self.compile_elem(Kind::Pointer, elem, next),
            Pattern::Slice(elem) => self.compile_elem(Kind::Slice, elem, next),
            Pattern::Array(elem) => self.compile_elem(Kind::Array, elem, next),
            Pattern::Chan { dir, elem } => {
                let elem = self.compile_sequence(slice::from_ref(&**elem))?;
                Ok(self.consume(Test::Chan { dir: *dir, elem }, next))
            }
            Pattern::Map { key, value } => {
                let key = self.compile_sequence(slice::from_ref(&**key))?;
                let value = self.compile_sequence(slice::from_ref(&**value))?;
                Ok(self.consume(Test::Map { key, value }, next))
            }
            Pattern::Func { params, results } => {
                let params = self.compile_sequence(params)?;
                let results = self.compile_sequence(results)?;
                Ok(self.consume(Test::Func { params, results }, next))
            }

            Pattern::Group(inner) => self.compile(inner, next),
            Pattern::Or(alternatives) => self.compile_or(alternatives, next),
            Pattern::ZeroOrOne(inner) => {
                let body = self.compile(inner, next)?;
                Ok(self.push(State::Split {
                    out: body,
                    out1: next,
                }))
            }
            Pattern::ZeroOrMore(inner) => self.compile_loop(inner, next).map(|(split, _)| split),
            Pattern::OneOrMore(inner) => self.compile_loop(inner, next).map(|(_, body)| body),

            Pattern::Any => Ok(self.consume(Test::Any, next)),
            Pattern::KindIs(filter) => Ok(self.consume(Test::KindIs(filter.kind()), next)),
            Pattern::AssignableTo(target) => {
                self.check_type(*target)?;
                Ok(self.consume(Test::AssignableTo(*target), next))
            }
            Pattern::AssignableFrom(origin) => {
                self.check_type(*origin)?;
                Ok(self.consume(Test::AssignableFrom(*origin), next))
            }
            Pattern::Placeholder(placeholder) => Ok(self.consume(Test::Bind(*placeholder), next)),
        }
    }

    fn compile_elem(
        &mut self,
        kind: Kind,
        elem: &Pattern,
        next: StateId,
    ) -> Result<StateId, PatternError> {
        let elem = self.compile_sequence(slice::from_ref(elem))?;
        Ok(self.consume(Test::Elem { kind, elem }, next))
    }

    /// Fold the alternatives into a chain of binary splits, first
    /// alternative explored first.
    fn compile_or(&mut self, alternatives: &[Pattern], next: StateId) -> Result<StateId, PatternError> {
        let (first, rest) = alternatives.split_first().ok_or(PatternError::EmptyOr)?;

        let mut entry = self.compile(first, next)?;
        for alternative in rest {
            let branch = self.compile(alternative, next)?;
            entry = self.push(State::Split {
                out: entry,
                out1: branch,
            });
        }
        Ok(entry)
    }

    /// Build `S = Split(inner → S, next)`; returns `(S, inner entry)`.
    ///
    /// Entering at `S` allows zero iterations, entering at the body
    /// requires at least one.
    fn compile_loop(&mut self, inner: &Pattern, next: StateId) -> Result<(StateId, StateId), PatternError> {
        let split = self.push(State::Split { out: next, out1: next });
        let body = self.compile(inner, split)?;
        self.states[split.index()] = State::Split {
            out: body,
            out1: next,
        };
        Ok((split, body))
    }

    /// Validate a descriptor named by the pattern; returns its kind.
    fn check_type(&self, idx: Idx) -> Result<Kind, PatternError> {
        if !self.source.contains(idx) {
            return Err(PatternError::InvalidType(idx));
        }
        match self.source.kind(idx) {
            Kind::Invalid => Err(PatternError::UndefinedType(idx)),
            kind => Ok(kind),
        }
    }

    /// Literal descriptor: identity for leaves, structural for composites.
    ///
    /// Named composites are decomposed through their underlying type. A
    /// named type met again inside its own decomposition (`type F func() F`)
    /// matches by identity, which keeps the pattern finite.
    fn compile_type(&mut self, idx: Idx, next: StateId) -> Result<StateId, PatternError> {
        let kind = self.check_type(idx)?;
        if !kind.is_composite() || self.expanding.contains(&idx) {
            return Ok(self.consume(Test::Identical(idx), next));
        }

        tracing::trace!(ty = %self.source.describe(idx), "decomposing composite literal");
        let shape = self.shape_of(idx, kind);
        let named = self.source.is_named(idx);
        if named {
            self.expanding.push(idx);
        }
        let entry = self.compile(&shape, next);
        if named {
            self.expanding.pop();
        }
        entry
    }

    /// The composite shape equivalent to a composite descriptor.
    fn shape_of(&self, idx: Idx, kind: Kind) -> Pattern {
        let source = self.source;
        match kind {
            Kind::Pointer => Pattern::pointer(source.elem(idx)),
            Kind::Slice => Pattern::slice(source.elem(idx)),
            Kind::Array => Pattern::array(source.elem(idx)),
            Kind::Chan => Pattern::chan(
                source.chan_dir(idx).unwrap_or(ChanDir::Both),
                source.elem(idx),
            ),
            Kind::Map => Pattern::map(source.map_key(idx), source.map_value(idx)),
            // Kind::Func, the last composite kind
            _ => Pattern::func(
                source.params(idx).iter().copied(),
                source.results(idx).iter().copied(),
            ),
        }
    }
}
