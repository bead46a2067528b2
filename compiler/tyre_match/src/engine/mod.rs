//! Matching engine: Thompson-style simulation of an [`Automaton`].
//!
//! The engine keeps a *frontier* of live `(state, bindings)` pairs and
//! advances all of them in lock step, one descriptor at a time:
//!
//! 1. Seed the frontier with the epsilon-closure of the start state
//! 2. For each descriptor, apply every consuming state's test; survivors
//!    move to their successor (epsilon-closed) in the next frontier
//! 3. Accept iff the acceptance state is in the final frontier
//!
//! Within one step a state enters the frontier at most once: the first
//! arrival keeps its bindings and later arrivals are dropped. This bounds
//! the frontier by the automaton size and makes epsilon loops terminate.
//!
//! Composite tests (pointer, map, func, ...) run the nested automaton as a
//! separate, recursive match over the subject's substructure, threading
//! the bindings in and taking them back only on success. Frontiers are
//! sized from the automaton and recycled between nested matches, so a
//! match allocates once per nesting level and then runs allocation-free.

use rustc_hash::{FxBuildHasher, FxHashSet};
use smallvec::SmallVec;
use tyre_types::{Idx, Kind, TypeSource};

use crate::automaton::{Automaton, State, StateId, Test};
use crate::stack::ensure_sufficient_stack;
use crate::Bindings;

/// Live `(state, bindings)` pairs at one step of the simulation.
struct Frontier {
    entries: SmallVec<[(StateId, Bindings); 8]>,
    /// States already reached in this step, split states included.
    seen: FxHashSet<StateId>,
    /// Work list for epsilon-closure.
    pending: Vec<(StateId, Bindings)>,
}

impl Frontier {
    fn with_capacity(states: usize) -> Self {
        Self {
            entries: SmallVec::with_capacity(states),
            seen: FxHashSet::with_capacity_and_hasher(states, FxBuildHasher),
            pending: Vec::with_capacity(states),
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.seen.clear();
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add `state` and everything epsilon-reachable from it.
    ///
    /// Depth-first, `out` before `out1`, so alternatives and repetitions
    /// are reached in construction order.
    fn add(&mut self, automaton: &Automaton, state: StateId, bindings: Bindings) {
        self.pending.push((state, bindings));
        while let Some((id, bindings)) = self.pending.pop() {
            if !self.seen.insert(id) {
                continue;
            }
            match automaton.state(id) {
                State::Split { out, out1 } => {
                    self.pending.push((*out1, bindings));
                    self.pending.push((*out, bindings));
                }
                State::Consume { .. } | State::Accept => self.entries.push((id, bindings)),
            }
        }
    }

    /// Bindings of the accepting entry, if any.
    fn accepted(&self) -> Option<Bindings> {
        self.entries
            .iter()
            .find(|(id, _)| *id == StateId::ACCEPT)
            .map(|&(_, bindings)| bindings)
    }
}

/// Runs an automaton against descriptors from one type source.
pub(crate) struct Engine<'a, S: ?Sized> {
    source: &'a S,
    automaton: &'a Automaton,
    /// Cleared frontiers left over from finished runs.
    spare: Vec<Frontier>,
}

impl<'a, S> Engine<'a, S>
where
    S: TypeSource + ?Sized,
{
    pub(crate) fn new(source: &'a S, automaton: &'a Automaton) -> Self {
        Self {
            source,
            automaton,
            spare: Vec::new(),
        }
    }

    fn take_frontier(&mut self) -> Frontier {
        self.spare
            .pop()
            .unwrap_or_else(|| Frontier::with_capacity(self.automaton.len()))
    }

    fn release(&mut self, mut frontier: Frontier) {
        frontier.clear();
        self.spare.push(frontier);
    }

    /// Match `subjects` from `start`, seeded with `bindings`.
    pub(crate) fn run(&mut self, start: StateId, bindings: Bindings, subjects: &[Idx]) -> Option<Bindings> {
        let automaton = self.automaton;
        let mut current = self.take_frontier();
        let mut next = self.take_frontier();
        current.add(automaton, start, bindings);

        for &subject in subjects {
            next.clear();
            for &(id, bindings) in &current.entries {
                let State::Consume { test, out } = automaton.state(id) else {
                    continue;
                };
                if let Some(bindings) = self.apply(test, bindings, subject) {
                    next.add(automaton, *out, bindings);
                }
            }
            std::mem::swap(&mut current, &mut next);

            tracing::trace!(live = current.entries.len(), "frontier step");
            if current.is_empty() {
                break;
            }
        }

        let accepted = current.accepted();
        self.release(current);
        self.release(next);
        accepted
    }

    /// Apply one consuming test to `subject`.
    fn apply(&mut self, test: &Test, bindings: Bindings, subject: Idx) -> Option<Bindings> {
        let source = self.source;
        match test {
            Test::Identical(expected) => (subject == *expected).then_some(bindings),
            Test::Any => Some(bindings),
            Test::KindIs(kind) => (source.kind(subject) == *kind).then_some(bindings),
            Test::AssignableTo(target) => {
                source.is_assignable_to(subject, *target).then_some(bindings)
            }
            Test::AssignableFrom(origin) => {
                source.is_assignable_to(*origin, subject).then_some(bindings)
            }
            Test::Bind(placeholder) => bindings.bind(*placeholder, subject),

            Test::Elem { kind, elem } => {
                if source.kind(subject) != *kind {
                    return None;
                }
                self.descend(*elem, bindings, &[source.elem(subject)])
            }
            Test::Chan { dir, elem } => {
                if source.kind(subject) != Kind::Chan || source.chan_dir(subject) != Some(*dir) {
                    return None;
                }
                self.descend(*elem, bindings, &[source.elem(subject)])
            }
            Test::Map { key, value } => {
                if source.kind(subject) != Kind::Map {
                    return None;
                }
                let bindings = self.descend(*key, bindings, &[source.map_key(subject)])?;
                self.descend(*value, bindings, &[source.map_value(subject)])
            }
            Test::Func { params, results } => {
                if source.kind(subject) != Kind::Func {
                    return None;
                }
                let bindings = self.descend(*params, bindings, source.params(subject))?;
                self.descend(*results, bindings, source.results(subject))
            }
        }
    }

    /// Nested match over a subject's substructure.
    fn descend(&mut self, start: StateId, bindings: Bindings, subjects: &[Idx]) -> Option<Bindings> {
        tracing::trace!(?start, len = subjects.len(), "nested match");
        ensure_sufficient_stack(|| self.run(start, bindings, subjects))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
