//! Structural type-pattern matching.
//!
//! Given a type descriptor and a [`Pattern`] written in the same vocabulary
//! (pointers, slices, maps, functions, ...) plus operators (alternation,
//! optional, repetition, wildcard, captures, kind filters, assignability
//! tests), decide whether the type matches and report what each
//! [`Placeholder`] captured.
//!
//! # Architecture
//!
//! - **Compiler** ([`Automaton::compile`]): pattern tree → Thompson NFA,
//!   with nested automata for composite shapes, built eagerly
//! - **Engine**: frontier simulation of the NFA over a descriptor
//!   sequence, recursing into substructure for composite shapes
//! - **Bindings**: `Copy` capture sets, forked by value per branch
//!
//! Types are seen only through [`tyre_types::TypeSource`], so any type
//! system can be matched against.
//!
//! # Example
//!
//! ```text
//! // func(ZeroOrOne(ctx), T) (ZeroOrOne(error))
//! let pattern = Pattern::func(
//!     [Pattern::zero_or_one(ctx), Pattern::from(Placeholder::T)],
//!     [Pattern::zero_or_one(error)],
//! );
//! let bindings = match_type(&pool, handler, &pattern)?;
//! ```

mod automaton;
mod bindings;
mod cache;
mod engine;
mod error;
mod matcher;
mod pattern;
mod placeholder;
mod stack;
mod tracing_setup;

pub use automaton::{Automaton, State, StateId, Test};
pub use bindings::Bindings;
pub use cache::PatternCache;
pub use error::PatternError;
pub use matcher::{match_type, Matcher};
pub use pattern::{KindFilter, Pattern};
pub use placeholder::Placeholder;
pub use tracing_setup::init_tracing;

// Automata are shared across threads through `PatternCache`.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Automaton>();
};
