//! Pattern trees.
//!
//! A pattern uses the same vocabulary as type descriptors (pointer, slice,
//! map, func, ...) plus operators: alternation, optional, repetition,
//! wildcard, capture, kind filters and assignability tests.
//!
//! # Sequences
//!
//! Function parameter and result lists are *sequences*. Repetition
//! operators only make sense there:
//!
//! ```text
//! func(ZeroOrOne(ctx), T) (ZeroOrOne(error))
//! ```
//!
//! matches `func(int)`, `func(ctx, int)` and `func(ctx, int) error`.
//!
//! # Literal Descriptors
//!
//! [`Pattern::Type`] holds a descriptor. Scalars, structs, interfaces and
//! named types match by identity; an unnamed composite descriptor matches
//! as if it had been written as the corresponding composite pattern.

use std::fmt;

use tyre_types::{ChanDir, Idx, Kind};

use crate::Placeholder;

/// Kinds accepted by [`Pattern::KindIs`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KindFilter {
    /// Any struct type.
    Struct,
    /// Any interface type.
    Interface,
}

impl KindFilter {
    /// The descriptor kind this filter accepts.
    pub const fn kind(self) -> Kind {
        match self {
            Self::Struct => Kind::Struct,
            Self::Interface => Kind::Interface,
        }
    }
}

/// A node of a pattern tree.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pattern {
    // === Literals ===
    /// A concrete descriptor.
    Type(Idx),

    // === Composite Shapes ===
    /// `*elem`.
    Pointer(Box<Pattern>),
    /// `[]elem`.
    Slice(Box<Pattern>),
    /// `[N]elem` for any `N`.
    Array(Box<Pattern>),
    /// `map[key]value`.
    Map {
        key: Box<Pattern>,
        value: Box<Pattern>,
    },
    /// `func(params...) (results...)`; both lists are sequences.
    Func {
        params: Vec<Pattern>,
        results: Vec<Pattern>,
    },
    /// Channel with exactly this direction.
    Chan { dir: ChanDir, elem: Box<Pattern> },

    // === Operators ===
    /// Transparent grouping.
    Group(Box<Pattern>),
    /// Any one of the alternatives. Must not be empty.
    Or(Vec<Pattern>),
    /// Zero or one occurrence.
    ZeroOrOne(Box<Pattern>),
    /// Zero or more occurrences.
    ZeroOrMore(Box<Pattern>),
    /// One or more occurrences.
    OneOrMore(Box<Pattern>),
    /// Any single descriptor.
    Any,
    /// Any descriptor of the given kind.
    KindIs(KindFilter),
    /// A descriptor assignable to the given type.
    AssignableTo(Idx),
    /// A descriptor the given type is assignable to.
    AssignableFrom(Idx),
    /// Capture into a placeholder slot.
    Placeholder(Placeholder),
}

impl Pattern {
    /// Literal descriptor.
    pub fn ty(idx: Idx) -> Self {
        Pattern::Type(idx)
    }

    pub fn pointer(elem: impl Into<Pattern>) -> Self {
        Pattern::Pointer(Box::new(elem.into()))
    }

    pub fn slice(elem: impl Into<Pattern>) -> Self {
        Pattern::Slice(Box::new(elem.into()))
    }

    pub fn array(elem: impl Into<Pattern>) -> Self {
        Pattern::Array(Box::new(elem.into()))
    }

    pub fn map(key: impl Into<Pattern>, value: impl Into<Pattern>) -> Self {
        Pattern::Map {
            key: Box::new(key.into()),
            value: Box::new(value.into()),
        }
    }

    /// Function shape from parameter and result sequences.
    pub fn func<P, R>(params: P, results: R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Pattern>,
        R: IntoIterator,
        R::Item: Into<Pattern>,
    {
        Pattern::Func {
            params: params.into_iter().map(Into::into).collect(),
            results: results.into_iter().map(Into::into).collect(),
        }
    }

    /// Function shape with no results.
    pub fn procedure<P>(params: P) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Pattern>,
    {
        Pattern::func(params, std::iter::empty::<Pattern>())
    }

    pub fn chan(dir: ChanDir, elem: impl Into<Pattern>) -> Self {
        Pattern::Chan {
            dir,
            elem: Box::new(elem.into()),
        }
    }

    pub fn group(inner: impl Into<Pattern>) -> Self {
        Pattern::Group(Box::new(inner.into()))
    }

    /// Alternation. An empty list is rejected when compiled.
    pub fn or<I>(alternatives: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Pattern>,
    {
        Pattern::Or(alternatives.into_iter().map(Into::into).collect())
    }

    pub fn zero_or_one(inner: impl Into<Pattern>) -> Self {
        Pattern::ZeroOrOne(Box::new(inner.into()))
    }

    pub fn zero_or_more(inner: impl Into<Pattern>) -> Self {
        Pattern::ZeroOrMore(Box::new(inner.into()))
    }

    pub fn one_or_more(inner: impl Into<Pattern>) -> Self {
        Pattern::OneOrMore(Box::new(inner.into()))
    }
}

impl From<Idx> for Pattern {
    fn from(idx: Idx) -> Self {
        Pattern::Type(idx)
    }
}

impl From<Placeholder> for Pattern {
    fn from(placeholder: Placeholder) -> Self {
        Pattern::Placeholder(placeholder)
    }
}

impl From<KindFilter> for Pattern {
    fn from(filter: KindFilter) -> Self {
        Pattern::KindIs(filter)
    }
}

/// Write `a, b, c`.
fn write_list(f: &mut fmt::Formatter<'_>, list: &[Pattern], sep: &str) -> fmt::Result {
    for (i, p) in list.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{p}")?;
    }
    Ok(())
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Type(idx) => write!(f, "{idx}"),
            Pattern::Pointer(elem) => write!(f, "*{elem}"),
            Pattern::Slice(elem) => write!(f, "[]{elem}"),
            Pattern::Array(elem) => write!(f, "[_]{elem}"),
            Pattern::Map { key, value } => write!(f, "map[{key}]{value}"),
            Pattern::Func { params, results } => {
                f.write_str("func(")?;
                write_list(f, params, ", ")?;
                f.write_str(")")?;
                match results.as_slice() {
                    [] => Ok(()),
                    [single] => write!(f, " {single}"),
                    many => {
                        f.write_str(" (")?;
                        write_list(f, many, ", ")?;
                        f.write_str(")")
                    }
                }
            }
            Pattern::Chan { dir, elem } => write!(f, "{}{elem}", dir.prefix()),
            Pattern::Group(inner) => write!(f, "({inner})"),
            Pattern::Or(alternatives) => {
                f.write_str("(")?;
                write_list(f, alternatives, " | ")?;
                f.write_str(")")
            }
            Pattern::ZeroOrOne(inner) => write!(f, "{inner}?"),
            Pattern::ZeroOrMore(inner) => write!(f, "{inner}*"),
            Pattern::OneOrMore(inner) => write!(f, "{inner}+"),
            Pattern::Any => f.write_str("_"),
            Pattern::KindIs(filter) => write!(f, "<{}>", filter.kind()),
            Pattern::AssignableTo(idx) => write!(f, "assignable_to({idx})"),
            Pattern::AssignableFrom(idx) => write!(f, "assignable_from({idx})"),
            Pattern::Placeholder(p) => write!(f, "{p}"),
        }
    }
}

#[cfg(test)]
mod tests;
