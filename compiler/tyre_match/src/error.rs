//! Pattern configuration errors.
//!
//! These are raised while compiling a pattern, never while matching.
//! A pattern that fails to compile is a programming error in the caller;
//! a type that fails to match is not an error at all.

use std::fmt;

use tyre_types::Idx;

/// A malformed pattern.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum PatternError {
    /// `Or` with no alternatives.
    EmptyOr,
    /// A descriptor that does not belong to the type source.
    InvalidType(Idx),
    /// A named type that was declared but never defined.
    UndefinedType(Idx),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::EmptyOr => f.write_str("'Or' without alternatives"),
            PatternError::InvalidType(idx) => {
                write!(f, "pattern refers to unknown type {idx}")
            }
            PatternError::UndefinedType(idx) => {
                write!(f, "pattern refers to undefined named type {idx}")
            }
        }
    }
}

impl std::error::Error for PatternError {}
