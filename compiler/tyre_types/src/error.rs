//! Errors from building named types.

use std::fmt;

use crate::Idx;

/// Error from [`Pool::define`](crate::Pool::define).
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum PoolError {
    /// The target was not created by `Pool::declare`.
    NotNamed(Idx),
    /// The named type already has a definition.
    AlreadyDefined(Idx),
    /// The proposed underlying type is unknown to the pool, or is a named
    /// type that has no definition yet.
    Undefined(Idx),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::NotNamed(idx) => write!(f, "{idx} is not a declared named type"),
            PoolError::AlreadyDefined(idx) => write!(f, "named type {idx} is already defined"),
            PoolError::Undefined(idx) => {
                write!(f, "{idx} cannot be used as an underlying type: not defined")
            }
        }
    }
}

impl std::error::Error for PoolError {}
