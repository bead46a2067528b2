//! Type descriptors for the tyre pattern matcher.
//!
//! The matcher only needs a read-only view of a type system, expressed by
//! the [`TypeSource`] trait. This crate defines that boundary and ships a
//! reference implementation, [`Pool`], modelled on a Go-style type system:
//!
//! - Scalars (`int`, `string`, ...) pre-interned at fixed [`Idx`] values
//! - Structural types (pointer, slice, array, map, func, chan) hash-consed,
//!   so descriptor identity is index equality
//! - Nominal struct and interface types with method sets
//! - Named types, declared then defined, which allows self-reference
//! - An assignability oracle based on interface method sets

mod data;
mod error;
mod idx;
mod kind;
mod pool;
mod source;

pub use data::TypeData;
pub use error::PoolError;
pub use idx::Idx;
pub use kind::{ChanDir, Kind};
pub use pool::Pool;
pub use source::TypeSource;
