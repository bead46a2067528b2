//! The descriptor provider boundary.
//!
//! The matcher never looks inside a type system directly. Everything it
//! needs (kind, substructure, assignability) goes through `TypeSource`,
//! so any host type system can be matched against by implementing it.
//! [`Pool`](crate::Pool) is the reference implementation.

use crate::{ChanDir, Idx, Kind};

/// Read-only view of a type system, as seen by the matcher.
///
/// Descriptors are `Idx` handles compared by identity. Accessors for
/// substructure look through named types to their underlying type. They
/// are only called after the matcher has checked the kind, and may return
/// `Idx::NONE` / empty slices for other kinds.
pub trait TypeSource {
    /// Check whether `ty` is a descriptor of this source.
    fn contains(&self, ty: Idx) -> bool;

    /// Kind of `ty`. Named types report their underlying kind.
    fn kind(&self, ty: Idx) -> Kind;

    /// Check whether `ty` is a named (nominal) type.
    fn is_named(&self, ty: Idx) -> bool;

    /// Element type of a pointer, slice, array or channel.
    fn elem(&self, ty: Idx) -> Idx;

    /// Direction of a channel, `None` for other kinds.
    fn chan_dir(&self, ty: Idx) -> Option<ChanDir>;

    /// Key type of a map.
    fn map_key(&self, ty: Idx) -> Idx;

    /// Value type of a map.
    fn map_value(&self, ty: Idx) -> Idx;

    /// Ordered parameter types of a function.
    fn params(&self, ty: Idx) -> &[Idx];

    /// Ordered result types of a function.
    fn results(&self, ty: Idx) -> &[Idx];

    /// Assignability oracle: can a value of type `from` be assigned to a
    /// location of type `to`?
    fn is_assignable_to(&self, from: Idx, to: Idx) -> bool;

    /// Human-readable rendering, used in log output.
    fn describe(&self, ty: Idx) -> String {
        ty.to_string()
    }
}
