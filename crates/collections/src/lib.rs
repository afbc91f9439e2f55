//! Ordered associative containers for `ordo`.
//!
//! This crate provides a map and a set whose iteration order is always
//! deterministic: either the order in which keys were first inserted, or the
//! order defined by a comparator that is re-applied after every mutation.
//!
//! ## Key Components
//!
//! - **`ordering`**: `OrderingPolicy`, the choice between insertion order and a
//!   comparator over entries.
//! - **`map`**: `OrderedMap`, the key/value container, and its builder.
//! - **`set`**: `OrderedSet`, a set of unique items backed by an `OrderedMap`
//!   with unit values, plus set algebra.
//!
//! Absence is reported two ways. Plain lookups (`get`, `contains_key`, ...)
//! return `Option`, `bool` or a default value. The operations that promise a
//! result (`find`, `find_key`, `pick`, the extremal queries on sets) return an
//! [`ordo_core::Result`] carrying `KeyNotFound` or `EmptyInput`.
//!
//! Neither container locks internally; share them across threads for
//! mutation only behind a lock that covers the whole container.

pub mod map;
pub mod ordering;
pub mod set;

pub use self::{
    map::{OrderedMap, OrderedMapBuilder},
    ordering::{EntryComparator, OrderingPolicy},
    set::OrderedSet,
};
pub use ordo_core::{Error, Result};
