//! Sequence helpers shared by the ordered containers
//!
//! These fill the gaps the standard iterator adaptors leave for the
//! containers: extremal queries that report an empty input as an error
//! instead of `None`, and that keep the first of several equal candidates.

pub mod sequence;

pub use sequence::SequenceExt;
