//! Core errors and sequence helpers for the `ordo` collections.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the `Error` enum and `Result` type alias used by the
//!   explicit-failure operations (`find`, `pick`, extremal queries).
//! - **`functional`**: Iterator extensions the containers build on, such as
//!   extremal queries that surface an empty input as an error.

pub mod errors;
pub mod functional;

pub use self::{
    errors::{Error, Result},
    functional::SequenceExt,
};
