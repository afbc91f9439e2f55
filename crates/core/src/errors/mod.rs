//! Error types for ordo operations

mod builders;
mod display;
mod types;

pub use types::{Error, Result};
