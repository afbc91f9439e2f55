//! Builder methods for creating errors with context

use super::types::Error;
use std::fmt::Debug;

impl Error {
    /// Create a key-not-found error for a lookup by key
    #[must_use]
    pub fn key_not_found(operation: impl Into<String>, key: &impl Debug) -> Self {
        Error::KeyNotFound {
            operation: operation.into(),
            key: Some(format!("{key:?}")),
        }
    }

    /// Create a key-not-found error for a predicate or chooser scan
    #[must_use]
    pub fn no_match(operation: impl Into<String>) -> Self {
        Error::KeyNotFound {
            operation: operation.into(),
            key: None,
        }
    }

    /// Create an empty-input error for an extremal query
    #[must_use]
    pub fn empty_input(operation: impl Into<String>) -> Self {
        Error::EmptyInput {
            operation: operation.into(),
        }
    }
}
