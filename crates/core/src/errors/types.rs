//! Core error type definitions

/// Result type alias for ordo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type shared by the explicit-failure operations using thiserror
///
/// Lookups that merely miss are not errors (`get`, `contains_key`, `items` and
/// friends report absence through `Option`, `false` or an empty collection).
/// Only the operations that promise a value (`find`, `find_key`, `pick`, the
/// extremal queries) return one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No entry matched a key, predicate or chooser
    KeyNotFound {
        operation: String,
        key: Option<String>,
    },

    /// An extremal query ran over zero elements
    EmptyInput { operation: String },
}

impl Error {
    /// Whether this is the distinguished key-not-found condition
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }

    /// Whether an extremal query was asked about an empty input
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput { .. })
    }
}
