//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound { operation, key } => match key {
                Some(key) => write!(f, "key not found in {operation}: {key}"),
                None => write!(f, "key not found in {operation}"),
            },
            Error::EmptyInput { operation } => {
                write!(f, "{operation} cannot operate on an empty input")
            }
        }
    }
}
