//! Extremal queries over iterators

use crate::errors::{Error, Result};

/// Extremal queries that fail on empty input
///
/// Ties are resolved in favour of the element seen first, so the result is
/// stable with respect to iteration order. `operation` is recorded in the
/// `EmptyInput` error to say who asked.
pub trait SequenceExt<T>: Iterator<Item = T> + Sized {
    /// Largest element under `Ord`
    fn try_max(self, operation: &str) -> Result<T>
    where
        T: Ord,
    {
        self.try_max_by(operation, |a, b| a.cmp(b))
    }

    /// Smallest element under `Ord`
    fn try_min(self, operation: &str) -> Result<T>
    where
        T: Ord,
    {
        self.try_min_by(operation, |a, b| a.cmp(b))
    }

    /// Element whose projection is largest
    fn try_max_by_key<R, F>(self, operation: &str, mut projection: F) -> Result<T>
    where
        R: Ord,
        F: FnMut(&T) -> R,
    {
        let mut best: Option<(R, T)> = None;
        for item in self {
            let key = projection(&item);
            let better = match &best {
                Some((current, _)) => key > *current,
                None => true,
            };
            if better {
                best = Some((key, item));
            }
        }
        best.map(|(_, item)| item)
            .ok_or_else(|| Error::empty_input(operation))
    }

    /// Element whose projection is smallest
    fn try_min_by_key<R, F>(self, operation: &str, mut projection: F) -> Result<T>
    where
        R: Ord,
        F: FnMut(&T) -> R,
    {
        let mut best: Option<(R, T)> = None;
        for item in self {
            let key = projection(&item);
            let better = match &best {
                Some((current, _)) => key < *current,
                None => true,
            };
            if better {
                best = Some((key, item));
            }
        }
        best.map(|(_, item)| item)
            .ok_or_else(|| Error::empty_input(operation))
    }

    /// Largest element under a comparator
    fn try_max_by<F>(self, operation: &str, mut compare: F) -> Result<T>
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.reduce(|best, item| {
            if compare(&item, &best).is_gt() {
                item
            } else {
                best
            }
        })
        .ok_or_else(|| Error::empty_input(operation))
    }

    /// Smallest element under a comparator
    fn try_min_by<F>(self, operation: &str, mut compare: F) -> Result<T>
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.reduce(|best, item| {
            if compare(&item, &best).is_lt() {
                item
            } else {
                best
            }
        })
        .ok_or_else(|| Error::empty_input(operation))
    }
}

impl<T, I> SequenceExt<T> for I where I: Iterator<Item = T> {}
