//! Ordering policies for the ordered containers
//!
//! A container either remembers the order in which keys were first inserted,
//! or keeps its entries sorted under a comparator that is re-applied after
//! every mutation.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Comparator over two `(key, value)` entries
pub type EntryComparator<K, V> = Arc<dyn Fn(&K, &V, &K, &V) -> Ordering + Send + Sync>;

/// How an ordered container arranges its entries
pub enum OrderingPolicy<K, V> {
    /// Entries appear in the order their keys were first inserted
    InsertionOrder,
    /// Entries are kept sorted by the comparator (stable among equals)
    Comparator(EntryComparator<K, V>),
}

impl<K: 'static, V: 'static> OrderingPolicy<K, V> {
    /// Sort entries by the natural order of their keys
    pub fn by_key() -> Self
    where
        K: Ord,
    {
        Self::by_key_with(K::cmp)
    }

    /// Sort entries by a comparator over keys only
    pub fn by_key_with<F>(compare: F) -> Self
    where
        F: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        OrderingPolicy::Comparator(Arc::new(move |k1, _, k2, _| compare(k1, k2)))
    }

    /// Sort entries by a comparator over whole entries
    pub fn by<F>(compare: F) -> Self
    where
        F: Fn(&K, &V, &K, &V) -> Ordering + Send + Sync + 'static,
    {
        OrderingPolicy::Comparator(Arc::new(compare))
    }
}

impl<K, V> OrderingPolicy<K, V> {
    /// Whether entries are kept sorted
    pub fn is_sorted(&self) -> bool {
        matches!(self, OrderingPolicy::Comparator(_))
    }

    /// The comparator, if this policy has one
    pub fn comparator(&self) -> Option<&EntryComparator<K, V>> {
        match self {
            OrderingPolicy::InsertionOrder => None,
            OrderingPolicy::Comparator(compare) => Some(compare),
        }
    }
}

impl<K, V> Default for OrderingPolicy<K, V> {
    fn default() -> Self {
        OrderingPolicy::InsertionOrder
    }
}

// Manual impl: the comparator is shared, so no `K: Clone`/`V: Clone` bound.
impl<K, V> Clone for OrderingPolicy<K, V> {
    fn clone(&self) -> Self {
        match self {
            OrderingPolicy::InsertionOrder => OrderingPolicy::InsertionOrder,
            OrderingPolicy::Comparator(compare) => OrderingPolicy::Comparator(Arc::clone(compare)),
        }
    }
}

impl<K, V> fmt::Debug for OrderingPolicy<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingPolicy::InsertionOrder => f.write_str("InsertionOrder"),
            OrderingPolicy::Comparator(_) => f.write_str("Comparator(..)"),
        }
    }
}
