//! Builder for configuring an ordered map before it is populated

use super::OrderedMap;
use crate::ordering::OrderingPolicy;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::hash::Hash;

/// Collects the ordering policy, capacity and initial entries of a map
pub struct OrderedMapBuilder<K, V> {
    ordering: OrderingPolicy<K, V>,
    capacity: usize,
    entries: Vec<(K, V)>,
}

impl<K, V> OrderedMapBuilder<K, V> {
    pub fn new() -> Self {
        Self {
            ordering: OrderingPolicy::InsertionOrder,
            capacity: 0,
            entries: Vec::new(),
        }
    }

    /// Set the ordering policy
    #[must_use]
    pub fn ordering(mut self, ordering: OrderingPolicy<K, V>) -> Self {
        self.ordering = ordering;
        self
    }

    /// Keep entries sorted by a key comparator
    #[must_use]
    pub fn key_comparator<F>(self, compare: F) -> Self
    where
        K: 'static,
        V: 'static,
        F: Fn(&K, &K) -> Ordering + Send + Sync + 'static,
    {
        self.ordering(OrderingPolicy::by_key_with(compare))
    }

    /// Reserve room for at least `capacity` entries
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Add one initial entry
    #[must_use]
    pub fn entry(mut self, key: K, value: V) -> Self {
        self.entries.push((key, value));
        self
    }

    /// Add initial entries
    #[must_use]
    pub fn entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries.extend(entries);
        self
    }

    /// Build the map; repeated keys follow [`OrderedMap::from_entries`]
    pub fn build(self) -> OrderedMap<K, V>
    where
        K: Hash + Eq,
    {
        let mut collected = IndexMap::with_capacity(self.capacity.max(self.entries.len()));
        collected.extend(self.entries);
        OrderedMap::from_parts(collected, self.ordering)
    }
}

impl<K, V> Default for OrderedMapBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_insertion_order() {
        let m = OrderedMap::builder()
            .entry("b", 2)
            .entry("a", 1)
            .entry("b", 20)
            .build();

        assert_eq!(m.keys(), vec!["b", "a"]);
        assert_eq!(m.values(), vec![20, 1]);
        assert!(!m.ordering().is_sorted());
    }

    #[test]
    fn test_builder_with_key_comparator() {
        let mut m = OrderedMap::builder()
            .key_comparator(|a: &i32, b: &i32| b.cmp(a))
            .capacity(16)
            .entries(vec![(1, ()), (3, ()), (2, ())])
            .build();

        assert_eq!(m.keys(), vec![3, 2, 1]);
        m.insert(5, ());
        assert_eq!(m.keys(), vec![5, 3, 2, 1]);
    }
}
