//! Ordered associative container
//!
//! [`OrderedMap`] stores unique keys with their values and iterates them in a
//! deterministic order chosen at construction by an [`OrderingPolicy`]:
//!
//! - **Insertion order**: a new key is appended; overwriting an existing key
//!   keeps its position.
//! - **Comparator**: entries are re-sorted (stably) after every mutation, so
//!   iteration always follows the comparator.
//!
//! Entries and the key index live in one [`IndexMap`], so a mutation can never
//! leave them disagreeing with each other.
//!
//! The container is not synchronised. Sharing it between threads for mutation
//! needs an outer lock that covers the whole map.

mod builder;
mod query;
mod serde_impl;
mod transform;

pub use builder::OrderedMapBuilder;

use crate::ordering::OrderingPolicy;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use tracing::trace;

/// Map that keeps its entries in insertion or comparator order
pub struct OrderedMap<K, V> {
    pub(crate) entries: IndexMap<K, V>,
    ordering: OrderingPolicy<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Create an empty map in insertion order
    pub fn new() -> Self {
        Self::with_ordering(OrderingPolicy::InsertionOrder)
    }

    /// Create an empty map with the given ordering policy
    pub fn with_ordering(ordering: OrderingPolicy<K, V>) -> Self {
        Self {
            entries: IndexMap::new(),
            ordering,
        }
    }

    /// Start configuring a map
    pub fn builder() -> OrderedMapBuilder<K, V> {
        OrderedMapBuilder::new()
    }

    /// The ordering policy this map was created with
    pub fn ordering(&self) -> &OrderingPolicy<K, V> {
        &self.ordering
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in their current order
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Remove every entry, keeping the ordering policy
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Apply `action` to each entry in order
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&K, &V),
    {
        for (key, value) in &self.entries {
            action(key, value);
        }
    }

    /// Apply `action` to each entry in order, with its position
    pub fn for_each_indexed<F>(&self, mut action: F)
    where
        F: FnMut(usize, &K, &V),
    {
        for (index, (key, value)) in self.entries.iter().enumerate() {
            action(index, key, value);
        }
    }

    /// Snapshot of the keys in current order
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.entries.keys().cloned().collect()
    }

    /// Snapshot of the values in current order
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.entries.values().cloned().collect()
    }

    /// Snapshot of the entries in current order
    pub fn to_entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Re-establish comparator order; a no-op in insertion order
    fn reorder(&mut self) {
        if let OrderingPolicy::Comparator(compare) = &self.ordering {
            self.entries.sort_by(|k1, v1, k2, v2| compare(k1, v1, k2, v2));
            trace!(len = self.entries.len(), "re-sorted ordered map");
        }
    }

    /// Assemble a map from already-deduplicated entries
    pub(crate) fn from_parts(entries: IndexMap<K, V>, ordering: OrderingPolicy<K, V>) -> Self {
        let mut map = Self { entries, ordering };
        map.reorder();
        map
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty map kept sorted by an entry comparator
    pub fn with_comparator<F>(compare: F) -> Self
    where
        K: 'static,
        V: 'static,
        F: Fn(&K, &V, &K, &V) -> Ordering + Send + Sync + 'static,
    {
        Self::with_ordering(OrderingPolicy::by(compare))
    }

    /// Build a map from a sequence of entries
    ///
    /// A key that appears more than once keeps the value of its last
    /// occurrence and the position of its first. Under a comparator the final
    /// order is decided by the comparator alone.
    pub fn from_entries<I>(entries: I, ordering: OrderingPolicy<K, V>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let entries = entries.into_iter();
        let mut collected = IndexMap::with_capacity(entries.size_hint().0);
        let mut seen = 0usize;
        for (key, value) in entries {
            collected.insert(key, value);
            seen += 1;
        }
        trace!(
            input = seen,
            unique = collected.len(),
            "built ordered map from entries"
        );
        Self::from_parts(collected, ordering)
    }

    /// Set the value for `key`, returning the previous value if there was one
    ///
    /// An existing key keeps its position in insertion order; a new key is
    /// appended. Under a comparator the entries are re-sorted afterwards.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.entries.insert(key, value);
        self.reorder();
        previous
    }

    /// Value for `key`, if present
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Owned copy of the value for `key`, if present
    pub fn try_get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.get(key).cloned()
    }

    /// Value for `key`, or `V::default()` when absent
    ///
    /// Use [`OrderedMap::get`] when a stored default must be told apart from
    /// a missing key.
    pub fn get_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Default + Clone,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    /// Whether `key` is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Position of `key` in the current order
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_index_of(key)
    }

    /// Remove `key`, returning its value; absent keys are ignored
    ///
    /// The remaining entries keep their relative order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.entries.shift_remove(key);
        if removed.is_some() {
            trace!(len = self.entries.len(), "removed key from ordered map");
        }
        removed
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            ordering: self.ordering.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

/// Equality ignores order: same keys, and equal values for each key.
impl<K, V> PartialEq for OrderedMap<K, V>
where
    K: Hash + Eq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.equal_by(other, |a, b| a == b)
    }
}

impl<K: Hash + Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter, OrderingPolicy::InsertionOrder)
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
        self.reorder();
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut m = OrderedMap::new();
        m.insert(1, "one");
        m.insert(1, "one");
        m.insert(2, "two");

        assert_eq!(m.keys(), vec![1, 2]);
        assert_eq!(m.values(), vec!["one", "two"]);

        assert_eq!(m.insert(1, "uno"), Some("one"));
        assert_eq!(m.to_entries(), vec![(1, "uno"), (2, "two")]);
    }

    #[test]
    fn test_comparator_resorts_after_insert() {
        let mut m = OrderedMap::with_ordering(OrderingPolicy::by_key());
        m.insert(3, 'c');
        m.insert(1, 'a');
        m.insert(2, 'b');

        assert_eq!(m.keys(), vec![1, 2, 3]);
        assert_eq!(m.index_of(&3), Some(2));
    }

    #[test]
    fn test_value_comparator_resorts_on_overwrite() {
        let mut m: OrderedMap<&str, i32> =
            OrderedMap::with_comparator(|_: &&str, v1: &i32, _: &&str, v2: &i32| v1.cmp(v2));
        m.insert("a", 1);
        m.insert("b", 2);
        m.insert("c", 3);
        m.insert("a", 10);

        assert_eq!(m.keys(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_lookups_on_missing_key() {
        let mut m: OrderedMap<String, i32> = OrderedMap::new();
        m.insert("zero".to_string(), 0);

        assert_eq!(m.get("zero"), Some(&0));
        assert_eq!(m.get("missing"), None);
        assert_eq!(m.get_or_default("missing"), 0);
        assert_eq!(m.try_get("zero"), Some(0));
        assert_eq!(m.try_get("missing"), None);
        assert!(m.contains_key("zero"));
        assert!(!m.contains_key("missing"));
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut m: OrderedMap<_, _> = (1..=5).map(|k| (k, k * 10)).collect();

        assert_eq!(m.remove(&3), Some(30));
        assert_eq!(m.remove(&3), None);
        assert_eq!(m.keys(), vec![1, 2, 4, 5]);
        assert_eq!(m.index_of(&4), Some(2));
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn test_from_entries_last_value_first_position() {
        let m = OrderedMap::from_entries(
            vec![("one", 1), ("two", 2), ("one", 11), ("two", 3)],
            OrderingPolicy::InsertionOrder,
        );

        assert_eq!(m.keys(), vec!["one", "two"]);
        assert_eq!(m.values(), vec![11, 3]);
    }

    #[test]
    fn test_snapshots_are_detached() {
        let mut m: OrderedMap<_, _> = vec![(1, 'a'), (2, 'b')].into_iter().collect();
        let keys = m.keys();
        let entries = m.to_entries();

        m.insert(3, 'c');
        m.remove(&1);

        assert_eq!(keys, vec![1, 2]);
        assert_eq!(entries, vec![(1, 'a'), (2, 'b')]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: OrderedMap<_, _> = vec![(2, "two"), (1, "one")].into_iter().collect();
        let b: OrderedMap<_, _> = vec![(1, "one"), (2, "two")].into_iter().collect();
        let c: OrderedMap<_, _> = vec![(1, "One"), (2, "Two")].into_iter().collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_extend_sorts_once_under_comparator() {
        let mut m = OrderedMap::with_ordering(OrderingPolicy::by_key());
        m.extend(vec![(5, ()), (1, ()), (3, ())]);
        assert_eq!(m.keys(), vec![1, 3, 5]);
    }

    #[test]
    fn test_for_each_indexed_visits_in_order() {
        let m: OrderedMap<_, _> = vec![('x', 1), ('y', 2)].into_iter().collect();
        let mut seen = Vec::new();
        m.for_each_indexed(|i, k, v| seen.push((i, *k, *v)));
        assert_eq!(seen, vec![(0, 'x', 1), (1, 'y', 2)]);
    }

    #[test]
    fn test_debug_renders_as_map() {
        let m: OrderedMap<_, _> = vec![(2, 'b'), (1, 'a')].into_iter().collect();
        assert_eq!(format!("{m:?}"), "{2: 'b', 1: 'a'}");
    }
}
