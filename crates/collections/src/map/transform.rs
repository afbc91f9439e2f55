//! Copying transformations that produce new maps

use super::OrderedMap;
use crate::ordering::OrderingPolicy;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::hash::Hash;

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Entries matching `predicate`, in the same order and under the same policy
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        let entries = self
            .iter()
            .filter(|(key, value)| predicate(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect::<IndexMap<_, _>>();
        Self::from_parts(entries, self.ordering().clone())
    }

    /// Split into `(matching, rest)`, both keeping this map's policy
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&K, &V) -> bool,
    {
        let mut matching = IndexMap::new();
        let mut rest = IndexMap::new();
        for (key, value) in self.iter() {
            let target = if predicate(key, value) {
                &mut matching
            } else {
                &mut rest
            };
            target.insert(key.clone(), value.clone());
        }
        (
            Self::from_parts(matching, self.ordering().clone()),
            Self::from_parts(rest, self.ordering().clone()),
        )
    }

    /// Copy of this map with `key` set to `value`
    pub fn with_entry(&self, key: K, value: V) -> Self {
        let mut map = self.clone();
        map.insert(key, value);
        map
    }

    /// Copy of this map without `key`
    pub fn without<Q>(&self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut map = self.clone();
        map.remove(key);
        map
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Same keys in the same order, values transformed by `mapping`
    ///
    /// The result is in insertion order: a comparator written for `V` has no
    /// meaning for the new value type, so it is not carried over.
    pub fn map_values<R, F>(&self, mut mapping: F) -> OrderedMap<K, R>
    where
        F: FnMut(&K, &V) -> R,
    {
        let entries = self
            .iter()
            .map(|(key, value)| (key.clone(), mapping(key, value)))
            .collect::<IndexMap<_, _>>();
        OrderedMap::from_parts(entries, OrderingPolicy::InsertionOrder)
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Rekey and revalue every entry, in insertion order
    ///
    /// When two entries map to the same new key the later one overwrites the
    /// value but the key keeps its first position.
    pub fn map_to<K2, V2, F>(&self, mut mapping: F) -> OrderedMap<K2, V2>
    where
        K2: Hash + Eq,
        F: FnMut(&K, &V) -> (K2, V2),
    {
        OrderedMap::from_entries(
            self.iter().map(|(key, value)| mapping(key, value)),
            OrderingPolicy::InsertionOrder,
        )
    }
}
