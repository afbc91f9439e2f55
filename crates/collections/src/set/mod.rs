//! Ordered set built on [`OrderedMap`]
//!
//! [`OrderedSet`] stores each item as a key of an `OrderedMap<T, ()>`, so it
//! inherits the map's ordering policies and its uniqueness guarantee. The set
//! adds the set-algebra layer on top (see `algebra`).

mod algebra;
mod serde_impl;

use crate::map::OrderedMap;
use crate::ordering::OrderingPolicy;
use ordo_core::{Result, SequenceExt};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;

/// Set of unique items kept in insertion or comparator order
pub struct OrderedSet<T> {
    map: OrderedMap<T, ()>,
}

impl<T> OrderedSet<T> {
    /// Create an empty set in insertion order
    pub fn new() -> Self {
        Self {
            map: OrderedMap::new(),
        }
    }

    /// Create an empty set with the given ordering policy
    pub fn with_ordering(ordering: OrderingPolicy<T, ()>) -> Self {
        Self {
            map: OrderedMap::with_ordering(ordering),
        }
    }

    /// Create an empty set kept sorted by `compare`
    pub fn with_comparator<F>(compare: F) -> Self
    where
        T: 'static,
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Self::with_ordering(OrderingPolicy::by_key_with(compare))
    }

    /// The ordering policy this set was created with
    pub fn ordering(&self) -> &OrderingPolicy<T, ()> {
        self.map.ordering()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the set has no items
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate items in their current order
    pub fn iter(&self) -> indexmap::map::Keys<'_, T, ()> {
        self.map.entries.keys()
    }

    /// Snapshot of the items in current order
    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.map.keys()
    }

    /// Apply `action` to each item in order
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(|item| action(item));
    }

    /// Apply `action` to each item in order, with its position
    pub fn for_each_indexed<F>(&self, mut action: F)
    where
        F: FnMut(usize, &T),
    {
        self.map.for_each_indexed(|index, item, _| action(index, item));
    }

    /// Whether every item matches; true for an empty set
    pub fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(|item| predicate(item))
    }

    /// Whether some item matches; false for an empty set
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(|item| predicate(item))
    }

    /// Accumulate over items from first to last
    pub fn fold<S, F>(&self, initial: S, mut folder: F) -> S
    where
        F: FnMut(S, &T) -> S,
    {
        self.iter().fold(initial, |state, item| folder(state, item))
    }

    /// Accumulate over items from last to first
    pub fn fold_back<S, F>(&self, initial: S, mut folder: F) -> S
    where
        F: FnMut(&T, S) -> S,
    {
        self.iter().rfold(initial, |state, item| folder(item, state))
    }

    /// Largest item
    ///
    /// # Errors
    ///
    /// Returns [`ordo_core::Error::EmptyInput`] for an empty set.
    pub fn max_element(&self) -> Result<&T>
    where
        T: Ord,
    {
        self.iter().try_max("OrderedSet::max_element")
    }

    /// Smallest item; fails with `EmptyInput` on an empty set
    pub fn min_element(&self) -> Result<&T>
    where
        T: Ord,
    {
        self.iter().try_min("OrderedSet::min_element")
    }

    /// Item with the largest projection, the first one among ties
    pub fn max_element_by<R, F>(&self, mut projection: F) -> Result<&T>
    where
        R: Ord,
        F: FnMut(&T) -> R,
    {
        self.iter()
            .try_max_by_key("OrderedSet::max_element_by", |item| projection(item))
    }

    /// Item with the smallest projection, the first one among ties
    pub fn min_element_by<R, F>(&self, mut projection: F) -> Result<&T>
    where
        R: Ord,
        F: FnMut(&T) -> R,
    {
        self.iter()
            .try_min_by_key("OrderedSet::min_element_by", |item| projection(item))
    }
}

impl<T> OrderedSet<T>
where
    T: Hash + Eq,
{
    /// A set holding exactly `item`
    pub fn singleton(item: T) -> Self {
        let mut set = Self::new();
        set.add(item);
        set
    }

    /// Build a set from `items`; duplicates collapse to one member
    pub fn from_items<I>(items: I, ordering: OrderingPolicy<T, ()>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            map: OrderedMap::from_entries(items.into_iter().map(|item| (item, ())), ordering),
        }
    }

    /// Add `item`, returning whether it was not already present
    pub fn add(&mut self, item: T) -> bool {
        self.map.insert(item, ()).is_none()
    }

    /// Remove `item`, returning whether it was present
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(item).is_some()
    }

    /// Whether `item` is a member
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(item)
    }

    /// Position of `item` in the current order
    pub fn index_of<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.index_of(item)
    }

    /// Image of every item under `mapping`, in insertion order
    ///
    /// Items with equal images collapse, so the result can be smaller.
    pub fn map<R, F>(&self, mut mapping: F) -> OrderedSet<R>
    where
        R: Hash + Eq,
        F: FnMut(&T) -> R,
    {
        self.iter().map(|item| mapping(item)).collect()
    }
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OrderedSet<T> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Equality ignores order: the same members on both sides.
impl<T: Hash + Eq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T: Hash + Eq> Eq for OrderedSet<T> {}

impl<T: Hash + Eq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter, OrderingPolicy::InsertionOrder)
    }
}

impl<T: Hash + Eq> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.map.extend(iter.into_iter().map(|item| (item, ())));
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = indexmap::map::IntoKeys<T, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.entries.into_keys()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Keys<'a, T, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
