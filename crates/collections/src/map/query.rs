//! Lookups, quantifiers and folds over an ordered map
//!
//! `find`, `find_key` and `pick` promise a result and report a miss as
//! [`Error::KeyNotFound`]; their `try_*` twins return `Option` instead.

use super::OrderedMap;
use ordo_core::{Error, Result};
use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

impl<K, V> OrderedMap<K, V> {
    /// First key (in current order) whose entry matches `predicate`
    pub fn find_key<P>(&self, predicate: P) -> Result<&K>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.try_find_key(predicate)
            .ok_or_else(|| Error::no_match("OrderedMap::find_key"))
    }

    /// Like [`OrderedMap::find_key`], with `None` when nothing matches
    pub fn try_find_key<P>(&self, mut predicate: P) -> Option<&K>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.iter()
            .find(|(key, value)| predicate(key, value))
            .map(|(key, _)| key)
    }

    /// Whether every entry matches; true for an empty map
    pub fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.iter().all(|(key, value)| predicate(key, value))
    }

    /// Whether some entry matches; false for an empty map
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.iter().any(|(key, value)| predicate(key, value))
    }

    /// Accumulate over entries from first to last
    pub fn fold<S, F>(&self, initial: S, mut folder: F) -> S
    where
        F: FnMut(S, &K, &V) -> S,
    {
        self.iter()
            .fold(initial, |state, (key, value)| folder(state, key, value))
    }

    /// Accumulate over entries from last to first
    pub fn fold_back<S, F>(&self, initial: S, mut folder: F) -> S
    where
        F: FnMut(&K, &V, S) -> S,
    {
        self.iter()
            .rfold(initial, |state, (key, value)| folder(key, value, state))
    }

    /// First `Some` produced by `chooser`, scanning in order
    pub fn pick<R, F>(&self, chooser: F) -> Result<R>
    where
        F: FnMut(&K, &V) -> Option<R>,
    {
        self.try_pick(chooser)
            .ok_or_else(|| Error::no_match("OrderedMap::pick"))
    }

    /// Like [`OrderedMap::pick`], with `None` when nothing is chosen
    pub fn try_pick<R, F>(&self, mut chooser: F) -> Option<R>
    where
        F: FnMut(&K, &V) -> Option<R>,
    {
        self.iter().find_map(|(key, value)| chooser(key, value))
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq,
{
    /// Value for `key`, or a key-not-found error
    pub fn find<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.get(key)
            .ok_or_else(|| Error::key_not_found("OrderedMap::find", &key))
    }

    /// Order-independent equality with a custom value comparison
    ///
    /// Both maps must hold exactly the same keys, and `predicate` must accept
    /// the pair of values stored under each key.
    pub fn equal_by<W, P>(&self, other: &OrderedMap<K, W>, mut predicate: P) -> bool
    where
        P: FnMut(&V, &W) -> bool,
    {
        self.len() == other.len()
            && self.iter().all(|(key, value)| match other.get(key) {
                Some(theirs) => predicate(value, theirs),
                None => false,
            })
    }
}
