//! Set algebra: inclusion tests and combinations of sets
//!
//! Results of `union`, `intersect` and `difference` keep the receiver's
//! ordering policy: under insertion order the receiver's items come first,
//! followed by the other set's contributions in their order.
//!
//! **Note:** [`OrderedSet::difference`] is the *symmetric* difference (items
//! in exactly one of the two sets), not the relative complement.

use super::OrderedSet;
use std::hash::Hash;

impl<T> OrderedSet<T>
where
    T: Hash + Eq,
{
    /// Every item of `self` is in `other`
    ///
    /// The empty set is a subset of every set, and every set is a subset of
    /// itself.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// `self` is a non-empty subset of `other` with strictly fewer items
    ///
    /// Equal sets are not proper subsets of each other, and the empty set is
    /// never a proper subset.
    pub fn is_proper_subset_of(&self, other: &Self) -> bool {
        !self.is_empty() && self.len() < other.len() && self.is_subset_of(other)
    }

    /// Every item of `other` is in `self`
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// `other` is a proper subset of `self`
    pub fn is_proper_superset_of(&self, other: &Self) -> bool {
        other.is_proper_subset_of(self)
    }
}

impl<T> OrderedSet<T>
where
    T: Hash + Eq + Clone,
{
    /// Items matching `predicate`, keeping order and policy
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self {
            map: self.map.filter(|item, _| predicate(item)),
        }
    }

    /// Split into `(matching, rest)`
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&T) -> bool,
    {
        let (matching, rest) = self.map.partition(|item, _| predicate(item));
        (Self { map: matching }, Self { map: rest })
    }

    /// Items present in either set
    pub fn union(&self, other: &Self) -> Self {
        let mut output = self.clone();
        output.extend(other.iter().cloned());
        output
    }

    /// Items present in both sets
    pub fn intersect(&self, other: &Self) -> Self {
        self.filter(|item| other.contains(item))
    }

    /// Symmetric difference: items present in exactly one of the two sets
    ///
    /// This is *not* `self \ other`; for the relative complement use
    /// `self.filter(|x| !other.contains(x))`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut output = self.filter(|item| !other.contains(item));
        output.extend(other.iter().filter(|item| !self.contains(*item)).cloned());
        output
    }

    /// Left fold of [`OrderedSet::union`]; empty input gives an empty set
    pub fn union_many<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        Self::combine_many(sets, Self::union)
    }

    /// Left fold of [`OrderedSet::intersect`]; empty input gives an empty set
    pub fn intersect_many<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        Self::combine_many(sets, Self::intersect)
    }

    /// Left fold of the symmetric [`OrderedSet::difference`]
    ///
    /// Empty input gives an empty set.
    pub fn difference_many<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        Self::combine_many(sets, Self::difference)
    }

    fn combine_many<'a, I, F>(sets: I, combine: F) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
        F: Fn(&Self, &Self) -> Self,
    {
        let mut sets = sets.into_iter();
        match sets.next() {
            Some(first) => sets.fold(first.clone(), |acc, set| combine(&acc, set)),
            None => Self::new(),
        }
    }
}
