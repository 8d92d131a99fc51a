//! A keyed [disjoint-sets/union-find] structure with deletion.
//!
//! See [`UfdMap<K>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UfdMap<K>`]: struct.UfdMap.html

use {
    std::{
        borrow::Borrow,
        collections::{hash_map::RandomState, HashMap},
        fmt,
        hash::{BuildHasher, Hash},
        iter::FusedIterator,
    },
    bit_vec::BitVec,
    crate::{
        forest::{Forest, Removal},
        Error,
    },
};

/// A map from elements of type `K` to the disjoint sets they belong to,
/// with arbitrary elements deletable again.
///
/// Elements are bound to slots of an internal [`Forest`]; the forest keeps
/// the sets in trees whose auxiliary lists allow a deleted element to be
/// unlinked locally instead of being tombstoned, so the structure never
/// holds more slots than it has seen live at once. `union`, `find` and
/// `delete` all run in amortized `O(log n)` time.
///
/// # Examples
///
/// ```
/// use ufd::UfdMap;
///
/// let mut towns = UfdMap::new();
///
/// for town in ["ayr", "banff", "crail", "dunbar"] {
///     towns.make_set(town)?;
/// }
///
/// towns.union(&"ayr", &"banff")?;
/// towns.union(&"banff", &"crail")?;
///
/// assert!(towns.same_set(&"ayr", &"crail")?);
/// assert!(!towns.same_set(&"ayr", &"dunbar")?);
///
/// towns.delete(&"banff")?;
/// assert!(towns.same_set(&"ayr", &"crail")?);
/// assert!(!towns.contains_key(&"banff"));
/// # Ok::<(), ufd::Error>(())
/// ```
///
/// [`Forest`]: ../forest/struct.Forest.html
#[derive(Clone)]
pub struct UfdMap<K, S = RandomState> {
    /// Binds each element to its forest slot.
    map: HashMap<K, usize, S>,
    /// Binds each forest slot back to its element, `None` for vacant slots.
    keys: Vec<Option<K>>,
    forest: Forest,
}

impl<K> UfdMap<K, RandomState> {
    /// Constructs a new, empty `UfdMap<K>`.
    #[inline]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            keys: Vec::new(),
            forest: Forest::new(),
        }
    }

    /// Constructs a new, empty `UfdMap<K>` that can hold `capacity`
    /// elements without reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
            forest: Forest::with_capacity(capacity),
        }
    }
}

impl<K, S> UfdMap<K, S> {
    /// Constructs a new, empty `UfdMap<K, S>` that uses `hasher` to hash
    /// elements.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            map: HashMap::with_hasher(hasher),
            keys: Vec::new(),
            forest: Forest::new(),
        }
    }

    /// Constructs a new, empty `UfdMap<K, S>` with the specified capacity
    /// that uses `hasher` to hash elements.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, hasher),
            keys: Vec::with_capacity(capacity),
            forest: Forest::with_capacity(capacity),
        }
    }

    /// Returns the amount of elements in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the map contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes all elements from the map.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
        self.keys.clear();
        self.forest.clear();
    }

    /// Returns a reference to the map's `BuildHasher`.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }

    /// An iterator visiting all elements in arbitrary order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }
}

impl<K, S> UfdMap<K, S>
where
    K: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Adds `key` to the map as a new singleton set.
    ///
    /// # Errors
    ///
    /// If `key` is already in the map.
    pub fn make_set(&mut self, key: K) -> Result<(), Error> {
        if self.map.contains_key(&key) {
            return Err(Error::DuplicateElement);
        }

        let index = self.forest.make_set();
        if index == self.keys.len() {
            self.keys.push(Some(key.clone()));
        } else {
            self.keys[index] = Some(key.clone());
        }
        self.map.insert(key, index);

        Ok(())
    }

    /// Returns `true` if `key` is in the map.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Gives a reference to the representative of the set that `key`
    /// belongs to.
    ///
    /// Two elements of the same set always report the same representative
    /// until the next `union` or `delete` touching their set. The walk to
    /// the representative restructures the set's tree, which is why this
    /// takes `&mut self`; see [`same_set`] for a read-only membership test.
    ///
    /// # Errors
    ///
    /// If `key` is not in the map.
    ///
    /// [`same_set`]: #method.same_set
    pub fn find<Q>(&mut self, key: &Q) -> Result<&K, Error>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let index = *self.map.get(key).ok_or(Error::NotFound)?;
        let root = self.forest.find(index);

        Ok(self.keys[root].as_ref().unwrap())
    }

    /// Joins the sets that `first_key` and `second_key` belong to. Joining
    /// a set with itself is a no-op.
    ///
    /// # Errors
    ///
    /// If either key is not in the map.
    pub fn union<Q>(&mut self, first_key: &Q, second_key: &Q) -> Result<(), Error>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let first = *self.map.get(first_key).ok_or(Error::NotFound)?;
        let second = *self.map.get(second_key).ok_or(Error::NotFound)?;
        self.forest.union(first, second);

        Ok(())
    }

    /// Returns `true` if `first_key` and `second_key` are in the same set.
    ///
    /// # Errors
    ///
    /// If either key is not in the map.
    pub fn same_set<Q>(&self, first_key: &Q, second_key: &Q) -> Result<bool, Error>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let first = *self.map.get(first_key).ok_or(Error::NotFound)?;
        let second = *self.map.get(second_key).ok_or(Error::NotFound)?;

        Ok(self.forest.same_set(first, second))
    }

    /// Removes `key` from the map and from its set. The other elements of
    /// the set stay joined.
    ///
    /// # Errors
    ///
    /// If `key` is not in the map.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<(), Error>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let index = *self.map.get(key).ok_or(Error::NotFound)?;

        match self.forest.delete(index) {
            Removal::Unlinked => {
                let key = self.keys[index].take().unwrap();
                self.map.remove::<K>(&key);
            }
            Removal::Relocated { leaf } => {
                // The forest freed the leaf's slot in place of `index`, so
                // the leaf's occupant moves into the vacated binding.
                let key = self.keys[index].take().unwrap();
                self.map.remove::<K>(&key);

                let moved = self.keys[leaf].take().unwrap();
                *self.map.get_mut::<K>(&moved).unwrap() = index;
                self.keys[index] = Some(moved);
            }
        }

        Ok(())
    }

    /// Returns the amount of elements in the set that `key` belongs to.
    ///
    /// This takes time linear in the size of that set.
    ///
    /// # Errors
    ///
    /// If `key` is not in the map.
    pub fn len_of_set<Q>(&self, key: &Q) -> Result<usize, Error>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let index = *self.map.get(key).ok_or(Error::NotFound)?;

        Ok(self.forest.tree_len(index))
    }

    /// An iterator visiting every element of the set that `key` belongs
    /// to, `key` included, in the internal traversal order.
    ///
    /// # Errors
    ///
    /// If `key` is not in the map.
    pub fn set<Q>(&self, key: &Q) -> Result<Set<'_, K, S>, Error>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let index = *self.map.get(key).ok_or(Error::NotFound)?;
        let root = self.forest.find_final(index);

        Ok(Set {
            parent: self,
            start: root,
            current: Some(root),
        })
    }

    /// An iterator visiting every element that is not in the set that
    /// `key` belongs to, in arbitrary order.
    ///
    /// # Errors
    ///
    /// If `key` is not in the map.
    pub fn other_sets<Q>(&self, key: &Q) -> Result<impl Iterator<Item = &K>, Error>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let index = *self.map.get(key).ok_or(Error::NotFound)?;
        let root = self.forest.find_final(index);

        Ok(self
            .map
            .iter()
            .filter(move |&(_, &index)| self.forest.find_final(index) != root)
            .map(|(key, _)| key))
    }

    /// Returns the amount of disjoint sets in the map.
    ///
    /// This takes time linear in the amount of elements.
    pub fn amount_of_sets(&self) -> usize {
        let mut roots = BitVec::from_elem(self.keys.len(), false);
        let mut amount = 0;

        for &index in self.map.values() {
            let root = self.forest.find_final(index);
            if !roots[root] {
                roots.set(root, true);
                amount += 1;
            }
        }

        amount
    }
}

/// An iterator over the elements of one set of a [`UfdMap`], created by
/// [`UfdMap::set`].
///
/// [`UfdMap`]: struct.UfdMap.html
/// [`UfdMap::set`]: struct.UfdMap.html#method.set
#[derive(Clone)]
pub struct Set<'a, K, S = RandomState> {
    parent: &'a UfdMap<K, S>,
    start: usize,
    current: Option<usize>,
}

impl<'a, K, S> Iterator for Set<'a, K, S> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        let next = self.parent.forest.dfs_next(current);
        self.current = if next == self.start { None } else { Some(next) };

        self.parent.keys[current].as_ref()
    }
}

impl<K, S> FusedIterator for Set<'_, K, S> {}

impl<K> Default for UfdMap<K, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> fmt::Debug for UfdMap<K, S>
where
    K: fmt::Debug,
{
    /// Writes every element with the number of its set. Set numbers are
    /// assigned in order of the elements' internal slots, so that the same
    /// partition always prints the same way regardless of hash order.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set_numbers = HashMap::new();
        let mut map = formatter.debug_map();

        for (slot, key) in self.keys.iter().enumerate() {
            if let Some(key) = key {
                let root = self.forest.find_final(slot);
                let next = set_numbers.len();
                let number = *set_numbers.entry(root).or_insert(next);
                map.entry(key, &number);
            }
        }

        map.finish()
    }
}

impl<K, S> PartialEq for UfdMap<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Two maps are equal if they hold the same elements partitioned into
    /// the same sets, regardless of how the sets are represented
    /// internally.
    fn eq(&self, other: &Self) -> bool {
        if self.map.len() != other.map.len() {
            return false;
        }

        let mut pairing = HashMap::new();
        let mut reverse = HashMap::new();

        for (key, &index) in &self.map {
            let other_index = if let Some(&other_index) = other.map.get(key) {
                other_index
            } else {
                return false;
            };

            let root = self.forest.find_final(index);
            let other_root = other.forest.find_final(other_index);

            if *pairing.entry(root).or_insert(other_root) != other_root {
                return false;
            }
            if *reverse.entry(other_root).or_insert(root) != root {
                return false;
            }
        }

        true
    }
}

impl<K, S> Eq for UfdMap<K, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
}

impl<K> FromIterator<K> for UfdMap<K, RandomState>
where
    K: Clone + Eq + Hash,
{
    /// Collects the elements into singleton sets, skipping duplicates.
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        map.extend(iter);

        map
    }
}

impl<K, S> Extend<K> for UfdMap<K, S>
where
    K: Clone + Eq + Hash,
    S: BuildHasher,
{
    /// Adds the elements as singleton sets, skipping duplicates.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
    {
        for key in iter {
            let _ = self.make_set(key);
        }
    }
}

#[cfg(feature = "proptest")]
impl<K> proptest::arbitrary::Arbitrary for UfdMap<K>
where
    K: proptest::arbitrary::Arbitrary + Clone + Eq + Hash + fmt::Debug + 'static,
    K::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, K::Parameters);
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    /// Generates a map by pairing arbitrary elements with group labels and
    /// joining the elements that share a label.
    fn arbitrary_with((size, params): Self::Parameters) -> Self::Strategy {
        use proptest::strategy::Strategy;

        let entry = (proptest::arbitrary::any_with::<K>(params), 0usize..8);
        proptest::collection::vec(entry, size)
            .prop_map(|entries| {
                let mut map = UfdMap::new();
                let mut group_leaders: HashMap<usize, K> = HashMap::new();

                for (key, group) in entries {
                    if map.make_set(key.clone()).is_err() {
                        continue;
                    }
                    if let Some(leader) = group_leaders.get(&group) {
                        let leader = leader.clone();
                        map.union(&leader, &key).unwrap();
                    } else {
                        group_leaders.insert(group, key);
                    }
                }

                map
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn map_of(range: std::ops::Range<u32>) -> UfdMap<u32> {
        range.collect()
    }

    #[test]
    fn make_set_rejects_duplicates() {
        let mut map = UfdMap::new();

        assert_eq!(map.make_set("elm"), Ok(()));
        assert_eq!(map.make_set("oak"), Ok(()));
        assert_eq!(map.make_set("elm"), Err(Error::DuplicateElement));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn missing_elements_are_reported() {
        let mut map = map_of(0..4);

        assert_eq!(map.find(&7), Err(Error::NotFound));
        assert_eq!(map.union(&0, &7), Err(Error::NotFound));
        assert_eq!(map.same_set(&7, &0), Err(Error::NotFound));
        assert_eq!(map.delete(&7), Err(Error::NotFound));
        assert_eq!(map.len_of_set(&7), Err(Error::NotFound));
    }

    #[test]
    fn union_and_membership() {
        let mut map = map_of(1..9);

        map.union(&1, &2).unwrap();
        map.union(&3, &4).unwrap();
        map.union(&2, &3).unwrap();
        map.union(&5, &6).unwrap();

        assert!(map.same_set(&1, &4).unwrap());
        assert!(map.same_set(&5, &6).unwrap());
        assert!(!map.same_set(&1, &5).unwrap());
        assert!(!map.same_set(&7, &8).unwrap());
        assert_eq!(map.len_of_set(&1).unwrap(), 4);
        assert_eq!(map.amount_of_sets(), 4);
    }

    #[test]
    fn two_groups_stay_apart_and_survive_a_deletion() {
        let mut map = map_of(1..9);

        map.union(&1, &2).unwrap();
        map.union(&3, &4).unwrap();
        map.union(&1, &3).unwrap();
        map.union(&5, &6).unwrap();
        map.union(&5, &7).unwrap();
        map.union(&5, &8).unwrap();

        let first = *map.find(&1).unwrap();
        for key in [2, 3, 4] {
            assert_eq!(*map.find(&key).unwrap(), first);
        }
        let second = *map.find(&5).unwrap();
        for key in [6, 7, 8] {
            assert_eq!(*map.find(&key).unwrap(), second);
        }
        assert_ne!(first, second);

        map.delete(&6).unwrap();

        assert_eq!(map.find(&6), Err(Error::NotFound));
        assert!(map.same_set(&5, &7).unwrap());
        assert!(map.same_set(&5, &8).unwrap());
        assert!(!map.same_set(&5, &1).unwrap());
    }

    #[test]
    fn representatives_agree_within_a_set() {
        let mut map = map_of(0..10);
        for pair in (0..10).collect::<Vec<u32>>().windows(2) {
            map.union(&pair[0], &pair[1]).unwrap();
        }

        let representative = *map.find(&0).unwrap();
        for key in 1..10 {
            assert_eq!(*map.find(&key).unwrap(), representative);
        }
    }

    #[test]
    fn delete_interior_element_keeps_the_rest_joined() {
        let mut map = map_of(1..9);
        for pair in (1..9).collect::<Vec<u32>>().windows(2) {
            map.union(&pair[0], &pair[1]).unwrap();
        }

        map.delete(&6).unwrap();

        assert!(!map.contains_key(&6));
        assert_eq!(map.len(), 7);
        assert_eq!(map.len_of_set(&1).unwrap(), 7);
        for key in [1, 2, 3, 4, 5, 7, 8] {
            assert!(map.same_set(&1, &key).unwrap());
        }
    }

    #[rstest]
    #[case::leaf(13)]
    #[case::interior(6)]
    #[case::smallest(0)]
    #[case::largest(15)]
    fn delete_any_element_of_a_large_set(#[case] victim: u32) {
        let mut map = map_of(0..16);
        for pair in (0..16).collect::<Vec<u32>>().windows(2) {
            map.union(&pair[0], &pair[1]).unwrap();
        }

        map.delete(&victim).unwrap();

        assert!(!map.contains_key(&victim));
        let survivors: Vec<u32> = (0..16).filter(|&key| key != victim).collect();
        for pair in survivors.windows(2) {
            assert!(map.same_set(&pair[0], &pair[1]).unwrap());
        }
        assert_eq!(map.len_of_set(&survivors[0]).unwrap(), 15);
    }

    #[test]
    fn delete_representative_of_a_pair() {
        let mut map = map_of(0..2);
        map.union(&0, &1).unwrap();
        let representative = *map.find(&0).unwrap();

        map.delete(&representative).unwrap();

        let survivor = 1 - representative;
        assert!(map.contains_key(&survivor));
        assert_eq!(map.len_of_set(&survivor).unwrap(), 1);
    }

    #[test]
    fn delete_works_with_borrowed_queries() {
        let names = [
            "ayr", "banff", "crail", "dunbar", "elgin", "forres", "girvan", "huntly",
        ];
        let mut map = UfdMap::new();
        for name in names {
            map.make_set(name.to_string()).unwrap();
        }
        for pair in names.windows(2) {
            map.union(pair[0], pair[1]).unwrap();
        }

        // A leaf removal and a representative removal, so that both the
        // plain unbinding and the relocated-leaf rebinding run with owned
        // keys behind borrowed lookups.
        map.delete("banff").unwrap();
        let representative = map.find("ayr").unwrap().clone();
        map.delete(&representative).unwrap();

        assert!(!map.contains_key("banff"));
        assert!(!map.contains_key(representative.as_str()));
        assert_eq!(map.len(), 6);
        let survivors: Vec<&str> = names
            .iter()
            .copied()
            .filter(|name| map.contains_key(*name))
            .collect();
        assert_eq!(survivors.len(), 6);
        for pair in survivors.windows(2) {
            assert!(map.same_set(pair[0], pair[1]).unwrap());
        }
    }

    #[test]
    fn delete_then_reinsert_starts_a_fresh_singleton() {
        let mut map = map_of(0..6);
        for pair in (0..6).collect::<Vec<u32>>().windows(2) {
            map.union(&pair[0], &pair[1]).unwrap();
        }

        map.delete(&3).unwrap();
        map.make_set(3).unwrap();

        assert!(!map.same_set(&3, &0).unwrap());
        assert_eq!(map.len_of_set(&3).unwrap(), 1);
        assert_eq!(map.amount_of_sets(), 2);
    }

    #[test]
    fn set_iterates_exactly_the_members() {
        let mut map = map_of(0..9);
        map.union(&0, &1).unwrap();
        map.union(&1, &2).unwrap();
        map.union(&5, &6).unwrap();

        let members: HashSet<u32> = map.set(&1).unwrap().copied().collect();
        assert_eq!(members, HashSet::from([0, 1, 2]));

        let others: HashSet<u32> = map.other_sets(&1).unwrap().copied().collect();
        assert_eq!(others, HashSet::from([3, 4, 5, 6, 7, 8]));

        let loners: HashSet<u32> = map.set(&8).unwrap().copied().collect();
        assert_eq!(loners, HashSet::from([8]));
    }

    #[test]
    fn churn_of_unions_and_deletions() {
        let mut map = map_of(0..40);
        for chunk in (0..40).collect::<Vec<u32>>().chunks(10) {
            for pair in chunk.windows(2) {
                map.union(&pair[0], &pair[1]).unwrap();
            }
        }
        assert_eq!(map.amount_of_sets(), 4);

        for key in (0..40).step_by(3) {
            map.delete(&key).unwrap();
        }

        for chunk in (0..40).collect::<Vec<u32>>().chunks(10) {
            let alive: Vec<u32> = chunk.iter().copied().filter(|key| map.contains_key(key)).collect();
            for pair in alive.windows(2) {
                assert!(map.same_set(&pair[0], &pair[1]).unwrap());
            }
        }
        assert_eq!(map.amount_of_sets(), 4);
    }

    #[test]
    fn equality_ignores_internal_representation() {
        let mut left = map_of(0..5);
        left.union(&0, &1).unwrap();
        left.union(&1, &2).unwrap();

        let mut right = map_of(0..5);
        right.union(&2, &1).unwrap();
        right.union(&2, &0).unwrap();
        right.find(&0).unwrap();

        assert_eq!(left, right);

        right.union(&3, &4).unwrap();
        assert_ne!(left, right);
    }

    #[test]
    fn debug_names_sets_stably() {
        let mut map = UfdMap::new();
        map.make_set('a').unwrap();
        map.make_set('b').unwrap();
        map.make_set('c').unwrap();
        map.union(&'a', &'c').unwrap();

        assert_eq!(format!("{:?}", map), "{'a': 0, 'b': 1, 'c': 0}");
    }

    #[cfg(feature = "proptest")]
    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// A naive partition of `u8` keys kept as a list of sets.
        #[derive(Debug, Default)]
        struct Model {
            sets: Vec<HashSet<u8>>,
        }

        impl Model {
            fn position(&self, key: u8) -> Option<usize> {
                self.sets.iter().position(|set| set.contains(&key))
            }

            fn make_set(&mut self, key: u8) -> Result<(), Error> {
                if self.position(key).is_some() {
                    return Err(Error::DuplicateElement);
                }
                self.sets.push(HashSet::from([key]));
                Ok(())
            }

            fn union(&mut self, first: u8, second: u8) -> Result<(), Error> {
                let i = self.position(first).ok_or(Error::NotFound)?;
                let j = self.position(second).ok_or(Error::NotFound)?;
                if i != j {
                    let absorbed = self.sets.swap_remove(j);
                    let target = self.position(first).unwrap();
                    self.sets[target].extend(absorbed);
                }
                Ok(())
            }

            fn delete(&mut self, key: u8) -> Result<(), Error> {
                let i = self.position(key).ok_or(Error::NotFound)?;
                self.sets[i].remove(&key);
                if self.sets[i].is_empty() {
                    self.sets.swap_remove(i);
                }
                Ok(())
            }

            fn same_set(&self, first: u8, second: u8) -> Result<bool, Error> {
                let i = self.position(first).ok_or(Error::NotFound)?;
                let j = self.position(second).ok_or(Error::NotFound)?;
                Ok(i == j)
            }
        }

        #[derive(Clone, Debug)]
        enum Op {
            MakeSet(u8),
            Union(u8, u8),
            Delete(u8),
            Find(u8),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (0u8..32).prop_map(Op::MakeSet),
                (0u8..32, 0u8..32).prop_map(|(a, b)| Op::Union(a, b)),
                (0u8..32).prop_map(Op::Delete),
                (0u8..32).prop_map(Op::Find),
            ]
        }

        proptest! {
            /// Any interleaving of operations leaves the map partitioned
            /// exactly like the naive model, including the errors the
            /// operations report along the way.
            #[test]
            fn behaves_like_the_naive_model(ops in proptest::collection::vec(op(), 0..200)) {
                let mut map: UfdMap<u8> = UfdMap::new();
                let mut model = Model::default();

                for op in ops {
                    match op {
                        Op::MakeSet(key) => {
                            prop_assert_eq!(map.make_set(key), model.make_set(key));
                        }
                        Op::Union(first, second) => {
                            prop_assert_eq!(map.union(&first, &second), model.union(first, second));
                        }
                        Op::Delete(key) => {
                            prop_assert_eq!(map.delete(&key), model.delete(key));
                        }
                        Op::Find(key) => {
                            prop_assert_eq!(map.find(&key).is_ok(), model.position(key).is_some());
                        }
                    }
                }

                prop_assert_eq!(map.len(), model.sets.iter().map(HashSet::len).sum::<usize>());
                let keys: Vec<u8> = map.keys().copied().collect();
                for &first in &keys {
                    for &second in &keys {
                        prop_assert_eq!(
                            map.same_set(&first, &second),
                            model.same_set(first, second)
                        );
                    }
                }
            }

            /// Arbitrary maps always satisfy their own accounting.
            #[test]
            fn generated_maps_are_consistent(map in any::<UfdMap<u8>>()) {
                let keys: Vec<u8> = map.keys().copied().collect();
                prop_assert_eq!(map.len(), keys.len());

                let mut counted = 0;
                let mut seen: HashSet<u8> = HashSet::new();
                for &key in &keys {
                    if seen.contains(&key) {
                        continue;
                    }
                    counted += 1;
                    for member in map.set(&key).unwrap() {
                        prop_assert!(seen.insert(*member));
                    }
                }
                prop_assert_eq!(map.amount_of_sets(), counted);
            }
        }
    }
}
