#![doc = include_str!("../README.md")]

#![no_std]

#![warn(
    anonymous_parameters,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_qualifications,
    variant_size_differences
)]

extern crate alloc;

use core::fmt;
use core::borrow::Borrow;
use core::ops::Index;
use core::hash::{Hash, BuildHasher};
use core::iter::{FromIterator, FusedIterator};

use hashbrown::{HashMap, DefaultHashBuilder, hash_map};

use log::{debug, trace};

pub use hashbrown::TryReserveError;
pub use hashbrown::hash_map::{Drain, IntoIter, IterMut, Keys, Values, ValuesMut};

#[cfg(feature = "serde")]
mod serde_impl;

/// An unordered map from unique keys to values.
///
/// Inserting a key that is already present replaces its value, so the map
/// never holds two entries for one key. Iteration order is unspecified and may
/// change after any mutation.
///
/// A lookup miss is reported as `None`, never as a panic (except through
/// [`Index`], which mirrors `std::collections::HashMap`).
pub struct AssocMap<K, V, S = DefaultHashBuilder> {
    inner: HashMap<K, V, S>,
}

impl<K, V> AssocMap<K, V, DefaultHashBuilder> {
    /// Creates an empty `AssocMap`.
    ///
    /// The map is initially created with a capacity of 0, so it will not
    /// allocate until it is first inserted into.
    #[inline]
    pub fn new() -> Self {
        Self { inner: HashMap::new() }
    }

    /// Creates an empty `AssocMap` with the specified capacity.
    ///
    /// The map will be able to hold at least `capacity` elements without
    /// reallocating. If `capacity` is 0, the map will not allocate.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: HashMap::with_capacity(capacity) }
    }
}

impl<K, V, S> AssocMap<K, V, S> {
    /// Creates an empty `AssocMap` using the provided hasher `h`.
    #[inline]
    pub fn with_hasher(h: S) -> Self {
        Self { inner: HashMap::with_hasher(h) }
    }

    /// Creates an empty `AssocMap` with the specified initial capacity `n` and hasher `h`.
    #[inline]
    pub fn with_capacity_and_hasher(n: usize, h: S) -> Self {
        Self { inner: HashMap::with_capacity_and_hasher(n, h) }
    }

    /// Returns a reference to the map's hasher.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Returns the number of entries the map can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert("Apple", 3);
    /// map.insert("Apple", 10);
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes all entries, keeping the allocated memory for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// let capacity = map.capacity();
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), capacity);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn clear(&mut self) {
        let dropped = self.inner.len();
        self.inner.clear();
        trace!("cleared {dropped} entries");
    }

    /// Returns an iterator over the entries of the map, in arbitrary order.
    ///
    /// The iterator implements `ExactSizeIterator` and `FusedIterator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// let mut items: Vec<_> = map.iter().collect();
    /// items.sort();
    /// assert_eq!(items, vec![(&"a", &1), (&"b", &2)]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.inner.iter() }
    }

    /// Returns an iterator over the entries with mutable references to the values.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.inner.iter_mut()
    }

    /// Returns an iterator over the keys, in arbitrary order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        self.inner.keys()
    }

    /// Returns an iterator over the values, in arbitrary order.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        self.inner.values()
    }

    /// Returns an iterator over mutable references to the values.
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        self.inner.values_mut()
    }

    /// Removes every entry and returns them as an iterator.
    ///
    /// Entries not consumed by the iterator are dropped when it is.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        trace!("draining {} entries", self.inner.len());
        self.inner.drain()
    }

    /// Keeps only the entries for which `f` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_map::AssocMap;
    ///
    /// let mut map: AssocMap<i32, i32> = (0..8).map(|i| (i, i * 10)).collect();
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert_eq!(map.len(), 4);
    /// assert!(!map.contains_key(&3));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool
    {
        let before = self.inner.len();
        self.inner.retain(f);
        trace!("retain dropped {} entries", before - self.inner.len());
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// Values are not indexed, so this walks every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert("Apple", 3);
    /// map.insert("Banana", 5);
    /// assert!(map.contains_value(&5));
    /// assert!(!map.contains_value(&10));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq
    {
        self.inner.values().any(|v| v == value)
    }
}

impl<K, V, S> AssocMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts a key-value pair into the map.
    ///
    /// If the key was already present its value is replaced and the old value
    /// is returned. The size only grows when the key was absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// assert_eq!(map.insert("Apple", 3), None);
    /// assert_eq!(map.insert("Apple", 10), Some(3));
    /// assert_eq!(map.get("Apple"), Some(&10));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// `None` means the key is absent.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Returns the stored key and its value.
    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Removing an absent key does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_map::AssocMap;
    ///
    /// let mut map = AssocMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.get(&1), None);
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key)
    }

    /// Removes a key from the map, returning the stored key and value.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(key)
    }

    /// Reserves capacity for at least `additional` more entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_map::AssocMap;
    ///
    /// let mut map = AssocMap::<i32, i32>::new();
    /// map.reserve(100);
    /// assert!(map.capacity() >= 100);
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional)
    }

    /// Tries to reserve capacity for at least `additional` more entries.
    ///
    /// # Errors
    ///
    /// Returns [`TryReserveError::CapacityOverflow`] if the new capacity
    /// overflows `usize`, or [`TryReserveError::AllocError`] if the allocator
    /// reports a failure. The map is left unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc_map::{AssocMap, TryReserveError};
    ///
    /// let mut map: AssocMap<u64, u64> = AssocMap::new();
    /// assert!(map.try_reserve(16).is_ok());
    /// assert!(matches!(
    ///     map.try_reserve(usize::MAX),
    ///     Err(TryReserveError::CapacityOverflow)
    /// ));
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.inner.try_reserve(additional).map_err(|e| {
            debug!("failed to reserve {additional} entries: {e:?}");
            e
        })
    }

    /// Shrinks the capacity of the map as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit()
    }
}

/// Borrowing iterator over the entries of an `AssocMap`, in arbitrary order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    inner: hash_map::Iter<'a, K, V>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[cfg_attr(feature = "inline-more", inline)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a AssocMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut AssocMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for AssocMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<K, V, S> FromIterator<(K, V)> for AssocMap<K, V, S>
where
    K: Eq + Hash,
    S: Default + BuildHasher,
{
    #[cfg_attr(feature = "inline-more", inline)]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut map = AssocMap::with_capacity_and_hasher(
            iter.size_hint().0,
            S::default()
        );
        iter.for_each(|(k, v)| _ = map.insert(k, v));
        map
    }
}

impl<K, V, S> Extend<(K, V)> for AssocMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[cfg_attr(feature = "inline-more", inline)]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        // duplicates are likely when the map already has entries
        let reserve = if self.is_empty() {
            iter.size_hint().0
        } else {
            (iter.size_hint().0 + 1) / 2
        };
        self.reserve(reserve);
        iter.for_each(move |(k, v)| _ = self.insert(k, v));
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for AssocMap<K, V, S>
where
    K: Eq + Hash + Copy,
    V: Copy,
    S: BuildHasher,
{
    #[inline]
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        self.extend(iter.into_iter().map(|(&k, &v)| (k, v)));
    }
}

impl<K, Q, V, S> Index<&Q> for AssocMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    #[inline]
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found in AssocMap")
    }
}

impl<K, V, S> Default for AssocMap<K, V, S>
where
    S: Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> Clone for AssocMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<K, V, S> PartialEq for AssocMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(k, v)| other.get(k).map_or(false, |ov| v == ov))
    }
}

impl<K, V, S> Eq for AssocMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> fmt::Debug for AssocMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
