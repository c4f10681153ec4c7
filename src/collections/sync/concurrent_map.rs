use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use super::Locked;

/// A [`HashMap`] which can be shared between threads, taking a read lock for lookups and a write
/// lock for modifications. Values are returned by clone, so no reference outlives its lock.
pub struct ConcurrentMap<K, V> {
    inner: Locked<HashMap<K, V>>,
}

impl<K: Eq + Hash, V> ConcurrentMap<K, V> {
    pub fn new() -> ConcurrentMap<K, V> {
        ConcurrentMap {
            inner: Locked::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read(|map| map.get(key).cloned())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read(|map| map.contains_key(key))
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.write(|map| map.insert(key, value))
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write(|map| map.remove(key))
    }

    /// Calls `f` for every entry while holding the read lock. `f` must not access this map.
    pub fn for_each<F: FnMut(&K, &V)>(&self, mut f: F) {
        self.inner.read(|map| map.iter().for_each(|(k, v)| f(k, v)));
    }

    /// Replaces every value with the result of `f`, all under a single write lock.
    pub fn update<F: FnMut(&K, &V) -> V>(&self, mut f: F) {
        self.inner.write(|map| {
            for (k, v) in map.iter_mut() {
                *v = f(k, v);
            }
        });
    }

    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.read(|map| map.keys().cloned().collect())
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.inner.read(|map| map.values().cloned().collect())
    }

    /// Returns a shallow copy of the entries.
    pub fn to_map(&self) -> HashMap<K, V>
    where
        K: Clone,
        V: Clone,
    {
        self.inner.read(|map| map.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.read(|map| map.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_inner(self) -> HashMap<K, V> {
        self.inner.into_inner()
    }
}

impl<K: Eq + Hash, V> Default for ConcurrentMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<HashMap<K, V>> for ConcurrentMap<K, V> {
    fn from(map: HashMap<K, V>) -> Self {
        ConcurrentMap {
            inner: Locked::new(map),
        }
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for ConcurrentMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ConcurrentMap::from(iter.into_iter().collect::<HashMap<_, _>>())
    }
}

impl<K: Debug, V: Debug> Debug for ConcurrentMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.inner.read(|map| f.debug_map().entries(map.iter()).finish())
    }
}
