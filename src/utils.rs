//! Utility functions and traits for `ChainedHashMap`

use std::borrow::Borrow;

use crate::ChainedHashMap;

/// Extension trait providing owned snapshots of a map's contents
pub trait HashMapExtensions<K, V> {
    /// Returns the keys of the hash map as a Vec
    fn cloned_keys(&self) -> Vec<K>;

    /// Returns the values of the hash map as a Vec
    fn cloned_values(&self) -> Vec<V>;

    /// Returns the key-value pairs of the hash map as a Vec
    fn cloned_entries(&self) -> Vec<(K, V)>;

    /// Returns true if every key in `keys` is present
    fn contains_all<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>;
}

impl<K, V> HashMapExtensions<K, V> for ChainedHashMap<K, V>
where
    K: AsRef<str> + Borrow<str> + Eq + Clone,
    V: Clone,
{
    fn cloned_keys(&self) -> Vec<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    fn cloned_values(&self) -> Vec<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }

    fn cloned_entries(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    fn contains_all<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keys.into_iter().all(|key| self.has(key.as_ref()))
    }
}

impl<K, V> Extend<(K, V)> for ChainedHashMap<K, V>
where
    K: AsRef<str> + Eq,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ChainedHashMap<K, V>
where
    K: AsRef<str> + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter() {
        let data = vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 3)];

        let map: ChainedHashMap<_, _> = data.into_iter().collect();

        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), Some(&2));
        assert_eq!(map.get("c"), Some(&3));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_extend_overwrites() {
        let mut map: ChainedHashMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
        map.extend([("a", 10), ("c", 3)]);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get("a"), Some(&10));
    }

    #[test]
    fn test_keys_and_values() {
        let mut map = ChainedHashMap::new();
        map.set("a".to_string(), 1);
        map.set("b".to_string(), 2);
        map.set("c".to_string(), 3);

        let mut keys = map.cloned_keys();
        keys.sort(); // Sort for predictable comparison

        let mut values = map.cloned_values();
        values.sort_unstable();

        assert_eq!(keys, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_cloned_entries_follow_iteration_order() {
        let map: ChainedHashMap<_, _> = [("x", 'x'), ("y", 'y')].into_iter().collect();
        let borrowed: Vec<_> = map.entries().into_iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(map.cloned_entries(), borrowed);
    }

    #[test]
    fn test_contains_all() {
        let map: ChainedHashMap<_, _> =
            [("a".to_string(), 1), ("b".to_string(), 2)].into_iter().collect();

        assert!(map.contains_all(["a", "b"]));
        assert!(map.contains_all(Vec::<String>::new()));
        assert!(!map.contains_all(["a", "z"]));
    }
}
