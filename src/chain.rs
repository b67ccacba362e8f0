//! Bucket chains for separate chaining

use std::fmt;

/// A key-value pair stored in a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pair<K, V> {
    /// The key in the key-value pair
    pub(crate) key: K,
    /// The value associated with the key
    pub(crate) value: V,
}

/// An insertion-ordered sequence of pairs that share a bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Chain<K, V> {
    /// Pairs in the order they were appended
    pairs: Vec<Pair<K, V>>,
}

impl<K, V> Chain<K, V> {
    /// Creates a chain holding a single pair
    pub(crate) fn with_pair(key: K, value: V) -> Self {
        Self { pairs: vec![Pair { key, value }] }
    }

    /// Appends a pair at the tail
    pub(crate) fn push(&mut self, key: K, value: V) {
        self.pairs.push(Pair { key, value });
    }

    /// Index of the first pair matching `predicate`
    pub(crate) fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&Pair<K, V>) -> bool,
    {
        self.pairs.iter().position(predicate)
    }

    /// First pair matching `predicate`
    pub(crate) fn find<P>(&self, mut predicate: P) -> Option<&Pair<K, V>>
    where
        P: FnMut(&Pair<K, V>) -> bool,
    {
        self.pairs.iter().find(|pair| predicate(pair))
    }

    /// First pair matching `predicate`, mutably
    pub(crate) fn find_mut<P>(&mut self, mut predicate: P) -> Option<&mut Pair<K, V>>
    where
        P: FnMut(&Pair<K, V>) -> bool,
    {
        self.pairs.iter_mut().find(|pair| predicate(pair))
    }

    /// Removes the pair at `index`, keeping the order of the rest
    pub(crate) fn remove_at(&mut self, index: usize) -> Option<Pair<K, V>> {
        (index < self.pairs.len()).then(|| self.pairs.remove(index))
    }

    /// Pairs in chain order
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Pair<K, V>> {
        self.pairs.iter()
    }

    /// Number of pairs in the chain
    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the last pair has been removed
    pub(crate) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K, V> IntoIterator for Chain<K, V> {
    type Item = Pair<K, V>;
    type IntoIter = std::vec::IntoIter<Pair<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

/// Renders `("a", 1) -> ("b", 2)`
impl<K, V> fmt::Display for Chain<K, V>
where
    K: AsRef<str>,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "({:?}, {:?})", pair.key.as_ref(), pair.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Chain<&'static str, i32> {
        let mut chain = Chain::with_pair("a", 1);
        chain.push("b", 2);
        chain.push("c", 3);
        chain
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let chain = sample();
        let keys: Vec<_> = chain.iter().map(|pair| pair.key).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_find_and_position() {
        let chain = sample();
        assert_eq!(chain.position(|pair| pair.key == "b"), Some(1));
        assert_eq!(chain.position(|pair| pair.key == "z"), None);
        assert_eq!(chain.find(|pair| pair.value > 1).map(|pair| pair.key), Some("b"));
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut chain = sample();
        if let Some(pair) = chain.find_mut(|pair| pair.key == "c") {
            pair.value = 30;
        }
        assert_eq!(chain.find(|pair| pair.key == "c").map(|pair| pair.value), Some(30));
    }

    #[test]
    fn test_remove_at() {
        let mut chain = sample();
        assert_eq!(chain.remove_at(1), Some(Pair { key: "b", value: 2 }));
        assert_eq!(chain.remove_at(5), None);
        let keys: Vec<_> = chain.iter().map(|pair| pair.key).collect();
        assert_eq!(keys, vec!["a", "c"]);

        chain.remove_at(0);
        chain.remove_at(0);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), r#"("a", 1) -> ("b", 2) -> ("c", 3)"#);
        assert_eq!(Chain::with_pair("k", "v").to_string(), r#"("k", "v")"#);
    }

    #[test]
    fn test_into_iter() {
        let values: Vec<_> = sample().into_iter().map(|pair| pair.value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
