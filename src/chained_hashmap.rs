use std::{borrow::Borrow, fmt, iter, mem, num::NonZeroUsize};

use log::{debug, error, trace};

use crate::{
    MapError,
    chain::{Chain, Pair},
    config::{DEFAULT_CAPACITY, DEFAULT_MAX_LOAD, MapConfig},
    hash::polynomial_hash,
};

/// A bucket slot: empty, or the chain of every pair that hashes to it
type Slot<K, V> = Option<Chain<K, V>>;

/// Factor applied to the bucket count on every growth step
const GROWTH_FACTOR: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(factor) => factor,
    None => NonZeroUsize::MIN,
};

/// A hash map resolving collisions by separate chaining.
///
/// Keys are string-like and placed with a polynomial rolling hash reduced modulo the
/// current capacity. Each bucket holds an insertion-ordered chain of pairs. When a new
/// key brings `len / capacity` up to `max_load`, the bucket array doubles and every
/// pair is rehashed against the new capacity.
///
/// Buckets are never shrunk on removal.
///
/// Note: This implementation is not thread-safe.
///
/// # Panics
///
/// Operations panic if a computed bucket index falls outside the bucket array. The
/// hash function always reduces modulo the capacity, so this only happens if the map's
/// internal invariants are broken.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<K, V> {
    /// One slot per bucket; its length always equals `capacity`
    buckets: Vec<Slot<K, V>>,
    /// Current number of pairs across all chains
    len: usize,
    /// Number of buckets, used as the hash modulus
    capacity: NonZeroUsize,
    /// Load factor that triggers growth once reached
    max_load: f64,
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: AsRef<str> + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ChainedHashMap<K, V>
where
    K: AsRef<str> + Eq,
{
    /// Creates an empty map with the default capacity and max load
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty map with `capacity` buckets (at least one) and the default max load
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self::from_parts(capacity, DEFAULT_MAX_LOAD)
    }

    /// Creates an empty map with `capacity` buckets that grows once `len / capacity`
    /// reaches `max_load`.
    ///
    /// # Errors
    ///
    /// Returns `MapError::InvalidCapacity` for a zero capacity and
    /// `MapError::InvalidMaxLoad` for a max load that is not a positive finite number.
    pub fn create(capacity: usize, max_load: f64) -> Result<Self, MapError> {
        Self::from_config(MapConfig { capacity, max_load })
    }

    /// Creates an empty map from a validated `MapConfig`.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `MapConfig::validate`.
    pub fn from_config(config: MapConfig) -> Result<Self, MapError> {
        config.validate()?;
        let capacity =
            NonZeroUsize::new(config.capacity).ok_or(MapError::InvalidCapacity(config.capacity))?;
        Ok(Self::from_parts(capacity, config.max_load))
    }

    /// Builds the map around a fresh bucket array
    fn from_parts(capacity: NonZeroUsize, max_load: f64) -> Self {
        Self { buckets: empty_buckets(capacity), len: 0, capacity, max_load }
    }

    /// Gets the bucket index for a key under the current capacity
    fn bucket_index(&self, key: &str) -> usize {
        polynomial_hash(key, self.capacity)
    }

    /// Bounds-checked slot access
    fn slot(&self, index: usize) -> Result<&Slot<K, V>, MapError> {
        self.buckets
            .get(index)
            .ok_or(MapError::IndexOutOfBounds { index, capacity: self.buckets.len() })
    }

    /// Bounds-checked mutable slot access
    fn slot_mut(&mut self, index: usize) -> Result<&mut Slot<K, V>, MapError> {
        let capacity = self.buckets.len();
        self.buckets.get_mut(index).ok_or(MapError::IndexOutOfBounds { index, capacity })
    }

    /// The slot a key hashes to
    fn slot_for(&self, key: &str) -> &Slot<K, V> {
        let index = self.bucket_index(key);
        self.slot(index).unwrap_or_else(|err| invariant_violated(&err))
    }

    /// The slot a key hashes to, mutably
    fn slot_for_mut(&mut self, key: &str) -> &mut Slot<K, V> {
        let index = self.bucket_index(key);
        self.slot_mut(index).unwrap_or_else(|err| invariant_violated(&err))
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// Overwriting an existing key keeps its position in the chain and never triggers
    /// growth. Adding a new key may double the capacity.
    ///
    /// # Panics
    ///
    /// Panics if the bucket index computed for `key` is out of bounds, which indicates
    /// a broken internal invariant.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.place(key, value).unwrap_or_else(|err| invariant_violated(&err));
        if previous.is_none() && self.reaches_max_load(self.capacity) {
            self.grow();
        }
        previous
    }

    /// Puts a pair into its bucket without checking the load factor.
    ///
    /// Shared by `set` and the rehash pass of `grow`.
    fn place(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        let index = self.bucket_index(key.as_ref());
        let slot = self.slot_mut(index)?;
        match slot {
            None => {
                trace!("allocating chain for bucket {index}");
                *slot = Some(Chain::with_pair(key, value));
            }
            Some(chain) => {
                if let Some(pair) = chain.find_mut(|pair| pair.key == key) {
                    return Ok(Some(mem::replace(&mut pair.value, value)));
                }
                chain.push(key, value);
            }
        }
        self.len = self.len.saturating_add(1);
        Ok(None)
    }

    /// Whether `len / capacity` has reached the max load
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    fn reaches_max_load(&self, capacity: NonZeroUsize) -> bool {
        self.len as f64 / capacity.get() as f64 >= self.max_load
    }

    /// Doubles the bucket array and rehashes every pair into it.
    ///
    /// Doubling repeats until the load factor drops below the max load, so a single
    /// rehash pass always runs against the final capacity.
    fn grow(&mut self) {
        let old_capacity = self.capacity;
        let mut capacity = old_capacity;
        while let Some(doubled) = capacity.checked_mul(GROWTH_FACTOR) {
            capacity = doubled;
            if !self.reaches_max_load(capacity) {
                break;
            }
        }
        if capacity == old_capacity {
            return;
        }

        debug!(
            "growing chained map from {old_capacity} to {capacity} buckets at {} entries",
            self.len
        );

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(capacity));
        self.capacity = capacity;
        self.len = 0;

        for Pair { key, value } in old_buckets.into_iter().flatten().flatten() {
            if let Err(err) = self.place(key, value) {
                invariant_violated(&err);
            }
        }
    }

    /// Retrieve a value for a given key
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.slot_for(key.as_ref())
            .as_ref()?
            .find(|pair| pair.key.borrow() == key)
            .map(|pair| &pair.value)
    }

    /// Get a mutable reference to a value for a given key
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.slot_for_mut(key.as_ref())
            .as_mut()?
            .find_mut(|pair| pair.key.borrow() == key)
            .map(|pair| &mut pair.value)
    }

    /// Returns true if a value is stored for `key`
    #[must_use]
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Same as [`has`](Self::has)
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.has(key)
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// The remaining pairs of the chain keep their order. A chain left empty is dropped
    /// so its slot reads as empty again. The capacity is left unchanged.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        let slot = self.slot_for_mut(key.as_ref());
        let chain = slot.as_mut()?;
        let position = chain.position(|pair| pair.key.borrow() == key)?;
        let pair = chain.remove_at(position)?;
        if chain.is_empty() {
            *slot = None;
        }
        self.len = self.len.saturating_sub(1);
        trace!("removed {:?}, {} entries left", key.as_ref(), self.len);
        Some(pair.value)
    }

    /// Removes `key` from the map. Returns true if a pair was removed.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: AsRef<str> + Eq + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes every pair. Capacity and max load are kept.
    pub fn clear(&mut self) {
        for slot in &mut self.buckets {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns the number of elements in the hash table
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the hash table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets in the hash map
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns the load factor that triggers growth
    #[must_use]
    pub fn max_load(&self) -> f64 {
        self.max_load
    }

    /// Returns the current load factor of the hash map
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity.get() as f64
    }

    /// Returns an iterator over the key-value pairs, bucket by bucket and in chain
    /// order within a bucket
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: self.buckets.iter(), pairs: Default::default() }
    }

    /// Snapshot of every key in iteration order
    #[must_use]
    pub fn keys(&self) -> Vec<&K> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Snapshot of every value in iteration order
    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Snapshot of every key-value pair in iteration order
    #[must_use]
    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Length of the chain in every bucket, 0 for empty buckets
    #[must_use]
    pub fn chain_lengths(&self) -> Vec<usize> {
        self.buckets.iter().map(|slot| slot.as_ref().map_or(0, Chain::len)).collect()
    }
}

/// Allocates `capacity` empty slots
fn empty_buckets<K, V>(capacity: NonZeroUsize) -> Vec<Slot<K, V>> {
    iter::repeat_with(|| None).take(capacity.get()).collect()
}

/// Reports a bucket index that escaped the bucket array and aborts the operation
#[cold]
#[allow(clippy::panic)]
fn invariant_violated(err: &MapError) -> ! {
    error!("chained map invariant violated: {err}");
    panic!("chained map invariant violated: {err}");
}

/// One line per bucket: `-` for an empty bucket, the chain otherwise
impl<K, V> fmt::Display for ChainedHashMap<K, V>
where
    K: AsRef<str>,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.buckets.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            match slot {
                Some(chain) => write!(f, "{chain}")?,
                None => f.write_str("-")?,
            }
        }
        Ok(())
    }
}

/// Iterator over the key-value pairs of the hash table
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Buckets not yet visited
    slots: std::slice::Iter<'a, Slot<K, V>>,
    /// Remaining pairs of the current bucket's chain
    pairs: std::slice::Iter<'a, Pair<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.pairs.next() {
                return Some((&pair.key, &pair.value));
            }
            if let Some(chain) = self.slots.next()? {
                self.pairs = chain.iter();
            }
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedHashMap<K, V>
where
    K: AsRef<str> + Eq,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
