//! Construction parameters for `ChainedHashMap`

use crate::MapError;

/// Default number of buckets
pub const DEFAULT_CAPACITY: usize = 16;

/// Default load factor at which the map doubles its buckets
pub const DEFAULT_MAX_LOAD: f64 = 0.75;

/// Initial capacity and growth threshold for a `ChainedHashMap`.
///
/// ```rust
/// use chainmap::{ChainedHashMap, MapConfig};
///
/// let config = MapConfig::default().with_capacity(8).with_max_load(1.0);
/// let map: ChainedHashMap<String, u32> = ChainedHashMap::from_config(config)?;
/// assert_eq!(map.capacity(), 8);
/// # Ok::<(), chainmap::MapError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Number of buckets allocated up front
    pub capacity: usize,
    /// Load factor (`len / capacity`) that triggers growth once reached
    pub max_load: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY, max_load: DEFAULT_MAX_LOAD }
    }
}

impl MapConfig {
    /// Sets the initial number of buckets
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the growth threshold
    #[must_use]
    pub fn with_max_load(mut self, max_load: f64) -> Self {
        self.max_load = max_load;
        self
    }

    /// Checks that the capacity is non-zero and the max load is a positive finite number.
    ///
    /// # Errors
    ///
    /// Returns `MapError::InvalidCapacity` or `MapError::InvalidMaxLoad`.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.capacity == 0 {
            return Err(MapError::InvalidCapacity(self.capacity));
        }
        if !self.max_load.is_finite() || self.max_load <= 0.0 {
            return Err(MapError::InvalidMaxLoad(self.max_load));
        }
        Ok(())
    }
}
