//! # Chained Hash Map
//!
//! A Rust implementation of a hash table resolving collisions by separate chaining.
//!
//! `ChainedHashMap` places string-like keys with a polynomial rolling hash reduced modulo
//! the bucket count. Every bucket holds an insertion-ordered chain of key-value pairs. When
//! inserting a new key brings the load factor up to the configured maximum, the bucket
//! array doubles and every pair is rehashed. Buckets never shrink.
//!
//! ## Basic Usage
//!
//! ```rust
//! use chainmap::ChainedHashMap;
//!
//! // Three buckets, grow once there are as many pairs as buckets
//! let mut map = ChainedHashMap::create(3, 1.0)?;
//!
//! // Insert values
//! map.set("first".to_string(), 9);
//! map.set("second".to_string(), 10);
//! map.set("Sita".to_string(), 1);
//! assert_eq!(map.capacity(), 6);
//!
//! // Retrieve values
//! assert_eq!(map.get("first"), Some(&9));
//! assert!(!map.has("Rama"));
//!
//! // Update values
//! map.set("second".to_string(), 11);
//! assert_eq!(map.len(), 3);
//!
//! // Remove values
//! assert!(map.remove("first"));
//! assert!(!map.remove("first"));
//! # Ok::<(), chainmap::MapError>(())
//! ```
//!
//! ## Snapshots
//!
//! ```rust
//! use chainmap::{ChainedHashMap, HashMapExtensions};
//!
//! let map: ChainedHashMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
//!
//! // Borrowed snapshots in bucket order
//! assert_eq!(map.values().len(), 2);
//!
//! // Owned snapshots
//! let mut keys = map.cloned_keys();
//! keys.sort_unstable();
//! assert_eq!(keys, vec!["a", "b"]);
//! ```

/// Module implementing the bucket chains
mod chain;
/// Module implementing the separate-chaining hash map
mod chained_hashmap;
/// Construction parameters
mod config;
/// Error type
mod error;
/// Polynomial string hash
pub mod hash;
/// Utility functions and traits for the hash map
mod utils;

pub use chained_hashmap::{ChainedHashMap, Iter};
pub use config::{DEFAULT_CAPACITY, DEFAULT_MAX_LOAD, MapConfig};
pub use error::MapError;
pub use utils::HashMapExtensions;
