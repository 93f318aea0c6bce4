//! Generic id-keyed collection shared by projects and their tasks.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// An entity that exposes a stable, ordered key.
pub trait Keyed {
    /// Key type; iteration follows its ordering.
    type Key: Ord + Copy;

    /// Returns the entity's key.
    fn key(&self) -> Self::Key;
}

/// Ordered collection of entities keyed by their identifier.
///
/// Iteration always yields entities in ascending key order, independent of
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedCollection<T: Keyed> {
    entries: BTreeMap<T::Key, T>,
}

impl<T: Keyed> KeyedCollection<T> {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the number of stored entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether an entity with `key` is stored.
    #[must_use]
    pub fn contains(&self, key: T::Key) -> bool {
        self.entries.contains_key(&key)
    }

    /// Returns the entity stored under `key`.
    #[must_use]
    pub fn get(&self, key: T::Key) -> Option<&T> {
        self.entries.get(&key)
    }

    /// Inserts a new entity.
    ///
    /// Returns the entity back unchanged when its key is already taken; the
    /// stored entity is left untouched in that case.
    pub fn insert(&mut self, item: T) -> Option<T> {
        let key = item.key();
        if self.entries.contains_key(&key) {
            return Some(item);
        }
        self.entries.insert(key, item);
        None
    }

    /// Swaps in `item` for the entity with the same key and returns the
    /// previous value.
    ///
    /// Returns `None` and stores nothing when no entity has that key.
    pub fn replace(&mut self, item: T) -> Option<T> {
        self.entries
            .get_mut(&item.key())
            .map(|slot| std::mem::replace(slot, item))
    }

    /// Removes and returns the entity stored under `key`.
    pub fn remove(&mut self, key: T::Key) -> Option<T> {
        self.entries.remove(&key)
    }

    /// Iterates entities in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T: Keyed + Clone> KeyedCollection<T> {
    /// Returns a snapshot of all entities in ascending key order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.values().cloned().collect()
    }
}

impl<T: Keyed> Default for KeyedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed + Serialize> Serialize for KeyedCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

impl<'de, T: Keyed + Deserialize<'de>> Deserialize<'de> for KeyedCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        let mut collection = Self::new();
        for item in items {
            if collection.insert(item).is_some() {
                return Err(D::Error::custom("duplicate key in keyed collection"));
            }
        }
        Ok(collection)
    }
}
