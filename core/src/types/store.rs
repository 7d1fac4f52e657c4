use crate::error::{Result, StoreError, ValidationError};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Ordered, immutable sequence of items shared by query adapters.
///
/// Cloning the store clones the handle; every clone observes the same
/// sequence in the same order.
#[derive(Debug)]
pub struct BackingStore<T> {
    items: Arc<[T]>,
}

impl<T> Clone for BackingStore<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for BackingStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for BackingStore<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> BackingStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        debug!(len = items.len(), "backing store created");
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns true if both handles point at the same sequence.
    pub fn same_store(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl<T: DeserializeOwned> BackingStore<T> {
    /// Parses a JSON array of items.
    ///
    /// A `null` document is rejected with [`ValidationError::MissingBackingStore`].
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Option<Vec<T>> = serde_json::from_str(json).map_err(StoreError::from)?;
        let items = items.ok_or(ValidationError::MissingBackingStore)?;
        Ok(Self::new(items))
    }

    /// Reads and parses a JSON array of items from disk.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading backing store");
        let content = std::fs::read_to_string(path).map_err(StoreError::from)?;
        Self::from_json(&content)
    }
}

impl<'a, T> IntoIterator for &'a BackingStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
