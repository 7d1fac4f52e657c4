//! Queryable view over a backing store.

use crate::config::SearchConfig;
use crate::query::Predicate;
use docquery_core::{BackingStore, Record};
use std::sync::Arc;
use tracing::trace;

/// Filtered, ordered view over a [`BackingStore`].
///
/// Filtering never copies items: a queryable holds the store handle plus the
/// positions that survived, in store order.
#[derive(Debug)]
pub struct Queryable<T> {
    store: BackingStore<T>,
    selection: Arc<[usize]>,
}

impl<T> Clone for Queryable<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            selection: Arc::clone(&self.selection),
        }
    }
}

impl<T> Queryable<T> {
    /// Selects every item in the store.
    pub fn new(store: BackingStore<T>) -> Self {
        let selection = (0..store.len()).collect();
        Self { store, selection }
    }

    /// Keeps the items matching `predicate`, preserving relative order.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let selection: Arc<[usize]> = self
            .selection
            .iter()
            .copied()
            .filter(|&index| predicate(&self.store.as_slice()[index]))
            .collect();

        trace!(
            before = self.selection.len(),
            after = selection.len(),
            "filter applied"
        );

        Self {
            store: self.store.clone(),
            selection,
        }
    }

    /// Keeps the first `n` items.
    pub fn take(&self, n: usize) -> Self {
        let end = n.min(self.selection.len());
        Self {
            store: self.store.clone(),
            selection: self.selection[..end].into(),
        }
    }

    pub fn count(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        let items = self.store.as_slice();
        self.selection.iter().map(move |&index| &items[index])
    }

    /// The store this view was built from.
    pub fn store(&self) -> &BackingStore<T> {
        &self.store
    }
}

impl<T: Clone> Queryable<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl Queryable<Record> {
    /// Filters by a declarative [`Predicate`].
    pub fn filter_by(&self, predicate: &Predicate, config: &SearchConfig) -> Self {
        let mut matcher = predicate.matcher(config);
        self.filter(|record| matcher.matches(record))
    }
}

impl<T> From<BackingStore<T>> for Queryable<T> {
    fn from(store: BackingStore<T>) -> Self {
        Self::new(store)
    }
}
