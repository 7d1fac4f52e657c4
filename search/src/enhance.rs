//! Result enhancement: scored hits and facets for a filtered queryable.

use crate::queryable::Queryable;
use crate::results::{FacetResults, SearchHit, SearchResults, UNIFORM_SCORE};
use docquery_core::BackingStore;
use tracing::{debug, warn};

/// Produces results and facets for a queryable.
pub trait EnhanceResults<T> {
    fn results<'a>(&self, query: &'a Queryable<T>) -> SearchResults<'a, T>;

    fn facets(&self, query: &Queryable<T>) -> FacetResults;
}

/// Emits one hit per item in `query`, in query order, each scored [`UNIFORM_SCORE`].
pub fn build_results<T>(query: &Queryable<T>) -> SearchResults<'_, T> {
    let hits = query
        .iter()
        .map(|document| SearchHit {
            score: UNIFORM_SCORE,
            document,
        })
        .collect();
    SearchResults::new(hits)
}

/// Result enhancer over a fixed backing store.
#[derive(Debug)]
pub struct ResultEnhancer<T> {
    store: BackingStore<T>,
}

impl<T> Clone for ResultEnhancer<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<T> ResultEnhancer<T> {
    pub fn new(store: BackingStore<T>) -> Self {
        Self { store }
    }

    /// Unfiltered queryable over the enhancer's store.
    pub fn queryable(&self) -> Queryable<T> {
        Queryable::new(self.store.clone())
    }

    pub fn store(&self) -> &BackingStore<T> {
        &self.store
    }
}

impl<T> EnhanceResults<T> for ResultEnhancer<T> {
    fn results<'a>(&self, query: &'a Queryable<T>) -> SearchResults<'a, T> {
        if !self.store.same_store(query.store()) {
            warn!("building results for a queryable over a different backing store");
        }
        let results = build_results(query);
        debug!(total = results.total_search_results(), "results built");
        results
    }

    fn facets(&self, _query: &Queryable<T>) -> FacetResults {
        FacetResults::default()
    }
}
