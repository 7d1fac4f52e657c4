//! Search results and facet types.

use serde::{Deserialize, Serialize};

/// Score given to every hit. No relevance ranking is computed.
pub const UNIFORM_SCORE: f32 = 1.0;

/// A scored reference to a matching document.
#[derive(Debug, PartialEq)]
pub struct SearchHit<'a, T> {
    pub score: f32,
    pub document: &'a T,
}

impl<T> Clone for SearchHit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SearchHit<'_, T> {}

/// Ordered hits plus a total count.
///
/// Borrows from the backing store. The total always equals the number of hits.
#[derive(Debug, PartialEq)]
pub struct SearchResults<'a, T> {
    hits: Vec<SearchHit<'a, T>>,
    total_search_results: usize,
}

impl<'a, T> SearchResults<'a, T> {
    pub(crate) fn new(hits: Vec<SearchHit<'a, T>>) -> Self {
        let total_search_results = hits.len();
        Self {
            hits,
            total_search_results,
        }
    }

    pub fn hits(&self) -> &[SearchHit<'a, T>] {
        &self.hits
    }

    pub fn total_search_results(&self) -> usize {
        self.total_search_results
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn documents(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.hits.iter().map(|hit| hit.document)
    }
}

impl<'a, T> IntoIterator for SearchResults<'a, T> {
    type Item = SearchHit<'a, T>;
    type IntoIter = std::vec::IntoIter<SearchHit<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

/// Aggregated facet output. Currently always empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetResults {
    pub categories: Vec<FacetCategory>,
}

impl FacetResults {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetCategory {
    pub name: String,
    pub values: Vec<FacetValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetValue {
    pub name: String,
    pub aggregate: usize,
}
