//! In-memory index and search context.
//!
//! Stands in for an external search client: an index hands out search
//! contexts, and a context hands out queryables over the index's records.

use crate::enhance::ResultEnhancer;
use crate::queryable::Queryable;
use docquery_core::BackingStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Security options a context is created with.
///
/// Carried and reported only; no security trimming is applied to results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityOptions {
    #[default]
    EnableSecurityCheck,
    DisableSecurityCheck,
}

impl fmt::Display for SecurityOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecurityOptions::EnableSecurityCheck => write!(f, "enable_security_check"),
            SecurityOptions::DisableSecurityCheck => write!(f, "disable_security_check"),
        }
    }
}

/// Named index over a backing store.
#[derive(Debug)]
pub struct InMemoryIndex<T> {
    name: String,
    store: BackingStore<T>,
}

impl<T> InMemoryIndex<T> {
    pub fn new(name: impl Into<String>, store: BackingStore<T>) -> Self {
        Self {
            name: name.into(),
            store,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn store(&self) -> &BackingStore<T> {
        &self.store
    }

    pub fn create_search_context(&self, security: SecurityOptions) -> SearchContext<T> {
        debug!(index = %self.name, %security, "search context created");
        SearchContext {
            index_name: self.name.clone(),
            store: self.store.clone(),
            security,
        }
    }
}

/// Query session against one index.
#[derive(Debug)]
pub struct SearchContext<T> {
    index_name: String,
    store: BackingStore<T>,
    security: SecurityOptions,
}

impl<T> SearchContext<T> {
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn security(&self) -> SecurityOptions {
        self.security
    }

    /// Fresh, unfiltered queryable over the index's records.
    pub fn queryable(&self) -> Queryable<T> {
        Queryable::new(self.store.clone())
    }

    /// Result enhancer over the same records as [`Self::queryable`].
    pub fn enhancer(&self) -> ResultEnhancer<T> {
        ResultEnhancer::new(self.store.clone())
    }
}
