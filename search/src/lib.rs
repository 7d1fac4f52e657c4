//! In-memory document queries.
//!
//! Wraps a [`BackingStore`](docquery_core::BackingStore) in two adapters:
//!
//! - [`Queryable`]: filters the store by a predicate, preserving order.
//! - [`ResultEnhancer`]: turns a filtered queryable into [`SearchResults`]
//!   (one hit per match, uniform score) and an empty [`FacetResults`].
//!
//! [`InMemoryIndex`] and [`SearchContext`] mirror the index → context →
//! queryable flow of a real search client so callers can be exercised
//! without one.

mod config;
mod enhance;
mod index;
mod query;
mod queryable;
mod results;

pub use config::{CaseMatching, SearchConfig, SearchConfigError};
pub use enhance::{EnhanceResults, ResultEnhancer, build_results};
pub use index::{InMemoryIndex, SearchContext, SecurityOptions};
pub use query::{Predicate, RecordMatcher};
pub use queryable::Queryable;
pub use results::{
    FacetCategory, FacetResults, FacetValue, SearchHit, SearchResults, UNIFORM_SCORE,
};
