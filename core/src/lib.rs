//! Record model and backing store for in-memory document queries.
//!
//! A [`BackingStore`] is an ordered, immutable sequence fixed at
//! construction. Adapters in `docquery_search` share it by cloning the
//! handle, never the records.

pub mod error;
pub mod types;

pub use error::{Error, Result, StoreError, ValidationError};
pub use types::{BackingStore, Field, Record, RecordId};
