pub(crate) mod record;
pub use record::{Field, Record, RecordId};

pub(crate) mod store;
pub use store::BackingStore;
