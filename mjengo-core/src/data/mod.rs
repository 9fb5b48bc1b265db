//! Record sources: the site-office REST backend and saved snapshot files.

pub mod api;
pub mod snapshot;
pub mod source;

pub use api::{ApiClient, DEFAULT_TIMEOUT_SECS};
pub use snapshot::{load_snapshot, save_snapshot};
pub use source::{ApiError, ProjectSnapshot, RecordSource};
