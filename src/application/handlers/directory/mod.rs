//! Directory query handlers.

mod sync_directory;

pub use sync_directory::{DirectorySync, FetchOutcome};
