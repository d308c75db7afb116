//! File System Implementations
//!
//! Concrete implementation of the FileSystem port and output staging.

mod local;
pub mod staging;

pub use local::LocalFs;
pub use staging::{remove_stale, resolve_path, StagingDir, STAGING_PREFIX};
