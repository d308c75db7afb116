//! FileSystem port - abstraction over file I/O operations
//!
//! The generate use case reads inputs, stages outputs and commits them through
//! this trait. Errors carry the offending path.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::error::IconResult;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name (lossily converted when not UTF-8)
    pub file_name: String,
    /// Full path of the entry
    pub path: PathBuf,
    /// Whether the entry is a regular file (symlinks are not followed)
    pub is_file: bool,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - tokio file I/O
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Read file content as string
    async fn read(&self, path: &Path) -> IconResult<String>;

    /// Write content to a file, creating parent directories
    async fn write(&self, path: &Path, content: &str) -> IconResult<()>;

    /// Create directory and parents
    async fn create_dir_all(&self, path: &Path) -> IconResult<()>;

    /// List a directory, sorted by file name
    async fn list_dir(&self, path: &Path) -> IconResult<Vec<DirEntry>>;

    /// Remove a directory tree; an absent directory is not an error
    async fn remove_dir_all(&self, path: &Path) -> IconResult<()>;

    /// Rename a file or directory
    async fn rename(&self, from: &Path, to: &Path) -> IconResult<()>;

    /// Absolute path with every symlink and `..` resolved; the path must exist
    async fn canonicalize(&self, path: &Path) -> IconResult<PathBuf>;

    /// Check whether a directory exists
    async fn is_dir(&self, path: &Path) -> bool;
}
