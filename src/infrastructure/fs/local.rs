//! Local File System Implementation
//!
//! Implements the FileSystem port on top of `tokio::fs`.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::ports::{DirEntry, FileSystem};
use crate::error::{IconError, IconResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for LocalFs {
    async fn read(&self, path: &Path) -> IconResult<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| IconError::io(path, e))
    }

    async fn write(&self, path: &Path, content: &str) -> IconResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content)
            .await
            .map_err(|e| IconError::io(path, e))
    }

    async fn create_dir_all(&self, path: &Path) -> IconResult<()> {
        tokio::fs::create_dir_all(path)
            .await
            .map_err(|e| IconError::io(path, e))
    }

    async fn list_dir(&self, path: &Path) -> IconResult<Vec<DirEntry>> {
        let mut reader = tokio::fs::read_dir(path)
            .await
            .map_err(|e| IconError::io(path, e))?;

        let mut entries = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| IconError::io(path, e))?
        {
            let entry_path = entry.path();
            // a symlink is never a regular file, whatever it points at
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);

            entries.push(DirEntry {
                file_name: entry.file_name().to_string_lossy().into_owned(),
                path: entry_path,
                is_file,
            });
        }

        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }

    async fn remove_dir_all(&self, path: &Path) -> IconResult<()> {
        match tokio::fs::remove_dir_all(path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(IconError::io(path, e)),
        }
    }

    async fn rename(&self, from: &Path, to: &Path) -> IconResult<()> {
        tokio::fs::rename(from, to)
            .await
            .map_err(|e| IconError::io(from, e))
    }

    async fn canonicalize(&self, path: &Path) -> IconResult<PathBuf> {
        tokio::fs::canonicalize(path)
            .await
            .map_err(|e| IconError::io(path, e))
    }

    async fn is_dir(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}
