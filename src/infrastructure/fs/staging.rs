//! Staging directory for transactional output
//!
//! A run writes every artifact into a hidden directory next to the output
//! root. Only a fully successful run renames it into place; dropping a
//! [`StagingDir`] deletes it, leaving the previous output untouched.
//!
//! All I/O apart from creating the uniquely named directory goes through the
//! [`FileSystem`] port.

use std::path::{Component, Path, PathBuf};

use tempfile::TempDir;

use crate::domain::ports::FileSystem;
use crate::error::{IconError, IconResult};

/// File name prefix shared by every staging directory
pub const STAGING_PREFIX: &str = ".icon-elements-staging-";

/// Directory that stages the output of one run
#[derive(Debug)]
pub struct StagingDir {
    dir: TempDir,
    target: PathBuf,
}

impl StagingDir {
    /// Create a staging directory as a sibling of `target`
    pub async fn create<FS>(file_system: &FS, target: &Path) -> IconResult<Self>
    where
        FS: FileSystem + ?Sized,
    {
        let parent = parent_of(target);
        file_system.create_dir_all(&parent).await?;

        let prefix = staging_prefix(target);
        let dir = {
            let parent = parent.clone();
            tokio::task::spawn_blocking(move || {
                tempfile::Builder::new().prefix(&prefix).tempdir_in(&parent)
            })
            .await
            .map_err(std::io::Error::other)
            .and_then(|created| created)
        }
        .map_err(|e| IconError::io(&parent, e))?;

        Ok(Self {
            dir,
            target: target.to_path_buf(),
        })
    }

    /// Where files are staged
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The output root this staging directory will replace
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Replace the target with the staged tree
    ///
    /// The previous output is moved aside, the staged tree is renamed into
    /// place, and only then is the previous output deleted. When the second
    /// rename fails the previous output is moved back.
    pub async fn commit<FS>(self, file_system: &FS) -> IconResult<PathBuf>
    where
        FS: FileSystem + ?Sized,
    {
        let previous = if file_system.is_dir(&self.target).await {
            let aside = self.previous_path();
            file_system.rename(&self.target, &aside).await?;
            Some(aside)
        } else {
            None
        };

        let staged = self.dir.keep();
        if let Err(error) = file_system.rename(&staged, &self.target).await {
            if let Some(previous) = &previous {
                if let Err(restore) = file_system.rename(previous, &self.target).await {
                    tracing::error!(
                        previous = %previous.display(),
                        error = %restore,
                        "cannot restore previous output"
                    );
                }
            }
            if let Err(cleanup) = file_system.remove_dir_all(&staged).await {
                tracing::warn!(staging = %staged.display(), error = %cleanup, "cannot remove staging directory");
            }
            return Err(error);
        }

        if let Some(previous) = previous {
            // the name carries the staging prefix, so the next cleanup retries
            if let Err(error) = file_system.remove_dir_all(&previous).await {
                tracing::warn!(path = %previous.display(), %error, "cannot remove previous output");
            }
        }

        tracing::debug!(output = %self.target.display(), "committed staged output");
        Ok(self.target)
    }

    fn previous_path(&self) -> PathBuf {
        let mut name = self
            .dir
            .path()
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push("-previous");
        self.dir.path().with_file_name(name)
    }
}

/// Remove staging directories that interrupted runs left next to `target`
///
/// Returns how many were removed. A missing parent directory means there is
/// nothing to clean.
pub async fn remove_stale<FS>(file_system: &FS, target: &Path) -> IconResult<usize>
where
    FS: FileSystem + ?Sized,
{
    let parent = parent_of(target);
    if !file_system.is_dir(&parent).await {
        return Ok(0);
    }

    let prefix = staging_prefix(target);
    let mut removed = 0;
    for entry in file_system.list_dir(&parent).await? {
        if !entry.file_name.starts_with(&prefix) {
            continue;
        }

        file_system.remove_dir_all(&entry.path).await?;
        tracing::info!(path = %entry.path.display(), "removed stale staging directory");
        removed += 1;
    }

    Ok(removed)
}

/// Resolve `path` against the file system
///
/// The longest existing prefix is canonicalized, following symlinks; the
/// components after it do not exist yet and are normalized lexically.
pub async fn resolve_path<FS>(file_system: &FS, path: &Path) -> PathBuf
where
    FS: FileSystem + ?Sized,
{
    let components: Vec<Component<'_>> = path.components().collect();

    for split in (0..=components.len()).rev() {
        let prefix: PathBuf = components[..split].iter().collect();
        let prefix = if prefix.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            prefix
        };

        let Ok(mut resolved) = file_system.canonicalize(&prefix).await else {
            continue;
        };
        for component in &components[split..] {
            match component {
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::CurDir => {}
                other => resolved.push(other.as_os_str()),
            }
        }
        return resolved;
    }

    path.to_path_buf()
}

fn parent_of(target: &Path) -> PathBuf {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn staging_prefix(target: &Path) -> String {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    format!("{}{}-", STAGING_PREFIX, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::DirEntry;
    use crate::infrastructure::fs::LocalFs;
    use async_trait::async_trait;
    use tempfile::tempdir;

    fn staging_entries(parent: &Path) -> Vec<String> {
        std::fs::read_dir(parent)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.starts_with(STAGING_PREFIX))
            .collect()
    }

    /// Local file system whose renames out of a staging directory fail
    struct StuckStagingFs(LocalFs);

    #[async_trait]
    impl FileSystem for StuckStagingFs {
        async fn read(&self, path: &Path) -> IconResult<String> {
            self.0.read(path).await
        }

        async fn write(&self, path: &Path, content: &str) -> IconResult<()> {
            self.0.write(path, content).await
        }

        async fn create_dir_all(&self, path: &Path) -> IconResult<()> {
            self.0.create_dir_all(path).await
        }

        async fn list_dir(&self, path: &Path) -> IconResult<Vec<DirEntry>> {
            self.0.list_dir(path).await
        }

        async fn remove_dir_all(&self, path: &Path) -> IconResult<()> {
            self.0.remove_dir_all(path).await
        }

        async fn rename(&self, from: &Path, to: &Path) -> IconResult<()> {
            let from_staging = from
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with(STAGING_PREFIX));
            if from_staging && !from.to_string_lossy().ends_with("-previous") {
                return Err(IconError::io(
                    from,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "rename refused"),
                ));
            }
            self.0.rename(from, to).await
        }

        async fn canonicalize(&self, path: &Path) -> IconResult<PathBuf> {
            self.0.canonicalize(path).await
        }

        async fn is_dir(&self, path: &Path) -> bool {
            self.0.is_dir(path).await
        }
    }

    #[tokio::test]
    async fn staging_dir_is_sibling_of_target() {
        let root = tempdir().unwrap();
        let target = root.path().join("dist");

        let staging = StagingDir::create(&LocalFs::new(), &target).await.unwrap();

        assert_eq!(staging.path().parent(), Some(root.path()));
        assert!(staging
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(".icon-elements-staging-dist-"));
        assert_eq!(staging.target(), target);
    }

    #[tokio::test]
    async fn dropping_staging_dir_removes_it() {
        let root = tempdir().unwrap();
        let staging = StagingDir::create(&LocalFs::new(), &root.path().join("dist"))
            .await
            .unwrap();
        let path = staging.path().to_path_buf();

        drop(staging);

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn commit_replaces_previous_output() {
        let root = tempdir().unwrap();
        let target = root.path().join("dist");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("stale.js"), "old").unwrap();

        let fs = LocalFs::new();
        let staging = StagingDir::create(&fs, &target).await.unwrap();
        std::fs::write(staging.path().join("hi-solid-home.js"), "new").unwrap();
        staging.commit(&fs).await.unwrap();

        assert!(!target.join("stale.js").exists());
        assert_eq!(
            std::fs::read_to_string(target.join("hi-solid-home.js")).unwrap(),
            "new"
        );
        assert!(staging_entries(root.path()).is_empty());
    }

    #[tokio::test]
    async fn commit_without_previous_output() {
        let root = tempdir().unwrap();
        let target = root.path().join("out").join("dist");

        let fs = LocalFs::new();
        let staging = StagingDir::create(&fs, &target).await.unwrap();
        std::fs::write(staging.path().join("a.js"), "a").unwrap();
        staging.commit(&fs).await.unwrap();

        assert!(target.join("a.js").exists());
    }

    #[tokio::test]
    async fn failed_commit_restores_previous_output() {
        let root = tempdir().unwrap();
        let target = root.path().join("dist");
        std::fs::create_dir_all(&target).unwrap();
        std::fs::write(target.join("previous.js"), "previous").unwrap();

        let fs = StuckStagingFs(LocalFs::new());
        let staging = StagingDir::create(&fs, &target).await.unwrap();
        std::fs::write(staging.path().join("a.js"), "a").unwrap();
        let err = staging.commit(&fs).await.unwrap_err();

        assert!(err.to_string().contains("rename refused"));
        assert_eq!(
            std::fs::read_to_string(target.join("previous.js")).unwrap(),
            "previous"
        );
        assert!(!target.join("a.js").exists());
        assert!(staging_entries(root.path()).is_empty());
    }

    #[tokio::test]
    async fn remove_stale_only_touches_matching_directories() {
        let root = tempdir().unwrap();
        let target = root.path().join("dist");
        std::fs::create_dir(root.path().join(".icon-elements-staging-dist-abc")).unwrap();
        std::fs::create_dir(root.path().join(".icon-elements-staging-dist-abc-previous")).unwrap();
        std::fs::create_dir(root.path().join(".icon-elements-staging-other-abc")).unwrap();
        std::fs::create_dir(root.path().join("keep")).unwrap();

        let removed = remove_stale(&LocalFs::new(), &target).await.unwrap();

        assert_eq!(removed, 2);
        assert!(root.path().join(".icon-elements-staging-other-abc").exists());
        assert!(root.path().join("keep").exists());
    }

    #[tokio::test]
    async fn remove_stale_with_missing_parent_is_noop() {
        let root = tempdir().unwrap();
        let target = root.path().join("missing").join("dist");

        assert_eq!(remove_stale(&LocalFs::new(), &target).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn resolve_path_sees_through_parent_components() {
        let root = tempdir().unwrap();
        let fs = LocalFs::new();
        let canonical_root = fs.canonicalize(root.path()).await.unwrap();

        let resolved = resolve_path(&fs, &root.path().join("x/..")).await;

        assert_eq!(resolved, canonical_root);
    }

    #[tokio::test]
    async fn resolve_path_keeps_missing_components() {
        let root = tempdir().unwrap();
        let fs = LocalFs::new();
        let canonical_root = fs.canonicalize(root.path()).await.unwrap();

        let resolved = resolve_path(&fs, &root.path().join("out/./dist")).await;

        assert_eq!(resolved, canonical_root.join("out").join("dist"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn resolve_path_follows_symlinks() {
        let root = tempdir().unwrap();
        let fs = LocalFs::new();
        std::fs::create_dir(root.path().join("real")).unwrap();
        std::os::unix::fs::symlink(root.path().join("real"), root.path().join("link")).unwrap();

        let resolved = resolve_path(&fs, &root.path().join("link/dist")).await;

        assert_eq!(
            resolved,
            fs.canonicalize(&root.path().join("real")).await.unwrap().join("dist")
        );
    }
}
