//! Generate Use Case
//!
//! Orchestrates one generate run:
//! 1. Cleanup - remove staging directories left by interrupted runs
//! 2. Prepare - create a fresh staging directory next to the output root
//! 3. Generate - discover assets, check names, render every asset into
//!    staging concurrently, then commit staging over the output root
//!
//! The previous output is only replaced once every asset succeeded. Any
//! failure drops the staging directory and leaves the output root as it was.
//!
//! The markup optimizer and style minifier are synchronous; they run on the
//! blocking pool so that a collaborator waiting on a child process does not
//! hold up the other assets.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::entities::{AssetGroup, SourceAsset};
use crate::domain::ports::{
    FileSystem, GenerateEvent, GenerateEventSink, MinifyOptions, NoopEventSink, Phase,
    TransformError,
};
use crate::domain::services::{
    escape_single_quotes, host_style, inline_content, render_artifact, CollisionDetector,
};
use crate::domain::value_objects::{derive_names, DerivedNames, GroupKind};
use crate::error::{IconError, IconResult, TransformStage};
use crate::infrastructure::fs::{remove_stale, resolve_path, StagingDir};
use crate::infrastructure::transforms::Transforms;

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// An asset whose names are known but whose file has not been read yet
#[derive(Debug)]
struct PlannedAsset {
    group: AssetGroup,
    file_name: String,
    source: PathBuf,
    names: DerivedNames,
}

/// Everything discovered across all groups
#[derive(Debug, Default)]
struct Discovery {
    assets: Vec<PlannedAsset>,
    skipped: Vec<PathBuf>,
}

/// Generate use case - turns an icon set into custom element modules
///
/// Parameterized by its file system port so tests can observe I/O.
pub struct GenerateUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    transforms: Transforms,
}

impl<FS> GenerateUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, transforms: Transforms) -> Self {
        Self {
            file_system,
            transforms,
        }
    }

    /// Execute a run without reporting
    pub async fn execute(&self, options: &GenerateOptions) -> IconResult<GenerateResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
            .await
    }

    /// Execute a run, reporting phases and artifacts to `event_sink`
    pub async fn execute_with_events(
        &self,
        options: &GenerateOptions,
        event_sink: Arc<dyn GenerateEventSink>,
    ) -> IconResult<GenerateResult> {
        let sink = event_sink.as_ref();

        sink.on_event(GenerateEvent::Started {
            source: options.source.clone(),
            output: options.output.clone(),
            group_count: options.groups.len(),
        });

        run_phase(
            sink,
            Phase::Cleanup,
            remove_stale(&self.file_system, &options.output),
        )
        .await?;

        let (staging, groups) =
            run_phase(sink, Phase::Prepare, self.prepare(options)).await?;

        let result = run_phase(
            sink,
            Phase::Generate,
            self.generate(options, &groups, staging, sink),
        )
        .await?;

        sink.on_event(GenerateEvent::Completed {
            artifact_count: result.artifact_count(),
            skipped_count: result.skipped.len(),
            file_count: result.files.len(),
        });

        Ok(result)
    }

    async fn prepare(
        &self,
        options: &GenerateOptions,
    ) -> IconResult<(StagingDir, Vec<AssetGroup>)> {
        // committing replaces the output root wholesale
        let output = resolve_path(&self.file_system, &options.output).await;
        let source = resolve_path(&self.file_system, &options.source).await;
        if source.starts_with(&output) {
            return Err(IconError::OutputContainsSource {
                output: options.output.clone(),
                source_dir: options.source.clone(),
            });
        }

        let staging = StagingDir::create(&self.file_system, &options.output).await?;

        let groups: Vec<AssetGroup> = options
            .groups
            .iter()
            .map(|&kind| AssetGroup::new(kind, &options.source, options.output_subdir(kind)))
            .collect();

        for group in &groups {
            if !group.output_subdir().as_os_str().is_empty() {
                self.file_system
                    .create_dir_all(&staging.path().join(group.output_subdir()))
                    .await?;
            }
        }

        tracing::debug!(staging = %staging.path().display(), "prepared staging directory");
        Ok((staging, groups))
    }

    async fn generate(
        &self,
        options: &GenerateOptions,
        groups: &[AssetGroup],
        staging: StagingDir,
        sink: &dyn GenerateEventSink,
    ) -> IconResult<GenerateResult> {
        let discovery = self.discover(options, groups, sink).await?;

        let mut detector = CollisionDetector::new();
        for asset in &discovery.assets {
            detector.claim(
                &options.collision_scope(asset.group.kind()),
                &asset.names,
                &asset.source,
            )?;
        }

        let styles = self.host_styles(groups).await?;

        let tasks = discovery.assets.iter().enumerate().map(|(index, asset)| {
            let style = styles
                .iter()
                .find(|(kind, _)| *kind == asset.group.kind())
                .map(|(_, css)| css.as_str())
                .unwrap_or_default();
            self.generate_one(index, asset, style, staging.path(), options.minify, sink)
        });
        let written = try_join_all(tasks).await?;

        let output = staging.commit(&self.file_system).await?;

        let mut result = GenerateResult::new(output);
        result.groups = groups.iter().map(AssetGroup::kind).collect();
        result.skipped = discovery.skipped;
        result.generated = discovery.assets.into_iter().map(|a| a.names).collect();
        result.files = written.into_iter().flatten().collect();
        Ok(result)
    }

    /// List every group, skip what is not an asset, derive names
    async fn discover(
        &self,
        options: &GenerateOptions,
        groups: &[AssetGroup],
        sink: &dyn GenerateEventSink,
    ) -> IconResult<Discovery> {
        let mut discovery = Discovery::default();

        for group in groups {
            if !self.file_system.is_dir(group.input_dir()).await {
                return Err(IconError::SourceNotFound {
                    path: group.input_dir().to_path_buf(),
                });
            }

            for entry in self.file_system.list_dir(group.input_dir()).await? {
                let reason = if !entry.is_file {
                    Some("not a regular file".to_string())
                } else if !options.naming.matches_extension(&entry.file_name) {
                    Some(format!("not a .{} file", options.naming.extension))
                } else {
                    None
                };

                if let Some(reason) = reason {
                    tracing::warn!(path = %entry.path.display(), %reason, "skipping entry");
                    sink.on_event(GenerateEvent::EntrySkipped {
                        path: entry.path.clone(),
                        reason,
                    });
                    discovery.skipped.push(entry.path);
                    continue;
                }

                let names = derive_names(&entry.file_name, group.token(), &options.naming)?;
                discovery.assets.push(PlannedAsset {
                    group: group.clone(),
                    file_name: entry.file_name,
                    source: entry.path,
                    names,
                });
            }
        }

        tracing::info!(
            assets = discovery.assets.len(),
            skipped = discovery.skipped.len(),
            "discovered assets"
        );
        Ok(discovery)
    }

    /// Minified host stylesheet per group
    async fn host_styles(&self, groups: &[AssetGroup]) -> IconResult<Vec<(GroupKind, String)>> {
        let tasks = groups.iter().map(|group| {
            let minifier = Arc::clone(&self.transforms.style_minifier);
            let stylesheet = host_style(group.size());

            async move {
                off_thread(move || minifier.minify(&stylesheet))
                    .await
                    .map(|css| (group.kind(), css))
                    .map_err(|source| IconError::Transform {
                        stage: TransformStage::StyleMinifier,
                        path: group.input_dir().to_path_buf(),
                        source,
                    })
            }
        });

        try_join_all(tasks).await
    }

    /// Read, transform, render and stage one asset
    async fn generate_one(
        &self,
        index: usize,
        planned: &PlannedAsset,
        style: &str,
        staging_root: &Path,
        minify: MinifyOptions,
        sink: &dyn GenerateEventSink,
    ) -> IconResult<[PathBuf; 2]> {
        let content = self.file_system.read(&planned.source).await?;
        let asset = SourceAsset::new(
            planned.group.kind(),
            planned.file_name.as_str(),
            planned.source.as_path(),
            content,
        );

        let transform_error = |stage: TransformStage| {
            let path = asset.path().to_path_buf();
            move |source: TransformError| IconError::Transform {
                stage,
                path,
                source,
            }
        };

        let optimizer = Arc::clone(&self.transforms.optimizer);
        let raw = asset.content().to_string();
        let markup = off_thread(move || optimizer.optimize(&raw))
            .await
            .map_err(transform_error(TransformStage::MarkupOptimizer))?;

        let inline = self
            .transforms
            .markup_minifier
            .minify(&inline_content(style, &markup), minify)
            .await
            .map_err(transform_error(TransformStage::MarkupMinifier))?;

        let artifact = render_artifact(&planned.names, &escape_single_quotes(&inline))?;
        let files = artifact.into_output_files(planned.group.output_subdir());

        for file in &files {
            self.file_system
                .write(&staging_root.join(file.path()), file.content())
                .await?;
            tracing::trace!(
                path = %file.path().display(),
                hash = %file.content_hash(),
                bytes = file.len(),
                "staged file"
            );
        }

        tracing::debug!(
            group = %asset.group(),
            file = asset.file_name(),
            tag = %planned.names.tag_name,
            "generated artifact"
        );

        let [module, declaration] = files.map(|f| f.path().to_path_buf());
        if sink.wants_detailed_events() {
            sink.on_event(GenerateEvent::ArtifactWritten {
                index,
                tag_name: planned.names.tag_name.clone(),
                module: module.clone(),
                declaration: declaration.clone(),
            });
        }

        Ok([module, declaration])
    }
}

/// Run a synchronous collaborator on the blocking pool
async fn off_thread<F>(work: F) -> Result<String, TransformError>
where
    F: FnOnce() -> Result<String, TransformError> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .unwrap_or_else(|e| Err(TransformError::Failed(format!("transform task failed: {e}"))))
}

/// Run one phase, reporting its start and outcome
async fn run_phase<T, F>(sink: &dyn GenerateEventSink, phase: Phase, work: F) -> IconResult<T>
where
    F: Future<Output = IconResult<T>>,
{
    tracing::info!(phase = phase.id(), "{}", phase.label());
    sink.on_event(GenerateEvent::PhaseStarted { phase });

    match work.await {
        Ok(value) => {
            sink.on_event(GenerateEvent::PhaseCompleted { phase });
            Ok(value)
        }
        Err(error) => {
            tracing::error!(phase = phase.id(), %error, "phase failed");
            sink.on_event(GenerateEvent::PhaseFailed {
                phase,
                error: error.to_string(),
            });
            Err(error)
        }
    }
}
