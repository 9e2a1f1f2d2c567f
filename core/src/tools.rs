//! # Feature Tools
//!
//! The read-only tool operations exposed to the hosting environment:
//! a names-only feature summary, the full feature forest, and the
//! active-project selection flow they both depend on.

use std::path::{Path, PathBuf};

use slicemap_common::config::ActiveProject;
use slicemap_common::descriptor::TypeDescriptor;
use slicemap_common::error::ToolError;
use slicemap_common::model::Feature;
use tracing::{debug, info};

use crate::hierarchy::{self, HierarchyOptions};
use crate::source::TypeDescriptorSource;
use crate::workspace::{self, WorkspaceHost};

/// Tool operations over one workspace, with the host and the metadata
/// source injected at the boundary.
pub struct FeatureTools {
    host: Box<dyn WorkspaceHost>,
    source: Box<dyn TypeDescriptorSource>,
    options: HierarchyOptions,
}

impl FeatureTools {
    pub fn new(host: Box<dyn WorkspaceHost>, source: Box<dyn TypeDescriptorSource>) -> Self {
        Self {
            host,
            source,
            options: HierarchyOptions::default(),
        }
    }

    pub fn with_options(mut self, options: HierarchyOptions) -> Self {
        self.options = options;
        self
    }

    /// The distinct, lexicographically sorted top-level feature names.
    pub async fn get_feature_names(&self) -> Result<Vec<String>, ToolError> {
        let descriptors = self.load_descriptors().await?;
        Ok(hierarchy::feature_names(&descriptors, &self.options))
    }

    /// The full feature forest, in grouping order.
    pub async fn get_features(&self) -> Result<Vec<Feature>, ToolError> {
        let descriptors = self.load_descriptors().await?;
        Ok(hierarchy::build_features(&descriptors, &self.options))
    }

    /// Resolves the active project, running the interactive selection flow
    /// when no record exists yet, and returns its workspace-relative path.
    pub async fn set_active_project(&self) -> Result<String, ToolError> {
        let root = self.workspace_root().await?;
        self.resolve_active_project(&root).await
    }

    async fn workspace_root(&self) -> Result<PathBuf, ToolError> {
        let roots = self.host.roots().await.map_err(ToolError::Host)?;
        roots.into_iter().next().ok_or(ToolError::NoRoots)
    }

    async fn resolve_active_project(&self, root: &Path) -> Result<String, ToolError> {
        if let Some(record) = ActiveProject::load(root)? {
            debug!("active project from record: {}", record.project_file);
            return Ok(record.project_file);
        }
        self.elicit_project(root).await
    }

    async fn elicit_project(&self, root: &Path) -> Result<String, ToolError> {
        let candidates = workspace::find_project_files(root);
        if candidates.is_empty() {
            return Err(ToolError::NoProjects);
        }

        let choice = self
            .host
            .select_project(&candidates)
            .await
            .map_err(ToolError::Host)?;

        let project_file = choice
            .filter(|selected| !selected.is_empty())
            .ok_or(ToolError::SelectionCancelled)?;

        ActiveProject::store(root, &project_file)?;
        info!("active project set to {project_file}");
        Ok(project_file)
    }

    async fn load_descriptors(&self) -> Result<Vec<TypeDescriptor>, ToolError> {
        let root = self.workspace_root().await?;
        let project_file = self.resolve_active_project(&root).await?;
        let artifact = workspace::artifact_path(&root, &project_file)?;

        self.source
            .list_exported_types(&artifact)
            .map_err(|cause| {
                debug!("artifact load failed: {cause:#}");
                ToolError::ArtifactLoad(artifact)
            })
    }
}
