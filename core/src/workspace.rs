//! # Workspace Boundary
//!
//! The host capability (workspace roots, interactive project selection) and
//! the filesystem conventions around a project: where project files live and
//! where a built artifact is expected.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use slicemap_common::error::ToolError;
use walkdir::WalkDir;

/// Extension of candidate project files discovered under a workspace root.
pub const PROJECT_FILE_EXTENSION: &str = "csproj";

/// Build configuration segment of the conventional artifact path.
pub const BUILD_CONFIGURATION: &str = "Debug";

/// Target framework segment of the conventional artifact path.
pub const TARGET_FRAMEWORK: &str = "net9.0";

/// The hosting environment driving the tools: supplies workspace roots and
/// answers project-selection requests. The only asynchronous boundary in the
/// system.
#[async_trait]
pub trait WorkspaceHost: Send + Sync {
    /// The workspace root paths the host is operating on.
    async fn roots(&self) -> anyhow::Result<Vec<PathBuf>>;

    /// Asks the host to pick one of `candidates` (paths relative to the
    /// workspace root). `None` means the selection was cancelled.
    async fn select_project(&self, candidates: &[String]) -> anyhow::Result<Option<String>>;
}

/// Recursively collects project files under `root`, as root-relative paths
/// in directory-walk order.
pub fn find_project_files(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext == PROJECT_FILE_EXTENSION)
        })
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|relative| relative.to_string_lossy().into_owned())
        })
        .collect()
}

/// Derives the conventional build-output path for a project file:
/// `<project dir>/bin/Debug/net9.0/<stem>.dll`.
///
/// Fails when the project's containing directory does not exist.
pub fn artifact_path(root: &Path, project_file: &str) -> Result<PathBuf, ToolError> {
    let full_path = root.join(project_file);

    let project_dir = full_path
        .parent()
        .filter(|dir| dir.is_dir())
        .ok_or_else(|| ToolError::ProjectPathNotFound(full_path.clone()))?;

    let stem = full_path
        .file_stem()
        .ok_or_else(|| ToolError::ProjectPathNotFound(full_path.clone()))?;

    Ok(project_dir
        .join("bin")
        .join(BUILD_CONFIGURATION)
        .join(TARGET_FRAMEWORK)
        .join(format!("{}.dll", stem.to_string_lossy())))
}
