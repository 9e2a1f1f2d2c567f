//! Tool-level failure taxonomy.
//!
//! Every failure aborts the whole tool call; there is no partial-result mode.
//! The classification core itself has no failure modes of its own, so every
//! variant here originates at the workspace or artifact boundary.

use std::path::PathBuf;

use thiserror::Error;

/// A failure surfaced to the caller of a tool operation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The host supplied no workspace roots.
    #[error("no workspace roots available from the host")]
    NoRoots,

    /// The resolved project's containing directory does not exist.
    #[error("project path '{0}' not found")]
    ProjectPathNotFound(PathBuf),

    /// The build output could not be loaded as a type-metadata source.
    /// Deliberately opaque: missing file and malformed artifact collapse
    /// into this one message.
    #[error("could not load artifact '{0}'; make sure the project has been built")]
    ArtifactLoad(PathBuf),

    /// Interactive discovery found zero candidate project files.
    #[error("no project files found in workspace")]
    NoProjects,

    /// The host did not produce an accepted, non-empty project choice.
    #[error("project selection cancelled")]
    SelectionCancelled,

    /// The active-project record could not be read or written.
    #[error("active-project record error: {0}")]
    Config(#[from] ConfigError),

    /// A host round-trip failed.
    #[error("host request failed: {0}")]
    Host(anyhow::Error),
}

/// Failure reading or writing the active-project record.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
