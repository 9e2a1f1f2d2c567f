pub mod features;
pub mod names;
pub mod set_project;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use slicemap_core::source::JsonMetadataSource;
use slicemap_core::tools::FeatureTools;

use crate::host::StdioHost;

#[derive(Parser)]
#[command(name = "slicemap")]
#[command(about = "Maps the features and vertical slices of a built project.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root to operate on
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Emit machine-readable JSON instead of the tree view
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the top-level feature names
    #[command(alias = "n")]
    Names,
    /// Show the full feature and vertical-slice forest
    #[command(alias = "f")]
    Features,
    /// Select the project file that holds the vertical slices
    #[command(alias = "p")]
    SetProject,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Wires the tool service against the interactive host and the JSON
    /// metadata source.
    pub fn tools(&self) -> FeatureTools {
        FeatureTools::new(
            Box::new(StdioHost::new(self.workspace.clone())),
            Box::new(JsonMetadataSource),
        )
    }
}
