//! Interactive workspace host for the terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use async_trait::async_trait;
use colored::*;
use slicemap_core::workspace::WorkspaceHost;

/// Answers host requests from the terminal: the workspace root comes from
/// the command line and project selection reads a numbered choice from
/// stdin. Empty input cancels the selection.
pub struct StdioHost {
    workspace: PathBuf,
}

impl StdioHost {
    pub fn new(workspace: PathBuf) -> Self {
        Self { workspace }
    }
}

#[async_trait]
impl WorkspaceHost for StdioHost {
    async fn roots(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(vec![self.workspace.clone()])
    }

    async fn select_project(&self, candidates: &[String]) -> anyhow::Result<Option<String>> {
        println!("{}", "Select the project that holds the vertical slices:".bold());
        for (index, candidate) in candidates.iter().enumerate() {
            println!("  {} {}", format!("[{}]", index + 1).cyan(), candidate);
        }
        print!("{} ", "choice:".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let input = line.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let choice = input
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| candidates.get(index))
            .cloned();
        Ok(choice)
    }
}
