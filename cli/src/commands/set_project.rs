use tracing::info;

use crate::commands::CommandLine;

pub async fn run(cli: &CommandLine) -> anyhow::Result<()> {
    let project_file = cli.tools().set_active_project().await?;
    info!("active project: {project_file}");
    Ok(())
}
