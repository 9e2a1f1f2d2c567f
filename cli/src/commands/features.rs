use crate::commands::CommandLine;
use crate::terminal::render;

pub async fn run(cli: &CommandLine) -> anyhow::Result<()> {
    let features = cli.tools().get_features().await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&features)?);
    } else {
        render::print_forest(&features);
    }
    Ok(())
}
