use crate::commands::CommandLine;
use crate::terminal::render;

pub async fn run(cli: &CommandLine) -> anyhow::Result<()> {
    let names = cli.tools().get_feature_names().await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        render::print_names(&names);
    }
    Ok(())
}
