mod commands;
mod host;
mod terminal;

use commands::{CommandLine, Commands, features, names, set_project};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();

    terminal::logging::init(cli.quiet);

    match cli.command {
        Commands::Names => names::run(&cli).await,
        Commands::Features => features::run(&cli).await,
        Commands::SetProject => set_project::run(&cli).await,
    }
}
