use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use spacebuy::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    init_tracing();

    match args.command.unwrap_or(cli::Commands::Start) {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Quote {
            product,
            planet,
            offline,
        } => {
            commands::quote::execute(&args.config, &product, &planet, offline).await?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Version => {
            println!("SpaceBuy v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
