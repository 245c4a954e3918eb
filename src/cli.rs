use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spacebuy", version, about = "SpaceBuy interplanetary pricing service")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the SpaceBuy API server (default)
    Start,

    /// Price a product for a destination from the command line
    Quote {
        /// Product name (catalog item or free text)
        product: String,

        /// Destination planet
        planet: String,

        /// Skip the AI model and price via the fallback estimator
        #[arg(long)]
        offline: bool,
    },

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration (with secrets masked)
    Show,
    /// Validate the configuration file
    Validate,
}
