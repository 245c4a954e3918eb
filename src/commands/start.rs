use anyhow::Result;
use spacebuy::{config, server};
use std::path::Path;
use tracing::info;

/// Execute the start command
pub async fn execute(config_path: &Path) -> Result<()> {
    info!("Loading configuration from {}", config_path.display());
    let cfg = config::load_config(config_path)?;

    server::start_server(cfg).await
}
