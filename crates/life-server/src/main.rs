//! Life server binary.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `life-config.yaml` if present
//! 3. Warn about missing page or asset paths
//! 4. Serve until `Ctrl-C`

use std::path::Path;

use life_server::{AppError, LifeConfig, start_server};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Config file looked up in the working directory.
const CONFIG_FILE: &str = "life-config.yaml";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("life-server starting");

    let config = load_config()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    for (label, path) in config.server.missing_paths() {
        warn!(
            path = %path.display(),
            "{label} not found; requests for it will return 404"
        );
    }

    if let Err(e) = start_server(&config.server).await {
        tracing::error!(error = %e, "life-server exited with error");
        return Err(e.into());
    }

    Ok(())
}

/// Load configuration from `life-config.yaml`, falling back to defaults
/// (with environment overrides) when the file does not exist.
fn load_config() -> Result<LifeConfig, AppError> {
    let config_path = Path::new(CONFIG_FILE);
    if config_path.exists() {
        Ok(LifeConfig::from_file(config_path)?)
    } else {
        info!("Config file not found, using defaults");
        Ok(LifeConfig::parse("")?)
    }
}
