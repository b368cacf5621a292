// Diagnostic log setup
use crate::infrastructure::config::LoggingConfig;
use anyhow::Context;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a plain-text subscriber appending to the configured log file.
/// The level comes from configuration only; the environment is not read.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .with_context(|| format!("Failed to open log file {}", config.file))?;

    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level '{}'", config.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))
}
