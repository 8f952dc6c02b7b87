use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::Result;

/// Send tracing output to the configured log file
///
/// The terminal belongs to the UI, so nothing is written to stdout or stderr.
/// `RUST_LOG` overrides the configured level.
pub fn init(config: &LogConfig) -> Result<()> {
    let path = config.file();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.level()));

    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
