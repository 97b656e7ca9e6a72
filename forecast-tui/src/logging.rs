use std::{fs, sync::Arc};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use forecast_core::Config;

/// Route tracing output to a file next to the config.
///
/// The TUI owns the alternate screen, so logs must never hit stdout or
/// stderr while it is up. `RUST_LOG` filters as usual, defaulting to
/// `info`.
pub fn init() -> Result<()> {
    let path = Config::log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fs::File::create(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
