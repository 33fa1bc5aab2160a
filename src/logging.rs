//! Diagnostic tracing.
//!
//! The terminal belongs to the game while it runs, so log output goes to a
//! file and only when one is asked for. The filter comes from `RUST_LOG`,
//! defaulting to `info`.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a subscriber writing to `path`. Does nothing without a path.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false).compact())
        .try_init()
        .context("install tracing subscriber")?;

    Ok(())
}
