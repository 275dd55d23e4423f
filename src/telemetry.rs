//! Tracing setup for the binary.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter from `PINFALL_LOG`, then `RUST_LOG`, defaulting to `warn`.
pub fn env_filter() -> EnvFilter {
    std::env::var("PINFALL_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    /// No subscriber; the terminal UI owns the screen.
    Off,
}

pub fn init_tracing(target: LogTarget<'_>) -> Result<()> {
    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(env_filter())
            .with(layer.with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| anyhow!("installing tracing subscriber: {e}")),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(env_filter())
                .with(layer.with_ansi(false).with_writer(Mutex::new(file)))
                .try_init()
                .map_err(|e| anyhow!("installing tracing subscriber: {e}"))
        }
    }
}
