//! Log setup for the binary. The terminal belongs to the game, so events go
//! to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use crate::error::GameError;

/// Filter built from a `RUST_LOG`-style spec; INFO when the spec is empty.
pub fn env_filter(spec: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(spec)
}

/// Install a global fmt subscriber writing to `path`, filtered by `RUST_LOG`.
pub fn init_file_logging(path: &Path) -> Result<(), GameError> {
    let file = File::create(path)?;
    let spec = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&spec))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
