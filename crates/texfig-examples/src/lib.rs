// File: crates/texfig-examples/src/lib.rs
// Summary: Shared entry point for the figure binaries: logging setup, config loading, export.

use std::path::PathBuf;

use anyhow::{Context, Result};
use texfig_core::config::FigureConfig;
use texfig_core::export::BackendKind;
use texfig_core::pipeline;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

/// Config from the first CLI argument, or the built-in defaults.
pub fn load_config(arg: Option<String>) -> Result<FigureConfig> {
    match arg {
        Some(path) => FigureConfig::load(&path)
            .with_context(|| format!("failed to load config '{path}'")),
        None => Ok(FigureConfig::default()),
    }
}

pub fn run(kind: BackendKind) -> Result<PathBuf> {
    init_logging();
    let config = load_config(std::env::args().nth(1))?;
    let backend = config.backend(kind);
    let path = pipeline::export(&config, &backend)
        .with_context(|| format!("failed to export {}", backend.file_name()))?;
    info!(path = %path.display(), "done");
    Ok(path)
}
