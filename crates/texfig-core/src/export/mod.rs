// File: crates/texfig-core/src/export/mod.rs
// Summary: Export backends serialising a finished figure for LaTeX inclusion.

pub mod pgf;
pub mod tikz;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::figure::Figure;

pub use pgf::PgfOptions;
pub use tikz::TikzOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Pgf,
    Tikz,
}

/// Output format plus its format-specific options.
#[derive(Clone, Debug, PartialEq)]
pub enum ExportBackend {
    /// Raw PGF drawing commands, included with `\input`.
    Pgf(PgfOptions),
    /// A pgfplots axis, included with `\includegraphics` via tikzscale.
    Tikz(TikzOptions),
}

impl ExportBackend {
    pub fn kind(&self) -> BackendKind {
        match self {
            ExportBackend::Pgf(_) => BackendKind::Pgf,
            ExportBackend::Tikz(_) => BackendKind::Tikz,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ExportBackend::Pgf(_) => "figure.pgf",
            ExportBackend::Tikz(_) => "figure.tikz",
        }
    }

    pub fn render(&self, fig: &Figure) -> String {
        match self {
            ExportBackend::Pgf(opts) => pgf::render(fig, opts),
            ExportBackend::Tikz(opts) => tikz::render(fig, opts),
        }
    }

    /// Render and write to `path`, creating parent directories. Returns the byte count.
    pub fn save(&self, fig: &Figure, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = self.render(fig);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text.as_bytes())?;
        info!(path = %path.display(), bytes = text.len(), backend = ?self.kind(), "wrote figure");
        Ok(text.len())
    }
}

/// Fixed-point number as used inside PGF/pgfplots coordinates.
pub(crate) fn num(v: f64) -> String {
    let s = format!("{v:.6}");
    if s == "-0.000000" { "0.000000".to_string() } else { s }
}
