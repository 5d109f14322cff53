// File: crates/texfig-core/src/config.rs
// Summary: TOML run configuration; every field defaults to the stock figure.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::export::{BackendKind, ExportBackend, PgfOptions, TikzOptions};
use crate::style::StyleConfig;
use crate::types::{FIGURE_HEIGHT_IN, TEXT_WIDTH_IN};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureSection {
    pub width_in: f64,
    pub height_in: f64,
    /// Axes title; empty means none.
    pub title: String,
    pub suptitle: Option<String>,
    pub x_label: String,
    pub y_label: String,
    /// IANA zone of the date index and of the day ticks.
    pub time_zone: String,
    /// strftime pattern for x tick labels.
    pub date_format: String,
    pub day_interval: u32,
    /// Label series by column name and show a legend.
    pub legend: bool,
    pub legend_title: Option<String>,
    /// Tight-layout padding in multiples of the base font size.
    pub tight_pad: f64,
}

impl Default for FigureSection {
    fn default() -> Self {
        Self {
            width_in: TEXT_WIDTH_IN,
            height_in: FIGURE_HEIGHT_IN,
            title: String::new(),
            suptitle: None,
            x_label: "Wochentag".to_string(),
            y_label: "Produktion".to_string(),
            time_zone: "EST".to_string(),
            date_format: "%m-%d\n%a".to_string(),
            day_interval: 1,
            legend: false,
            legend_title: None,
            // Zero padding can clip glyph descenders.
            tight_pad: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub output_dir: PathBuf,
    pub figure: FigureSection,
    pub style: StyleConfig,
    pub pgf: PgfOptions,
    pub tikz: TikzOptions,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            figure: FigureSection::default(),
            style: StyleConfig::default(),
            pgf: PgfOptions::default(),
            tikz: TikzOptions::default(),
        }
    }
}

impl FigureConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn backend(&self, kind: BackendKind) -> ExportBackend {
        match kind {
            BackendKind::Pgf => ExportBackend::Pgf(self.pgf.clone()),
            BackendKind::Tikz => ExportBackend::Tikz(self.tikz.clone()),
        }
    }

    pub fn output_path(&self, backend: &ExportBackend) -> PathBuf {
        self.output_dir.join(backend.file_name())
    }
}
