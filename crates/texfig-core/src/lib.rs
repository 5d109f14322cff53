// File: crates/texfig-core/src/lib.rs
// Summary: Core library entry point; exports figure construction, layout and LaTeX export.

pub mod axis;
pub mod bounds;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod figure;
pub mod geometry;
pub mod layout;
pub mod margins;
pub mod pipeline;
pub mod scale;
pub mod series;
pub mod style;
pub mod text;
pub mod ticks;
pub mod types;

pub use axis::Axis;
pub use bounds::{date_to_num, DataBounds};
pub use config::FigureConfig;
pub use dataset::{Column, Dataset};
pub use error::{FigureError, Result};
pub use export::{ExportBackend, PgfOptions, TikzOptions};
pub use figure::{Axes, Figure};
pub use margins::eliminate_whitespace;
pub use series::{Series, SeriesType};
pub use style::{Color, FontFamily, StyleConfig, TexSystem};
pub use ticks::{Formatter, Locator, Tick};
pub use types::SubplotParams;
