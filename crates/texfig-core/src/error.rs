// File: crates/texfig-core/src/error.rs
// Summary: Error type shared by dataset construction, configuration and export.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FigureError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("column '{column}' has {got} values but the index has {expected}")]
    LengthMismatch { column: String, expected: usize, got: usize },

    #[error("no data points to compute bounds from")]
    EmptyData,

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),

    #[error("local time {0} does not exist in the selected time zone")]
    InvalidLocalTime(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FigureError>;
