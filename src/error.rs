use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while loading a catalog file.
///
/// Any of these aborts the dashboard; nothing partial is rendered.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is {size} bytes, above the {limit}-byte load limit", path.display())]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("catalog is missing required column(s): {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("line {line}: invalid {column} value {value:?}")]
    InvalidRow {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Per-record failure to read the `duration` field.
///
/// Never fatal: the series that needed the value skips the record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("duration is missing")]
    Missing,

    #[error("duration {value:?} does not look like \"<N> {unit}\"")]
    Malformed { value: String, unit: &'static str },
}

/// Errors reading a [`DashboardConfig`](crate::config::DashboardConfig) file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
