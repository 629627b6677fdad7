//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors in how the dashboard was asked to run (fatal before any fetch)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Dataset not found: '{0}'. Check the --dataset parameter.")]
    UnknownDataset(String),

    #[error("Invalid data root: {0}")]
    InvalidDataRoot(String),
}

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Loader for {0} stopped unexpectedly")]
    Interrupted(&'static str),
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("No data to plot for chart '{0}'")]
    EmptyData(String),

    #[error("Series '{series}' has {got} values but the chart has {expected} labels")]
    SeriesLength {
        series: String,
        expected: usize,
        got: usize,
    },

    #[error("Failed to write chart: {0}")]
    Output(#[from] OutputError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
