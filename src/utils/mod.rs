//! Utility modules for configuration, error handling, and text normalization.

pub mod config;
pub mod error;
pub mod normalize;

// Re-export commonly used error types for convenience
pub use error::{ChartError, ConfigError, LoadError, OutputError};
pub use normalize::{normalize, same_label};
