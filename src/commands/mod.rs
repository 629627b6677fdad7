//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod metrics;
pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use metrics::execute_metrics;
pub use models::{MetricsArgs, ReportArgs};
pub use report::{execute_report, validate_args};
pub use utils::{display_datasets, display_schema, display_version, validate_report_file};
