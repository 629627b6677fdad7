//! Configuration and constants for the dashboard.

use std::time::Duration;

/// Default timeout for HTTP data roots
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Default data root when neither the flag nor the env var is set
pub const DEFAULT_DATA_ROOT: &str = "data";

/// Metrics comparison dataset, relative to the data root
pub const METRICS_FILE: &str = "metrics_comparison.json";

/// Number of operations shown in the per-operation chart
pub const TOP_CATEGORY_LIMIT: usize = 20;

/// Techniques compared in the multi-scenario metrics chart, in display order
pub const TECHNIQUES: &[&str] = &["HT", "HS", "GPT"];

pub const MS_PER_DAY: f64 = 86_400_000.0;
