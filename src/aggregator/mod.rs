//! Aggregation of event and metrics datasets.
//!
//! This module transforms flat record lists into:
//! - Headline statistics (totals, distinct operations, period, duration)
//! - Chart groupings (per operation, per month, per year)
//! - Metrics comparison series

pub mod grouping;
pub mod metrics;
pub mod summary;

// Re-export main functions
pub use grouping::{
    classify_by_year_multiplicity, count_by_category, count_by_month, month_key, top_categories,
};
pub use metrics::{comparison_matrix, filter_metrics_for_scenario, metric_series};
pub use summary::{average_category_duration_days, date_range, summarize};
