//! Output JSON schema definitions for dashboard reports.
//!
//! This module defines the structure of the JSON files we write to disk,
//! and the aggregate shapes the chart layer consumes.
//! Schema is versioned to allow future evolution.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level report written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Dataset selector the report was built from (e.g. `todos_sem`)
    pub dataset_key: String,

    /// Human-readable dataset title
    pub dataset_title: String,

    /// Headline statistics
    pub summary: Summary,

    /// Operations ranked by record count
    pub top_operations: Vec<CategoryCount>,

    /// Record count per `YYYY-MM`
    pub monthly: BTreeMap<String, usize>,

    /// Single/multiple split per year
    pub yearly: BTreeMap<i32, YearMultiplicity>,

    /// Mean span in days between an operation's first and last post
    pub average_duration_days: Option<f64>,

    /// Metrics comparison for this dataset's scenario (if it loaded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsSection>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Headline statistics over an event dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Every record, regardless of field validity
    pub total: usize,

    /// Distinct non-empty operations
    pub unique_categories: usize,

    /// `total / unique_categories` to 2 decimals; `None` without categories
    pub average_per_category: Option<f64>,

    /// Earliest and latest parseable posting dates
    pub date_range: Option<DateRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Record count for one operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Records posted in one year, split by their operation's multiplicity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMultiplicity {
    /// Records whose operation has exactly one record overall
    pub single_count: usize,

    /// Records whose operation has more than one record overall
    pub multiple_count: usize,
}

/// Metrics comparison section of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSection {
    /// Scenario title the records were matched against
    pub scenario: String,

    /// Per-technique values for that scenario
    pub series: MetricSeries,
}

/// Labeled per-technique values for one scenario and one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    /// Metric key (`pre`, `rev`, ...)
    pub metric: String,

    /// Display label for the series
    pub label: String,

    /// Explanatory text shown next to the chart
    pub description: String,

    pub points: Vec<MetricPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub technique: String,
    pub value: f64,
}

/// Every scenario against the fixed technique set, for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    pub metric: String,

    /// Distinct scenarios in first-seen order
    pub scenarios: Vec<String>,

    /// One row per technique, one value per scenario
    pub rows: Vec<TechniqueRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueRow {
    pub technique: String,
    pub values: Vec<f64>,
}
