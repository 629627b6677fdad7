//! Dataset record types, date parsing and report schema.
//!
//! This module handles:
//! - Deserializing event and metrics records from JSON
//! - Parsing posting dates
//! - Defining the report schema

pub mod dates;
pub mod record;
pub mod schema;

// Re-export main types
pub use dates::parse_posting_date;
pub use record::{EventRecord, MetricRecord, MetricSelector};
pub use schema::{
    CategoryCount, ComparisonMatrix, DashboardReport, DateRange, MetricPoint, MetricSeries,
    MetricsSection, Summary, TechniqueRow, YearMultiplicity,
};
