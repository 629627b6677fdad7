//! Chart rendering for the dashboard panels.
//!
//! Aggregates become `Chart` values, which are rendered to SVG and held in
//! per-panel `ChartSlot`s.

pub mod generator;
pub mod slot;

// Re-export main types
pub use generator::{format_value, render_chart, Chart, ChartConfig, ChartKind, Series};
pub use slot::{ChartSlot, RenderedChart};
