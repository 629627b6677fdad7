//! Presentation of the aggregates: stat cards, chart panels and the
//! per-run view state that ties them together.

pub mod cards;
pub mod dashboard;

pub use cards::{generate_text_summary, StatCards};
pub use dashboard::{DashboardStatus, DashboardView, EMPTY_MESSAGE};
