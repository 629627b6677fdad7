//! Dataset loading.
//!
//! This module handles:
//! - Resolving a dataset selector through the fixed catalog
//! - Reading JSON from a local directory or an HTTP(S) root
//! - Running the event and metrics loads concurrently

pub mod catalog;
pub mod source;

// Re-export main types
pub use catalog::{find_dataset, DatasetEntry, DATASETS};
pub use source::{load_both, load_events, load_metrics, DataSource, LoadResults};
