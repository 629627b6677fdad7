//! Ops Dashboard
//!
//! Summary statistics and charts for news/video "operation" datasets,
//! with a precision/recall comparison per dataset scenario.
//!
//! This crate provides the core implementation for the
//! `ops-dashboard` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! ops-dashboard datasets
//! ops-dashboard report --dataset todos_sem --data-root ./data --summary
//! ```
//!
//! The aggregation functions are pure and can be used directly:
//!
//! ```
//! use ops_dashboard::aggregator::summarize;
//! use ops_dashboard::parser::EventRecord;
//!
//! let records = vec![
//!     EventRecord::new(Some("A"), Some("2024-01-10")),
//!     EventRecord::new(Some("B"), None),
//! ];
//! assert_eq!(summarize(&records).total, 2);
//! ```

pub mod aggregator;
pub mod charts;
pub mod commands;
pub mod loader;
pub mod output;
pub mod parser;
pub mod utils;
pub mod view;
