//! Headline statistics over an event dataset.
//!
//! Every function here is pure: same slice in, same answer out.

use crate::parser::record::EventRecord;
use crate::parser::schema::{DateRange, Summary};
use crate::utils::config::MS_PER_DAY;
use chrono::NaiveDateTime;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Compute total, distinct operations, average per operation and period
///
/// **Public** - main entry point for the stat cards
///
/// # Arguments
/// * `records` - Event dataset
///
/// # Returns
/// Summary where `total` always equals `records.len()`
pub fn summarize(records: &[EventRecord]) -> Summary {
    let total = records.len();

    let unique_categories = records
        .iter()
        .filter_map(EventRecord::category)
        .collect::<HashSet<_>>()
        .len();

    let average_per_category = if unique_categories > 0 {
        Some(round_to(total as f64 / unique_categories as f64, 2))
    } else {
        None
    };

    let summary = Summary {
        total,
        unique_categories,
        average_per_category,
        date_range: date_range(records),
    };

    debug!(
        "Summary: {} records, {} operations, range {:?}",
        summary.total, summary.unique_categories, summary.date_range
    );

    summary
}

/// Earliest and latest parseable posting dates
///
/// Returns `None` when no record has a parseable date.
pub fn date_range(records: &[EventRecord]) -> Option<DateRange> {
    records
        .iter()
        .filter_map(EventRecord::posted_date)
        .fold(None, |range: Option<DateRange>, date| match range {
            None => Some(DateRange {
                start: date,
                end: date,
            }),
            Some(r) => Some(DateRange {
                start: r.start.min(date),
                end: r.end.max(date),
            }),
        })
}

/// Mean span, in whole days, between each operation's first and last post
///
/// **Public** - feeds the "average duration" stat card
///
/// Each operation with at least one dated record contributes
/// `round((max - min) / 1 day)`; a single dated record contributes 0.
/// Returns `None` when no operation has a dated record.
pub fn average_category_duration_days(records: &[EventRecord]) -> Option<f64> {
    let mut spans: HashMap<&str, (NaiveDateTime, NaiveDateTime)> = HashMap::new();

    for record in records {
        let (Some(category), Some(date)) = (record.category(), record.posted_date()) else {
            continue;
        };

        spans
            .entry(category)
            .and_modify(|(min, max)| {
                if date < *min {
                    *min = date;
                }
                if date > *max {
                    *max = date;
                }
            })
            .or_insert((date, date));
    }

    if spans.is_empty() {
        return None;
    }

    let total_days: f64 = spans
        .values()
        .map(|(min, max)| span_in_days(*min, *max))
        .sum();

    Some(total_days / spans.len() as f64)
}

/// Whole days between two instants, rounded to nearest
fn span_in_days(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let millis = (end - start).num_milliseconds() as f64;
    (millis / MS_PER_DAY).round()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
