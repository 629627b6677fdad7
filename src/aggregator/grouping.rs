//! Chart-ready groupings of an event dataset.
//!
//! - Operations ranked by record count
//! - Records per calendar month
//! - Records per year, split by their operation's multiplicity

use crate::parser::record::EventRecord;
use crate::parser::schema::{CategoryCount, YearMultiplicity};
use crate::utils::config::TOP_CATEGORY_LIMIT;
use chrono::{Datelike, NaiveDateTime};
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Top operations by record count
///
/// **Public** - shorthand for `top_categories(records, TOP_CATEGORY_LIMIT)`
pub fn count_by_category(records: &[EventRecord]) -> Vec<CategoryCount> {
    top_categories(records, TOP_CATEGORY_LIMIT)
}

/// Rank operations by record count
///
/// # Arguments
/// * `records` - Event dataset
/// * `limit` - Maximum number of entries to return
///
/// # Returns
/// Counts sorted descending; equal counts keep the order in which the
/// operation was first seen. Records without an operation are skipped.
pub fn top_categories(records: &[EventRecord], limit: usize) -> Vec<CategoryCount> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for category in records.iter().filter_map(EventRecord::category) {
        match position.get(category) {
            Some(&i) => counts[i].count += 1,
            None => {
                position.insert(category, counts.len());
                counts.push(CategoryCount {
                    category: category.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, which gives the first-seen tie-break
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);

    debug!("Ranked {} operations (limit {})", counts.len(), limit);

    counts
}

/// Records per `YYYY-MM`
///
/// Keys iterate in chronological order. Records without a parseable
/// posting date are skipped.
pub fn count_by_month(records: &[EventRecord]) -> BTreeMap<String, usize> {
    let mut months = BTreeMap::new();

    for date in records.iter().filter_map(EventRecord::posted_date) {
        *months.entry(month_key(&date)).or_insert(0) += 1;
    }

    months
}

/// Calendar month key, month 1-indexed and zero-padded
pub fn month_key(date: &NaiveDateTime) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Records per year, split by whether their operation is single or multiple
///
/// **Public** - feeds the stacked per-year chart
///
/// An operation is "multiple" when it has more than one record in the whole
/// dataset, dated or not. The classification is dataset-wide, so an
/// operation posted once in 2023 and once in 2024 adds one multiple count to
/// each of those years. Records without an operation or a parseable date
/// are skipped.
pub fn classify_by_year_multiplicity(records: &[EventRecord]) -> BTreeMap<i32, YearMultiplicity> {
    let totals = category_totals(records);
    let mut years: BTreeMap<i32, YearMultiplicity> = BTreeMap::new();

    for record in records {
        let (Some(category), Some(date)) = (record.category(), record.posted_date()) else {
            continue;
        };

        let bucket = years.entry(date.year()).or_default();
        if totals.get(category).copied().unwrap_or(0) > 1 {
            bucket.multiple_count += 1;
        } else {
            bucket.single_count += 1;
        }
    }

    years
}

/// Record count per operation over the whole dataset
fn category_totals(records: &[EventRecord]) -> HashMap<&str, usize> {
    let mut totals = HashMap::new();
    for category in records.iter().filter_map(EventRecord::category) {
        *totals.entry(category).or_insert(0) += 1;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(op: &str, date: &str) -> EventRecord {
        EventRecord::new(Some(op), Some(date))
    }

    #[test]
    fn test_top_categories_tie_break_first_seen() {
        let records = vec![
            rec("B", "2024-01-01"),
            rec("A", "2024-01-01"),
            rec("C", "2024-01-01"),
            rec("C", "2024-01-01"),
            rec("A", "2024-01-01"),
            rec("B", "2024-01-01"),
            rec("D", "2024-01-01"),
        ];

        let ranked = top_categories(&records, 10);
        let names: Vec<&str> = ranked.iter().map(|c| c.category.as_str()).collect();

        assert_eq!(names, vec!["B", "A", "C", "D"]);
        assert_eq!(ranked[0].count, 2);
        assert_eq!(ranked[3].count, 1);
    }

    #[test]
    fn test_count_by_category_truncates_to_limit() {
        let records: Vec<EventRecord> = (0..30)
            .map(|i| {
                let op = format!("op{}", i);
                EventRecord::new(Some(op.as_str()), None)
            })
            .collect();

        let ranked = count_by_category(&records);

        assert_eq!(ranked.len(), TOP_CATEGORY_LIMIT);
        assert_eq!(ranked[0].category, "op0");
        assert_eq!(ranked[19].category, "op19");
    }

    #[test]
    fn test_count_by_category_skips_missing_operation() {
        let records = vec![
            EventRecord::new(None, Some("2024-01-01")),
            EventRecord::new(Some(""), Some("2024-01-01")),
        ];
        assert!(count_by_category(&records).is_empty());
    }

    #[test]
    fn test_month_key_zero_padded() {
        let date = crate::parser::parse_posting_date("2024-03-05").unwrap();
        assert_eq!(month_key(&date), "2024-03");
    }

    #[test]
    fn test_count_by_month_chronological() {
        let records = vec![
            rec("A", "2024-11-02"),
            rec("A", "2024-02-10"),
            rec("B", "2023-12-31"),
            rec("B", "2024-02-28"),
            rec("B", "not a date"),
        ];

        let months = count_by_month(&records);
        let keys: Vec<&String> = months.keys().collect();

        assert_eq!(keys, vec!["2023-12", "2024-02", "2024-11"]);
        assert_eq!(months["2024-02"], 2);
    }

    #[test]
    fn test_multiplicity_is_dataset_wide() {
        let records = vec![rec("A", "2023-06-01"), rec("A", "2024-06-01"), rec("B", "2024-01-01")];

        let years = classify_by_year_multiplicity(&records);

        assert_eq!(
            years[&2023],
            YearMultiplicity {
                single_count: 0,
                multiple_count: 1
            }
        );
        assert_eq!(
            years[&2024],
            YearMultiplicity {
                single_count: 1,
                multiple_count: 1
            }
        );
    }

    #[test]
    fn test_multiplicity_counts_undated_records() {
        // A's second record has no date but still makes A "multiple"
        let records = vec![rec("A", "2024-01-01"), EventRecord::new(Some("A"), None)];

        let years = classify_by_year_multiplicity(&records);

        assert_eq!(years.len(), 1);
        assert_eq!(years[&2024].multiple_count, 1);
        assert_eq!(years[&2024].single_count, 0);
    }
}
