use ops_dashboard::aggregator::{
    average_category_duration_days, classify_by_year_multiplicity, count_by_category,
    count_by_month, filter_metrics_for_scenario, summarize,
};
use ops_dashboard::parser::schema::YearMultiplicity;
use ops_dashboard::parser::{EventRecord, MetricRecord};
use ops_dashboard::utils::normalize;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn sample() -> Vec<EventRecord> {
    vec![
        EventRecord::new(Some("A"), Some("2024-01-10")),
        EventRecord::new(Some("A"), Some("2024-03-05")),
        EventRecord::new(Some("B"), Some("2023-12-01")),
    ]
}

#[test]
fn test_summarize_sample() {
    let summary = summarize(&sample());

    assert_eq!(summary.total, 3);
    assert_eq!(summary.unique_categories, 2);
    assert_eq!(summary.average_per_category, Some(1.5));

    let range = summary.date_range.unwrap();
    assert_eq!(range.start.date().to_string(), "2023-12-01");
    assert_eq!(range.end.date().to_string(), "2024-03-05");
}

#[test]
fn test_classify_sample() {
    let mut expected = BTreeMap::new();
    expected.insert(
        2023,
        YearMultiplicity {
            single_count: 1,
            multiple_count: 0,
        },
    );
    expected.insert(
        2024,
        YearMultiplicity {
            single_count: 0,
            multiple_count: 2,
        },
    );

    assert_eq!(classify_by_year_multiplicity(&sample()), expected);
}

#[test]
fn test_average_duration_sample() {
    // A spans 2024-01-10..2024-03-05 = 55 days (leap February), B is 0
    assert_eq!(average_category_duration_days(&sample()), Some(27.5));
}

#[test]
fn test_empty_input() {
    let summary = summarize(&[]);

    assert_eq!(summary.total, 0);
    assert_eq!(summary.unique_categories, 0);
    assert!(summary.average_per_category.is_none());
    assert!(count_by_category(&[]).is_empty());
    assert!(count_by_month(&[]).is_empty());
    assert!(classify_by_year_multiplicity(&[]).is_empty());
    assert!(average_category_duration_days(&[]).is_none());
}

#[test]
fn test_total_counts_defective_records() {
    let records = vec![
        EventRecord::new(None, None),
        EventRecord::new(Some(""), Some("31/31/2024")),
        EventRecord::new(Some("A"), Some("bad")),
    ];

    let summary = summarize(&records);

    assert_eq!(summary.total, records.len());
    assert_eq!(summary.unique_categories, 1);
    assert!(summary.date_range.is_none());
    assert!(count_by_month(&records).is_empty());
}

#[test]
fn test_category_ranking_is_stable_and_bounded() {
    let mut records = Vec::new();
    for i in 0..25 {
        let op = format!("op{:02}", i);
        for _ in 0..(i % 3 + 1) {
            records.push(EventRecord::new(Some(op.as_str()), Some("2024-01-01")));
        }
    }

    let ranked = count_by_category(&records);

    assert_eq!(ranked.len(), 20);
    assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    // ops with count 3 are op02, op05, ... in first-seen order
    assert_eq!(ranked[0].category, "op02");
    assert_eq!(ranked[1].category, "op05");
}

#[test]
fn test_month_keys_format() {
    let records = vec![
        EventRecord::new(Some("A"), Some("2024-09-30T23:00:00")),
        EventRecord::new(Some("A"), Some("2024-10-01")),
        EventRecord::new(None, Some("2019-01-15")),
    ];

    let months = count_by_month(&records);
    let keys: Vec<&str> = months.keys().map(String::as_str).collect();

    assert_eq!(keys, vec!["2019-01", "2024-09", "2024-10"]);
    assert!(keys
        .iter()
        .all(|k| k.len() == 7 && k.as_bytes()[4] == b'-'));
}

#[test]
fn test_multiple_never_counted_as_single() {
    let records = vec![
        EventRecord::new(Some("X"), Some("2021-05-01")),
        EventRecord::new(Some("X"), Some("2022-05-01")),
        EventRecord::new(Some("X"), Some("2023-05-01")),
    ];

    let years = classify_by_year_multiplicity(&records);

    assert_eq!(years.len(), 3);
    assert!(years.values().all(|y| y.single_count == 0 && y.multiple_count == 1));
}

#[test]
fn test_aggregations_are_idempotent() {
    let records = sample();

    assert_eq!(summarize(&records), summarize(&records));
    assert_eq!(count_by_category(&records), count_by_category(&records));
    assert_eq!(count_by_month(&records), count_by_month(&records));
    assert_eq!(
        classify_by_year_multiplicity(&records),
        classify_by_year_multiplicity(&records)
    );
    assert_eq!(records, sample());
}

#[test]
fn test_normalize_variants_agree() {
    assert_eq!(normalize("Política"), normalize("politica"));
    assert_eq!(normalize("POLÍTICA"), normalize("politica"));
}

#[test]
fn test_filter_metrics_accent_insensitive() {
    let metrics: Vec<MetricRecord> = serde_json::from_str(
        r#"[
            {"cenario": "Eventos esparsos (sem transcricao)", "tecnica": "HT", "pre": 0.7, "rev": 0.6},
            {"cenario": "EVENTOS ESPARSOS (SEM TRANSCRIÇÃO)", "tecnica": "GPT", "pre": 0.8, "rev": 0.5},
            {"cenario": "Todos eventos (sem transcrição)", "tecnica": "HT", "pre": 0.1, "rev": 0.2}
        ]"#,
    )
    .unwrap();

    let matched = filter_metrics_for_scenario(&metrics, "Eventos esparsos (sem transcrição)");
    let techniques: Vec<&str> = matched.iter().map(|m| m.technique.as_str()).collect();

    assert_eq!(techniques, vec!["HT", "GPT"]);
}
