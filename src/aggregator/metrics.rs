//! Precision/recall comparison shaping.
//!
//! The metrics dataset is keyed by scenario label, which is matched against
//! a dashboard title accent- and case-insensitively.

use crate::parser::record::{MetricRecord, MetricSelector};
use crate::parser::schema::{ComparisonMatrix, MetricPoint, MetricSeries, TechniqueRow};
use crate::utils::config::TECHNIQUES;
use crate::utils::normalize::same_label;
use log::debug;

/// Metric records whose scenario matches `scenario_title`
///
/// **Public** - an empty result is valid, not an error
pub fn filter_metrics_for_scenario<'a>(
    metrics: &'a [MetricRecord],
    scenario_title: &str,
) -> Vec<&'a MetricRecord> {
    let matches: Vec<&MetricRecord> = metrics
        .iter()
        .filter(|m| same_label(&m.scenario, scenario_title))
        .collect();

    debug!(
        "Scenario '{}' matched {} of {} metric records",
        scenario_title,
        matches.len(),
        metrics.len()
    );

    matches
}

/// Build the labeled per-technique series for one metric
///
/// Points keep the order of `records`. An unknown selector yields 0 for
/// every point.
pub fn metric_series(records: &[&MetricRecord], selector: &MetricSelector) -> MetricSeries {
    MetricSeries {
        metric: selector.key().to_string(),
        label: selector.label().to_string(),
        description: selector.description().to_string(),
        points: records
            .iter()
            .map(|m| MetricPoint {
                technique: m.technique.clone(),
                value: selector.select(m),
            })
            .collect(),
    }
}

/// Every scenario against the fixed technique set
///
/// Scenarios appear in first-seen order. A cell takes the first record
/// matching (scenario, technique) exactly, or 0 when there is none.
pub fn comparison_matrix(metrics: &[MetricRecord], selector: &MetricSelector) -> ComparisonMatrix {
    let mut scenarios: Vec<String> = Vec::new();
    for m in metrics {
        if !scenarios.contains(&m.scenario) {
            scenarios.push(m.scenario.clone());
        }
    }

    let rows = TECHNIQUES
        .iter()
        .map(|technique| TechniqueRow {
            technique: technique.to_string(),
            values: scenarios
                .iter()
                .map(|scenario| {
                    metrics
                        .iter()
                        .find(|m| &m.scenario == scenario && m.technique == *technique)
                        .map(|m| selector.select(m))
                        .unwrap_or(0.0)
                })
                .collect(),
        })
        .collect();

    ComparisonMatrix {
        metric: selector.key().to_string(),
        scenarios,
        rows,
    }
}
