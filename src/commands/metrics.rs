//! Metrics command implementation.
//!
//! Shows precision or recall per technique, either for one scenario or as
//! a scenario-by-technique comparison.

use super::models::MetricsArgs;
use crate::aggregator::{comparison_matrix, filter_metrics_for_scenario, metric_series};
use crate::charts::{Chart, ChartSlot};
use crate::loader::{load_metrics, DataSource};
use crate::parser::record::MetricSelector;
use anyhow::{Context, Result};
use log::{debug, info};

/// Execute the metrics command
pub fn execute_metrics(args: MetricsArgs) -> Result<()> {
    let source = DataSource::from_root(&args.data_root).context("Failed to open data root")?;
    let metrics = load_metrics(&source).context("Error loading comparison metrics")?;
    let selector = MetricSelector::from(args.metric.as_str());

    let chart = if args.all_scenarios {
        let matrix = comparison_matrix(&metrics, &selector);

        println!("{} por técnica e cenário", selector.label());
        for (i, scenario) in matrix.scenarios.iter().enumerate() {
            let cells: Vec<String> = matrix
                .rows
                .iter()
                .map(|row| format!("{}={:.2}", row.technique, row.values[i]))
                .collect();
            println!("  {:<40} {}", scenario, cells.join("  "));
        }

        Chart::comparison(
            &matrix,
            format!("{} por técnica e cenário", selector.label()),
        )
    } else {
        let scenario = args.scenario.as_deref().unwrap_or_default();
        let matched = filter_metrics_for_scenario(&metrics, scenario);
        let series = metric_series(&matched, &selector);

        println!("{} para '{}'", series.label, scenario);
        if series.points.is_empty() {
            println!("  (nenhuma métrica para este cenário)");
        }
        for point in &series.points {
            println!("  {:<8} {:.2}", point.technique, point.value);
        }
        if !series.description.is_empty() {
            println!("\n{}", series.description);
        }

        Chart::metric(&series)
    };

    if let Some(path) = &args.chart {
        let mut slot = ChartSlot::bound_to("metrics", path);
        let filled = slot
            .fill(&chart, &args.chart_config)
            .context("Failed to render metrics chart")?;

        if filled.is_some() {
            info!("✓ Chart written to: {}", path.display());
        } else {
            debug!("No metric values to chart; {} not written", path.display());
        }
    }

    Ok(())
}

/// Validate metrics arguments
pub fn validate_args(args: &MetricsArgs) -> Result<()> {
    if args.data_root.trim().is_empty() {
        anyhow::bail!("Data root cannot be empty");
    }

    match (&args.scenario, args.all_scenarios) {
        (None, false) => anyhow::bail!("Either --scenario or --all is required"),
        (Some(_), true) => anyhow::bail!("--scenario and --all cannot be combined"),
        _ => Ok(()),
    }
}
