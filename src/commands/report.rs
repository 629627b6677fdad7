//! Report command implementation.
//!
//! The report command:
//! 1. Resolves the dataset selector
//! 2. Loads the event and metrics datasets concurrently
//! 3. Aggregates the events
//! 4. Renders the chart panels
//! 5. Writes the JSON report

use super::models::ReportArgs;
use crate::loader::{find_dataset, load_both, DataSource};
use crate::output::{report_to_string, write_report};
use crate::parser::record::MetricSelector;
use crate::view::{DashboardStatus, DashboardView};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The final dashboard status. `Empty` and `Failed` mean nothing was
/// written; the caller decides how to surface them.
///
/// # Errors
/// * Unknown dataset selector (before any fetch)
/// * Chart or report write failures
pub fn execute_report(args: ReportArgs) -> Result<DashboardStatus> {
    let start_time = Instant::now();

    // Step 1: Resolve dataset
    let dataset = find_dataset(&args.dataset_key)?;
    info!("Dataset: {} ({})", dataset.title, dataset.key);

    let source = DataSource::from_root(&args.data_root).context("Failed to open data root")?;
    info!("Data root: {}", args.data_root);

    // Step 2: Load both datasets
    info!("Step 1/3: Loading datasets...");
    let loaded = load_both(&source, dataset);

    // Step 3: Aggregate and render
    info!("Step 2/3: Building dashboard...");
    let mut view = match &args.charts_dir {
        Some(dir) => DashboardView::with_charts_dir(dataset, args.chart_config.clone(), dir),
        None => DashboardView::new(dataset, args.chart_config.clone()),
    };

    view.show_events(loaded.events)
        .context("Failed to render event charts")?;

    let selector = MetricSelector::from(args.metric.as_str());
    if let Some(section) = view
        .show_metrics(loaded.metrics, &selector)
        .context("Failed to render metrics chart")?
    {
        debug!(
            "Metrics for '{}': {} techniques",
            section.scenario,
            section.series.points.len()
        );
    }

    let status = view.status().clone();
    if !status.is_ready() {
        if let Some(message) = status.message() {
            warn!("{}", message);
        }
        return Ok(status);
    }

    // Step 4: Write outputs
    info!("Step 3/3: Writing outputs...");
    if let Some(report) = view.report() {
        match &args.output_json {
            Some(path) => {
                write_report(&report, path).context("Failed to write report JSON")?;
                info!("✓ Report written to: {}", path.display());
            }
            None => println!("{}", report_to_string(&report)?),
        }
    }

    if let Some(dir) = &args.charts_dir {
        info!("✓ Charts written to: {}", dir.display());
    }

    if args.print_summary {
        if let Some(summary) = view.text_summary(args.summary_lines) {
            println!("\n{}", "=".repeat(64));
            println!("{}", summary);
            if let Some(section) = view.metrics_section() {
                println!();
                println!("  {} ({})", section.series.label, section.scenario);
                for point in &section.series.points {
                    println!("    {:<8} {:.2}", point.technique, point.value);
                }
            }
            println!("{}", "=".repeat(64));
        }
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(status)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.dataset_key.is_empty() {
        anyhow::bail!("Dataset key cannot be empty");
    }

    if args.data_root.trim().is_empty() {
        anyhow::bail!("Data root cannot be empty");
    }

    if args.chart_config.width < 200 || args.chart_config.width > 10_000 {
        anyhow::bail!("Chart width must be between 200 and 10000 pixels");
    }

    if args.summary_lines == 0 {
        anyhow::bail!("summary_lines must be greater than 0");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        let args = ReportArgs {
            dataset_key: "todos_sem".to_string(),
            ..Default::default()
        };
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_dataset() {
        assert!(validate_args(&ReportArgs::default()).is_err());
    }

    #[test]
    fn test_validate_args_bad_width() {
        let mut args = ReportArgs {
            dataset_key: "todos_sem".to_string(),
            ..Default::default()
        };
        args.chart_config.width = 50;
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_unknown_dataset_fails_before_fetch() {
        let args = ReportArgs {
            dataset_key: "nope".to_string(),
            data_root: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        };

        let err = execute_report(args).unwrap_err();
        assert!(err.to_string().contains("Dataset not found"));
    }
}
