use crate::loader::DATASETS;
use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Dataset: {} ({})", report.dataset_title, report.dataset_key);
    println!("  Records: {}", report.summary.total);
    println!("  Operations: {}", report.summary.unique_categories);
    println!("  Months: {}", report.monthly.len());
    println!(
        "  Metrics: {}",
        if report.metrics.is_some() { "yes" } else { "no" }
    );

    if report.version != REPORT_SCHEMA_VERSION {
        println!(
            "  ⚠ Report schema v{} differs from current v{}",
            report.version, REPORT_SCHEMA_VERSION
        );
    }

    Ok(())
}

/// List the selectable datasets
pub fn display_datasets() {
    println!("Available datasets:");
    for entry in DATASETS {
        println!("  {:<14} {:<40} {}", entry.key, entry.title, entry.file);
    }
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Ops Dashboard Report Schema");
    println!("Current Version: {}", REPORT_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string               - Schema version (e.g., '1.0.0')");
        println!("  dataset_key: string           - Dataset selector");
        println!("  dataset_title: string         - Dataset title / metrics scenario");
        println!("  summary: object               - Headline statistics");
        println!("    total: number               - All records");
        println!("    unique_categories: number   - Distinct operations");
        println!("    average_per_category: number? - Records per operation");
        println!("    date_range: object?         - Earliest/latest posting date");
        println!("  top_operations: array         - Top operations by record count");
        println!("  monthly: object               - Records per YYYY-MM");
        println!("  yearly: object                - Single/multiple split per year");
        println!("  average_duration_days: number? - Mean operation span in days");
        println!("  metrics: object?              - Precision/recall for the scenario");
        println!("  generated_at: string          - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Ops Dashboard v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Summary statistics and charts for news/video operation datasets.");
}
