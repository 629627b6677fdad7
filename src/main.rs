//! Ops Dashboard CLI
//!
//! Loads an operations dataset and its metrics comparison, prints the
//! headline statistics and writes charts and a JSON report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use ops_dashboard::charts::ChartConfig;
use ops_dashboard::commands::{
    display_datasets, display_schema, display_version, execute_metrics, execute_report, metrics,
    validate_args, validate_report_file, MetricsArgs, ReportArgs,
};
use ops_dashboard::utils::config::DEFAULT_DATA_ROOT;
use ops_dashboard::view::DashboardStatus;
use std::path::PathBuf;

/// Ops Dashboard - statistics and charts for operation datasets
#[derive(Parser, Debug)]
#[command(name = "ops-dashboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the dashboard for one dataset
    Report {
        /// Dataset selector (see `datasets`)
        #[arg(short, long, env = "OPS_DASHBOARD_DATASET")]
        dataset: String,

        /// Local directory or HTTP(S) URL holding the datasets
        #[arg(long, env = "OPS_DASHBOARD_DATA_ROOT", default_value = DEFAULT_DATA_ROOT)]
        data_root: String,

        /// Output path for the JSON report; `-` prints it to stdout
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Directory for the SVG charts (optional)
        #[arg(short, long)]
        charts_dir: Option<PathBuf>,

        /// Metric for the comparison chart: pre (precision) or rev (recall)
        #[arg(short, long, default_value = "pre")]
        metric: String,

        /// Chart width in pixels
        #[arg(long, default_value = "900")]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value = "420")]
        height: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Operations listed in the text summary
        #[arg(long, default_value = "10")]
        summary_lines: usize,
    },

    /// Show precision/recall per technique
    Metrics {
        /// Local directory or HTTP(S) URL holding the datasets
        #[arg(long, env = "OPS_DASHBOARD_DATA_ROOT", default_value = DEFAULT_DATA_ROOT)]
        data_root: String,

        /// Scenario title (accent and case-insensitive)
        #[arg(short, long)]
        scenario: Option<String>,

        /// Compare every scenario instead of one
        #[arg(long)]
        all: bool,

        /// Metric: pre (precision) or rev (recall)
        #[arg(short, long, default_value = "pre")]
        metric: String,

        /// Output path for the SVG chart (optional)
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Chart width in pixels
        #[arg(long, default_value = "900")]
        width: usize,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List the selectable datasets
    Datasets,

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            dataset,
            data_root,
            output,
            charts_dir,
            metric,
            width,
            height,
            summary,
            summary_lines,
        } => {
            let args = ReportArgs {
                dataset_key: dataset,
                data_root,
                output_json: (output.as_os_str() != "-").then_some(output),
                charts_dir,
                metric,
                chart_config: ChartConfig::new().with_width(width).with_height(height),
                print_summary: summary,
                summary_lines,
            };

            validate_args(&args)?;

            match execute_report(args)? {
                DashboardStatus::Failed(message) => anyhow::bail!(message),
                DashboardStatus::Empty(message) => println!("{}", message),
                _ => {}
            }
        }

        Commands::Metrics {
            data_root,
            scenario,
            all,
            metric,
            chart,
            width,
        } => {
            let args = MetricsArgs {
                data_root,
                scenario,
                all_scenarios: all,
                metric,
                chart,
                chart_config: ChartConfig::new().with_width(width),
            };

            metrics::validate_args(&args)?;
            execute_metrics(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Datasets => {
            display_datasets();
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
