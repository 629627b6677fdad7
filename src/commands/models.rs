use crate::charts::ChartConfig;
use crate::utils::config::DEFAULT_DATA_ROOT;
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Dataset selector (e.g. `todos_sem`)
    pub dataset_key: String,

    /// Local directory or HTTP(S) base URL holding the datasets
    pub data_root: String,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Directory for the SVG charts (optional)
    pub charts_dir: Option<PathBuf>,

    /// Metric shown in the comparison chart (`pre` or `rev`)
    pub metric: String,

    /// Chart canvas configuration
    pub chart_config: ChartConfig,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Operations listed in the text summary
    pub summary_lines: usize,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            dataset_key: String::new(),
            data_root: DEFAULT_DATA_ROOT.to_string(),
            output_json: Some(PathBuf::from("report.json")),
            charts_dir: None,
            metric: "pre".to_string(),
            chart_config: ChartConfig::default(),
            print_summary: false,
            summary_lines: 10,
        }
    }
}

/// Arguments for the metrics command
#[derive(Debug, Clone)]
pub struct MetricsArgs {
    /// Local directory or HTTP(S) base URL holding the datasets
    pub data_root: String,

    /// Scenario title to filter on (accent/case-insensitive)
    pub scenario: Option<String>,

    /// Compare every scenario against every technique instead
    pub all_scenarios: bool,

    /// Metric key (`pre` or `rev`)
    pub metric: String,

    /// Output path for the SVG chart (optional)
    pub chart: Option<PathBuf>,

    pub chart_config: ChartConfig,
}

impl Default for MetricsArgs {
    fn default() -> Self {
        Self {
            data_root: DEFAULT_DATA_ROOT.to_string(),
            scenario: None,
            all_scenarios: false,
            metric: "pre".to_string(),
            chart: None,
            chart_config: ChartConfig::default(),
        }
    }
}
