//! Dashboard view-session state.
//!
//! One `DashboardView` lives for one run. It owns the four chart slots, the
//! cached metrics dataset (so a metric toggle re-renders without reloading)
//! and the status shown in place of the dashboard when loading fails.

use super::cards::{generate_text_summary, StatCards};
use crate::aggregator::{
    average_category_duration_days, classify_by_year_multiplicity, count_by_category,
    count_by_month, filter_metrics_for_scenario, metric_series, summarize,
};
use crate::charts::{Chart, ChartConfig, ChartSlot};
use crate::loader::DatasetEntry;
use crate::parser::record::{EventRecord, MetricRecord, MetricSelector};
use crate::parser::schema::{
    CategoryCount, DashboardReport, MetricsSection, Summary, YearMultiplicity,
};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::{ChartError, LoadError};
use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::path::Path;

pub const EMPTY_MESSAGE: &str = "Nenhum dado encontrado no arquivo JSON.";

/// What the dashboard region currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardStatus {
    Loading,
    Ready,
    /// Dataset loaded but had no records
    Empty(String),
    /// Dataset could not be fetched or parsed
    Failed(String),
}

impl DashboardStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, DashboardStatus::Ready)
    }

    /// Message shown instead of the dashboard, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            DashboardStatus::Loading => Some("Carregando dados..."),
            DashboardStatus::Ready => None,
            DashboardStatus::Empty(msg) | DashboardStatus::Failed(msg) => Some(msg.as_str()),
        }
    }
}

/// Aggregates behind the event panels
#[derive(Debug, Clone)]
struct EventPanels {
    summary: Summary,
    top_operations: Vec<CategoryCount>,
    monthly: BTreeMap<String, usize>,
    yearly: BTreeMap<i32, YearMultiplicity>,
    average_duration_days: Option<f64>,
}

#[derive(Debug)]
pub struct DashboardView {
    dataset_key: String,
    dataset_title: String,
    config: ChartConfig,

    operations: ChartSlot,
    months: ChartSlot,
    years: ChartSlot,
    metrics: ChartSlot,

    status: DashboardStatus,
    events: Option<EventPanels>,
    metrics_cache: Option<Vec<MetricRecord>>,
    metrics_section: Option<MetricsSection>,
}

impl DashboardView {
    /// View whose charts stay in memory
    pub fn new(dataset: &DatasetEntry, config: ChartConfig) -> Self {
        Self::with_slots(
            dataset,
            config,
            [
                ChartSlot::new("operations"),
                ChartSlot::new("months"),
                ChartSlot::new("years"),
                ChartSlot::new("metrics"),
            ],
        )
    }

    /// View that also writes every chart as `<slot>.svg` under `dir`
    pub fn with_charts_dir(dataset: &DatasetEntry, config: ChartConfig, dir: &Path) -> Self {
        Self::with_slots(
            dataset,
            config,
            [
                ChartSlot::bound_to("operations", dir.join("operations.svg")),
                ChartSlot::bound_to("months", dir.join("months.svg")),
                ChartSlot::bound_to("years", dir.join("years.svg")),
                ChartSlot::bound_to("metrics", dir.join("metrics.svg")),
            ],
        )
    }

    fn with_slots(dataset: &DatasetEntry, config: ChartConfig, slots: [ChartSlot; 4]) -> Self {
        let [operations, months, years, metrics] = slots;
        Self {
            dataset_key: dataset.key.to_string(),
            dataset_title: dataset.title.to_string(),
            config,
            operations,
            months,
            years,
            metrics,
            status: DashboardStatus::Loading,
            events: None,
            metrics_cache: None,
            metrics_section: None,
        }
    }

    pub fn status(&self) -> &DashboardStatus {
        &self.status
    }

    pub fn title(&self) -> &str {
        &self.dataset_title
    }

    pub fn slots(&self) -> [&ChartSlot; 4] {
        [&self.operations, &self.months, &self.years, &self.metrics]
    }

    /// Apply the outcome of the event dataset load
    ///
    /// A failed or empty load hides the event panels and records a message;
    /// otherwise the stats are computed and the three event charts replaced.
    pub fn show_events(
        &mut self,
        loaded: Result<Vec<EventRecord>, LoadError>,
    ) -> Result<&DashboardStatus, ChartError> {
        let records = match loaded {
            Ok(records) if records.is_empty() => {
                info!("{}", EMPTY_MESSAGE);
                self.clear_events(DashboardStatus::Empty(EMPTY_MESSAGE.to_string()));
                return Ok(&self.status);
            }
            Ok(records) => records,
            Err(e) => {
                let message = format!("Erro ao carregar os dados: {}", e);
                warn!("{}", message);
                self.clear_events(DashboardStatus::Failed(message));
                return Ok(&self.status);
            }
        };

        let panels = EventPanels {
            summary: summarize(&records),
            top_operations: count_by_category(&records),
            monthly: count_by_month(&records),
            yearly: classify_by_year_multiplicity(&records),
            average_duration_days: average_category_duration_days(&records),
        };

        self.operations
            .fill(&Chart::operations(&panels.top_operations), &self.config)?;
        self.months.fill(&Chart::monthly(&panels.monthly), &self.config)?;
        self.years.fill(&Chart::yearly(&panels.yearly), &self.config)?;

        self.events = Some(panels);
        self.status = DashboardStatus::Ready;
        Ok(&self.status)
    }

    /// Apply the outcome of the metrics dataset load
    ///
    /// Independent of the event panels: a failure here only drops the
    /// metrics chart.
    pub fn show_metrics(
        &mut self,
        loaded: Result<Vec<MetricRecord>, LoadError>,
        selector: &MetricSelector,
    ) -> Result<Option<&MetricsSection>, ChartError> {
        match loaded {
            Ok(metrics) => {
                self.metrics_cache = Some(metrics);
                self.select_metric(selector)
            }
            Err(e) => {
                warn!("Error loading comparison metrics: {}", e);
                self.metrics_cache = None;
                self.metrics_section = None;
                self.metrics.dispose();
                Ok(None)
            }
        }
    }

    /// Re-render the metrics chart from the cached dataset
    pub fn select_metric(
        &mut self,
        selector: &MetricSelector,
    ) -> Result<Option<&MetricsSection>, ChartError> {
        let Some(metrics) = &self.metrics_cache else {
            debug!("No metrics loaded; ignoring selection of '{}'", selector.key());
            return Ok(None);
        };

        let matched = filter_metrics_for_scenario(metrics, &self.dataset_title);
        let series = metric_series(&matched, selector);
        self.metrics.fill(&Chart::metric(&series), &self.config)?;

        debug!("{}", series.description);
        self.metrics_section = Some(MetricsSection {
            scenario: self.dataset_title.clone(),
            series,
        });
        Ok(self.metrics_section.as_ref())
    }

    pub fn metrics_section(&self) -> Option<&MetricsSection> {
        self.metrics_section.as_ref()
    }

    pub fn stat_cards(&self) -> Option<StatCards> {
        self.events
            .as_ref()
            .map(|panels| StatCards::new(&panels.summary, panels.average_duration_days))
    }

    pub fn text_summary(&self, max_lines: usize) -> Option<String> {
        let panels = self.events.as_ref()?;
        let cards = StatCards::new(&panels.summary, panels.average_duration_days);
        Some(generate_text_summary(
            &self.dataset_title,
            &cards,
            &panels.top_operations,
            max_lines,
        ))
    }

    /// Snapshot the dashboard as a report; `None` unless the events loaded
    pub fn report(&self) -> Option<DashboardReport> {
        let panels = self.events.as_ref()?;
        Some(DashboardReport {
            version: REPORT_SCHEMA_VERSION.to_string(),
            dataset_key: self.dataset_key.clone(),
            dataset_title: self.dataset_title.clone(),
            summary: panels.summary.clone(),
            top_operations: panels.top_operations.clone(),
            monthly: panels.monthly.clone(),
            yearly: panels.yearly.clone(),
            average_duration_days: panels.average_duration_days,
            metrics: self.metrics_section.clone(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    fn clear_events(&mut self, status: DashboardStatus) {
        self.operations.dispose();
        self.months.dispose();
        self.years.dispose();
        self.events = None;
        self.status = status;
    }
}
