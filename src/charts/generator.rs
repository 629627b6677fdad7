//! SVG chart generation for the dashboard panels.
//!
//! Charts are written as SVG directly, one layout per panel:
//! - Horizontal bars for the per-operation ranking
//! - A filled line for posts per month
//! - Stacked bars for the per-year single/multiple split
//! - Grouped bars for precision/recall comparisons

use crate::parser::schema::{CategoryCount, ComparisonMatrix, MetricSeries, YearMultiplicity};
use crate::utils::error::ChartError;
use log::{debug, info};
use std::collections::BTreeMap;

const OPERATIONS_COLOR: &str = "rgb(30, 64, 175)";
const MONTHLY_COLOR: &str = "#0f79ba";
const SINGLE_COLOR: &str = "#97C6D3";
const MULTIPLE_COLOR: &str = "#395FA1";
const METRIC_COLOR: &str = "#0f79ba";
const TECHNIQUE_COLORS: &[&str] = &["#10b981", "#3b82f6", "#f59e0b"];
const GRID_COLOR: &str = "#e2e8f0";
const TICK_COLOR: &str = "#334155";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    HorizontalBar,
    Line,
    StackedBar,
    GroupedBar,
}

/// One named run of values, aligned with the chart labels
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub color: String,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values,
            color: color.into(),
        }
    }
}

/// Chart-ready data: labels plus one or more series
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub series: Vec<Series>,

    /// Fixed top of the value axis (e.g. 1.0 for ratios)
    pub y_max: Option<f64>,
}

impl Chart {
    /// Top operations as horizontal bars
    pub fn operations(counts: &[CategoryCount]) -> Self {
        Self {
            kind: ChartKind::HorizontalBar,
            title: "Vídeos por operação".to_string(),
            labels: counts.iter().map(|c| c.category.clone()).collect(),
            series: vec![Series::new(
                "Vídeos",
                counts.iter().map(|c| c.count as f64).collect(),
                OPERATIONS_COLOR,
            )],
            y_max: None,
        }
    }

    /// Posts per month as a line
    pub fn monthly(months: &BTreeMap<String, usize>) -> Self {
        Self {
            kind: ChartKind::Line,
            title: "Vídeos por mês".to_string(),
            labels: months.keys().cloned().collect(),
            series: vec![Series::new(
                "Vídeos",
                months.values().map(|&n| n as f64).collect(),
                MONTHLY_COLOR,
            )],
            y_max: None,
        }
    }

    /// Per-year single/multiple split as stacked bars
    pub fn yearly(years: &BTreeMap<i32, YearMultiplicity>) -> Self {
        Self {
            kind: ChartKind::StackedBar,
            title: "Distribuição de eventos por ano".to_string(),
            labels: years.keys().map(|y| y.to_string()).collect(),
            series: vec![
                Series::new(
                    "Eventos únicos",
                    years.values().map(|y| y.single_count as f64).collect(),
                    SINGLE_COLOR,
                ),
                Series::new(
                    "Eventos com múltiplos vídeos",
                    years.values().map(|y| y.multiple_count as f64).collect(),
                    MULTIPLE_COLOR,
                ),
            ],
            y_max: None,
        }
    }

    /// One scenario's per-technique values
    pub fn metric(series: &MetricSeries) -> Self {
        Self {
            kind: ChartKind::GroupedBar,
            title: series.label.clone(),
            labels: series.points.iter().map(|p| p.technique.clone()).collect(),
            series: vec![Series::new(
                series.label.clone(),
                series.points.iter().map(|p| p.value).collect(),
                METRIC_COLOR,
            )],
            y_max: Some(1.0),
        }
    }

    /// Every scenario, one bar per technique
    pub fn comparison(matrix: &ComparisonMatrix, title: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::GroupedBar,
            title: title.into(),
            labels: matrix.scenarios.clone(),
            series: matrix
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    Series::new(
                        row.technique.clone(),
                        row.values.clone(),
                        TECHNIQUE_COLORS[i % TECHNIQUE_COLORS.len()],
                    )
                })
                .collect(),
            y_max: Some(1.0),
        }
    }
}

/// Chart canvas configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 420,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }
}

/// Plot area inside the canvas
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Render a chart as a standalone SVG document
///
/// **Public** - main entry point for chart rendering
///
/// # Errors
/// * `ChartError::EmptyData` - no labels or no series
/// * `ChartError::SeriesLength` - a series does not line up with the labels
pub fn render_chart(chart: &Chart, config: &ChartConfig) -> Result<String, ChartError> {
    validate_chart(chart)?;

    info!(
        "Rendering '{}' ({:?}, {} labels, {} series)",
        chart.title,
        chart.kind,
        chart.labels.len(),
        chart.series.len()
    );

    let width = config.width as f64;
    let height = config.height as f64;
    let legend_height = if chart.series.len() > 1 { 24.0 } else { 0.0 };
    let (left, bottom) = match chart.kind {
        ChartKind::HorizontalBar => (180.0, 30.0),
        _ => (50.0, 70.0),
    };
    let frame = Frame {
        left,
        top: 40.0 + legend_height,
        width: (width - left - 40.0).max(10.0),
        height: (height - 40.0 - legend_height - bottom).max(10.0),
    };
    let max = scale_max(chart);

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        config.width, config.height, config.width, config.height
    ));
    svg.push_str(
        r#"<style>text { font: 12px sans-serif; fill: #334155; } .bar:hover { opacity: 0.8; }</style>"#,
    );
    svg.push_str(&format!(
        r#"<text x="{}" y="22" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape_xml(&chart.title)
    ));

    if chart.series.len() > 1 {
        render_legend(&mut svg, chart, 50.0);
    }

    match chart.kind {
        ChartKind::HorizontalBar => render_horizontal_bars(&mut svg, chart, frame, max),
        ChartKind::Line => {
            render_value_axis(&mut svg, frame, max);
            render_line(&mut svg, chart, frame, max);
            render_category_axis(&mut svg, chart, frame);
        }
        ChartKind::StackedBar | ChartKind::GroupedBar => {
            render_value_axis(&mut svg, frame, max);
            render_vertical_bars(&mut svg, chart, frame, max);
            render_category_axis(&mut svg, chart, frame);
        }
    }

    svg.push_str("</svg>");

    debug!("Chart '{}' rendered ({} bytes)", chart.title, svg.len());
    Ok(svg)
}

fn validate_chart(chart: &Chart) -> Result<(), ChartError> {
    if chart.labels.is_empty() || chart.series.is_empty() {
        return Err(ChartError::EmptyData(chart.title.clone()));
    }

    for series in &chart.series {
        if series.values.len() != chart.labels.len() {
            return Err(ChartError::SeriesLength {
                series: series.label.clone(),
                expected: chart.labels.len(),
                got: series.values.len(),
            });
        }
    }

    Ok(())
}

/// Top of the value axis; never zero
fn scale_max(chart: &Chart) -> f64 {
    let computed = match chart.kind {
        ChartKind::StackedBar => (0..chart.labels.len())
            .map(|i| chart.series.iter().map(|s| s.values[i].max(0.0)).sum::<f64>())
            .fold(0.0, f64::max),
        _ => chart
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max),
    };

    let max = chart.y_max.unwrap_or(computed);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

fn render_horizontal_bars(out: &mut String, chart: &Chart, frame: Frame, max: f64) {
    let series = &chart.series[0];
    let row_height = frame.height / chart.labels.len() as f64;
    let bar_height = row_height * 0.7;

    for (i, (label, value)) in chart.labels.iter().zip(&series.values).enumerate() {
        let y = frame.top + i as f64 * row_height + (row_height - bar_height) / 2.0;
        let w = (value.max(0.0) / max) * frame.width;

        out.push_str(&format!(
            r#"<rect class="bar" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{}: {}</title></rect>"#,
            frame.left,
            y,
            w,
            bar_height,
            series.color,
            escape_xml(label),
            format_value(*value)
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            frame.left - 6.0,
            y + bar_height / 2.0,
            escape_xml(&truncate_label(label, 26))
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" dominant-baseline="middle">{}</text>"#,
            frame.left + w + 4.0,
            y + bar_height / 2.0,
            format_value(*value)
        ));
    }
}

fn render_line(out: &mut String, chart: &Chart, frame: Frame, max: f64) {
    let step = frame.width / chart.labels.len() as f64;

    for series in &chart.series {
        let points: Vec<(f64, f64)> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                (
                    frame.left + (i as f64 + 0.5) * step,
                    frame.bottom() - (v.max(0.0) / max) * frame.height,
                )
            })
            .collect();

        let path: Vec<String> = points
            .iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .collect();

        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            out.push_str(&format!(
                r#"<polygon points="{:.2},{:.2} {} {:.2},{:.2}" fill="{}" fill-opacity="0.2"/>"#,
                first.0,
                frame.bottom(),
                path.join(" "),
                last.0,
                frame.bottom(),
                series.color
            ));
        }
        out.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
            path.join(" "),
            series.color
        ));
        for ((x, y), (label, value)) in points.iter().zip(chart.labels.iter().zip(&series.values)) {
            out.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="4" fill="{}"><title>{}: {}</title></circle>"#,
                x,
                y,
                OPERATIONS_COLOR,
                escape_xml(label),
                format_value(*value)
            ));
        }
    }
}

fn render_vertical_bars(out: &mut String, chart: &Chart, frame: Frame, max: f64) {
    let group_width = frame.width / chart.labels.len() as f64;
    let stacked = chart.kind == ChartKind::StackedBar;

    for (i, label) in chart.labels.iter().enumerate() {
        let group_x = frame.left + i as f64 * group_width;
        let mut stacked_base = 0.0;

        for (j, series) in chart.series.iter().enumerate() {
            let value = series.values[i].max(0.0);
            let h = (value / max).min(1.0) * frame.height;

            let (x, w, y) = if stacked {
                let w = group_width * 0.6;
                let base = (stacked_base / max) * frame.height;
                stacked_base += value;
                (group_x + group_width * 0.2, w, frame.bottom() - base - h)
            } else {
                let w = group_width * 0.8 / chart.series.len() as f64;
                (group_x + group_width * 0.1 + j as f64 * w, w, frame.bottom() - h)
            };

            out.push_str(&format!(
                r#"<rect class="bar" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{} / {}: {}</title></rect>"#,
                x,
                y,
                w,
                h,
                series.color,
                escape_xml(label),
                escape_xml(&series.label),
                format_value(series.values[i])
            ));
        }
    }
}

fn render_value_axis(out: &mut String, frame: Frame, max: f64) {
    for tick in 0..=4 {
        let value = max * tick as f64 / 4.0;
        let y = frame.bottom() - frame.height * tick as f64 / 4.0;
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}"/>"#,
            frame.left,
            y,
            frame.left + frame.width,
            y,
            GRID_COLOR
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end" dominant-baseline="middle" fill="{}">{}</text>"#,
            frame.left - 6.0,
            y,
            TICK_COLOR,
            format_value(value)
        ));
    }
}

fn render_category_axis(out: &mut String, chart: &Chart, frame: Frame) {
    let step = frame.width / chart.labels.len() as f64;
    let rotate = chart.labels.len() > 8;

    for (i, label) in chart.labels.iter().enumerate() {
        let x = frame.left + (i as f64 + 0.5) * step;
        let y = frame.bottom() + 16.0;
        let transform = if rotate {
            format!(r#" transform="rotate(-35 {:.2} {:.2})""#, x, y)
        } else {
            String::new()
        };
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="{}"{}>{}</text>"#,
            x,
            y,
            if rotate { "end" } else { "middle" },
            transform,
            escape_xml(&truncate_label(label, 24))
        ));
    }
}

fn render_legend(out: &mut String, chart: &Chart, y: f64) {
    let mut x = 50.0;
    for series in &chart.series {
        out.push_str(&format!(
            r#"<rect x="{:.2}" y="{:.2}" width="15" height="15" fill="{}" rx="2"/>"#,
            x,
            y - 12.0,
            series.color
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}">{}</text>"#,
            x + 20.0,
            y,
            escape_xml(&series.label)
        ));
        x += 40.0 + series.label.chars().count() as f64 * 7.0;
    }
}

/// Integers without decimals, everything else with two
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() > max_chars && max_chars > 3 {
        let head: String = label.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    } else {
        label.to_string()
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{MetricPoint, TechniqueRow};

    fn counts() -> Vec<CategoryCount> {
        vec![
            CategoryCount {
                category: "Lava Jato".to_string(),
                count: 5,
            },
            CategoryCount {
                category: "Zelotes & Co".to_string(),
                count: 2,
            },
        ]
    }

    #[test]
    fn test_render_operations_chart() {
        let svg = render_chart(&Chart::operations(&counts()), &ChartConfig::default()).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("Lava Jato"));
        assert!(svg.contains("Zelotes &amp; Co"));
        assert_eq!(svg.matches("<rect class=\"bar\"").count(), 2);
    }

    #[test]
    fn test_render_empty_chart_fails() {
        let chart = Chart::operations(&[]);
        assert!(matches!(
            render_chart(&chart, &ChartConfig::default()),
            Err(ChartError::EmptyData(_))
        ));
    }

    #[test]
    fn test_render_mismatched_series_fails() {
        let mut chart = Chart::operations(&counts());
        chart.series[0].values.pop();
        assert!(matches!(
            render_chart(&chart, &ChartConfig::default()),
            Err(ChartError::SeriesLength {
                expected: 2,
                got: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_yearly_chart_has_legend_and_stacks() {
        let mut years = BTreeMap::new();
        years.insert(
            2023,
            YearMultiplicity {
                single_count: 1,
                multiple_count: 0,
            },
        );
        years.insert(
            2024,
            YearMultiplicity {
                single_count: 0,
                multiple_count: 2,
            },
        );

        let chart = Chart::yearly(&years);
        assert_eq!(chart.labels, vec!["2023", "2024"]);
        assert_eq!(scale_max(&chart), 2.0);

        let svg = render_chart(&chart, &ChartConfig::default()).unwrap();
        assert!(svg.contains("Eventos com múltiplos vídeos"));
        assert_eq!(svg.matches("<rect class=\"bar\"").count(), 4);
    }

    #[test]
    fn test_monthly_chart_is_line() {
        let mut months = BTreeMap::new();
        months.insert("2024-01".to_string(), 3);
        months.insert("2024-02".to_string(), 1);

        let svg = render_chart(&Chart::monthly(&months), &ChartConfig::new().with_width(600)).unwrap();

        assert!(svg.contains("<polyline"));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(r#"width="600""#));
    }

    #[test]
    fn test_metric_charts_use_unit_scale() {
        let series = MetricSeries {
            metric: "pre".to_string(),
            label: "Precisão".to_string(),
            description: String::new(),
            points: vec![MetricPoint {
                technique: "HT".to_string(),
                value: 0.25,
            }],
        };
        assert_eq!(scale_max(&Chart::metric(&series)), 1.0);

        let matrix = ComparisonMatrix {
            metric: "rev".to_string(),
            scenarios: vec!["s1".to_string()],
            rows: vec![
                TechniqueRow {
                    technique: "HT".to_string(),
                    values: vec![0.5],
                },
                TechniqueRow {
                    technique: "HS".to_string(),
                    values: vec![0.0],
                },
            ],
        };
        let chart = Chart::comparison(&matrix, "Revocação por técnica e cenário");
        assert_eq!(chart.series[1].color, "#3b82f6");
        assert!(render_chart(&chart, &ChartConfig::default()).is_ok());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(0.126), "0.13");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("Operação muito longa", 10), "Operaçã...");
    }
}
