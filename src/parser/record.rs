//! Input record types for the event and metrics datasets.
//!
//! Fields are optional and read leniently: a record with a missing or
//! mistyped field is still loaded, and each aggregation decides whether
//! to skip it.

use super::dates::parse_posting_date;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// One observed event (a posted video or news item)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Category / grouping key
    #[serde(default, deserialize_with = "lenient_string")]
    pub operation: Option<String>,

    /// Posting date as found in the dataset
    #[serde(
        default,
        rename = "data_postagem",
        deserialize_with = "lenient_string"
    )]
    pub posted_at: Option<String>,
}

impl EventRecord {
    pub fn new(operation: Option<&str>, posted_at: Option<&str>) -> Self {
        Self {
            operation: operation.map(str::to_string),
            posted_at: posted_at.map(str::to_string),
        }
    }

    /// Operation name, `None` when absent or empty
    pub fn category(&self) -> Option<&str> {
        self.operation.as_deref().filter(|op| !op.is_empty())
    }

    /// Parsed posting date, `None` when absent or unparseable
    pub fn posted_date(&self) -> Option<NaiveDateTime> {
        self.posted_at.as_deref().and_then(parse_posting_date)
    }
}

/// One (scenario, technique) precision/recall measurement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(default, rename = "cenario", deserialize_with = "lenient_string_or_empty")]
    pub scenario: String,

    #[serde(default, rename = "tecnica", deserialize_with = "lenient_string_or_empty")]
    pub technique: String,

    #[serde(default, rename = "pre", deserialize_with = "lenient_number")]
    pub precision: Option<f64>,

    #[serde(default, rename = "rev", deserialize_with = "lenient_number")]
    pub recall: Option<f64>,
}

/// Which value of a metric record a chart shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MetricSelector {
    #[default]
    Precision,
    Recall,
    /// Unrecognized key; selects 0 for every record
    Unknown(String),
}

impl MetricSelector {
    /// Dataset key (`pre`, `rev` or the unrecognized key itself)
    pub fn key(&self) -> &str {
        match self {
            MetricSelector::Precision => "pre",
            MetricSelector::Recall => "rev",
            MetricSelector::Unknown(key) => key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MetricSelector::Precision => "Precisão",
            MetricSelector::Recall => "Revocação",
            MetricSelector::Unknown(key) => key,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MetricSelector::Precision => {
                "A precisão mede quantas vezes o modelo acertou entre todas as vezes que tentou acertar."
            }
            MetricSelector::Recall => {
                "A revocação mede quantas vezes o modelo encontrou o que deveria encontrar."
            }
            MetricSelector::Unknown(_) => "",
        }
    }

    /// Value of this metric on a record; 0 when missing or unknown
    pub fn select(&self, record: &MetricRecord) -> f64 {
        match self {
            MetricSelector::Precision => record.precision.unwrap_or(0.0),
            MetricSelector::Recall => record.recall.unwrap_or(0.0),
            MetricSelector::Unknown(_) => 0.0,
        }
    }
}

impl From<&str> for MetricSelector {
    fn from(key: &str) -> Self {
        match key {
            "pre" => MetricSelector::Precision,
            "rev" => MetricSelector::Recall,
            other => MetricSelector::Unknown(other.to_string()),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
