//! Fetch JSON datasets from a local directory or an HTTP(S) data root.

use super::catalog::DatasetEntry;
use crate::parser::record::{EventRecord, MetricRecord};
use crate::utils::config::{DEFAULT_FETCH_TIMEOUT, METRICS_FILE};
use crate::utils::error::{ConfigError, LoadError};
use log::{debug, info};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::thread;

/// Where datasets are read from
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Directory on disk
    Local(PathBuf),

    /// Base URL served over HTTP(S)
    Remote { client: Client, base_url: String },
}

impl DataSource {
    /// Build a source from a data root
    ///
    /// Roots starting with `http://` or `https://` are fetched over HTTP;
    /// anything else is a local directory.
    pub fn from_root(root: &str) -> Result<Self, ConfigError> {
        let root = root.trim();
        if root.is_empty() {
            return Err(ConfigError::InvalidDataRoot("data root is empty".to_string()));
        }

        if root.starts_with("http://") || root.starts_with("https://") {
            let client = Client::builder()
                .timeout(DEFAULT_FETCH_TIMEOUT)
                .build()
                .map_err(|e| ConfigError::InvalidDataRoot(e.to_string()))?;

            Ok(DataSource::Remote {
                client,
                base_url: root.trim_end_matches('/').to_string(),
            })
        } else {
            Ok(DataSource::Local(PathBuf::from(root)))
        }
    }

    /// Human-readable location of a resource
    pub fn locate(&self, relative: &str) -> String {
        match self {
            DataSource::Local(dir) => dir.join(relative).display().to_string(),
            DataSource::Remote { base_url, .. } => format!("{}/{}", base_url, relative),
        }
    }

    /// Fetch and deserialize one JSON resource
    ///
    /// # Errors
    /// * `LoadError::Io` / `LoadError::Request` - resource unreachable
    /// * `LoadError::HttpStatus` - non-success HTTP response
    /// * `LoadError::Parse` - malformed JSON
    pub fn fetch_json<T: DeserializeOwned>(&self, relative: &str) -> Result<T, LoadError> {
        let location = self.locate(relative);
        debug!("Fetching {}", location);

        match self {
            DataSource::Local(_) => {
                let file = File::open(&location).map_err(|source| LoadError::Io {
                    path: location.clone(),
                    source,
                })?;
                Ok(serde_json::from_reader(BufReader::new(file))?)
            }
            DataSource::Remote { client, .. } => {
                let response = client.get(&location).send()?;

                if !response.status().is_success() {
                    return Err(LoadError::HttpStatus {
                        status: response.status().as_u16(),
                        url: location,
                    });
                }

                let body = response.bytes()?;
                Ok(serde_json::from_slice(&body)?)
            }
        }
    }
}

/// Load the event dataset for a catalog entry
pub fn load_events(source: &DataSource, entry: &DatasetEntry) -> Result<Vec<EventRecord>, LoadError> {
    let records: Vec<EventRecord> = source.fetch_json(entry.file)?;
    info!("Loaded {} event records from {}", records.len(), entry.file);
    Ok(records)
}

/// Load the metrics comparison dataset
pub fn load_metrics(source: &DataSource) -> Result<Vec<MetricRecord>, LoadError> {
    let metrics: Vec<MetricRecord> = source.fetch_json(METRICS_FILE)?;
    info!("Loaded {} metric records", metrics.len());
    Ok(metrics)
}

/// Outcome of the two independent dataset loads
#[derive(Debug)]
pub struct LoadResults {
    pub events: Result<Vec<EventRecord>, LoadError>,
    pub metrics: Result<Vec<MetricRecord>, LoadError>,
}

/// Issue both loads at once and wait for both
///
/// The loads race; neither result depends on the other, and a failure in
/// one leaves the other untouched.
pub fn load_both(source: &DataSource, entry: &DatasetEntry) -> LoadResults {
    thread::scope(|scope| {
        let events = scope.spawn(|| load_events(source, entry));
        let metrics = scope.spawn(|| load_metrics(source));

        LoadResults {
            events: events
                .join()
                .unwrap_or(Err(LoadError::Interrupted("event dataset"))),
            metrics: metrics
                .join()
                .unwrap_or(Err(LoadError::Interrupted("metrics dataset"))),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_root_local_and_remote() {
        assert!(matches!(DataSource::from_root("data").unwrap(), DataSource::Local(_)));

        let remote = DataSource::from_root("https://example.org/data/").unwrap();
        assert_eq!(
            remote.locate("metrics_comparison.json"),
            "https://example.org/data/metrics_comparison.json"
        );
    }

    #[test]
    fn test_from_root_empty() {
        assert!(DataSource::from_root("  ").is_err());
    }

    #[test]
    fn test_fetch_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DataSource::Local(dir.path().to_path_buf());

        let result: Result<Vec<EventRecord>, LoadError> = source.fetch_json("missing.json");

        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_fetch_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "[{\"operation\": ").unwrap();
        let source = DataSource::Local(dir.path().to_path_buf());

        let result: Result<Vec<EventRecord>, LoadError> = source.fetch_json("broken.json");

        assert!(matches!(result, Err(LoadError::Parse(_))));
    }
}
