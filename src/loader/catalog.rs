//! Fixed lookup table of the six event datasets.
//!
//! Two transcription variants (without / with transcription) times three
//! time scopes (all events, sparse pre-2024 events, high-repercussion events
//! from 2024 on).

use crate::utils::error::ConfigError;

/// One selectable event dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetEntry {
    /// Selector passed on the command line
    pub key: &'static str,

    /// Display title; also the scenario label in the metrics dataset
    pub title: &'static str,

    /// File path relative to the data root
    pub file: &'static str,
}

pub const DATASETS: &[DatasetEntry] = &[
    DatasetEntry {
        key: "todos_sem",
        title: "Todos eventos (sem transcrição)",
        file: "no_transcription/videos_operations_combined.json",
    },
    DatasetEntry {
        key: "esparsos_sem",
        title: "Eventos esparsos (sem transcrição)",
        file: "no_transcription/videos_pre_2024.json",
    },
    DatasetEntry {
        key: "alta_sem",
        title: "Alta repercussão (sem transcrição)",
        file: "no_transcription/videos_2024_onwards.json",
    },
    DatasetEntry {
        key: "todos_com",
        title: "Todos eventos (com transcrição)",
        file: "transcription/videos_operations_combined.json",
    },
    DatasetEntry {
        key: "esparsos_com",
        title: "Eventos esparsos (com transcrição)",
        file: "transcription/videos_pre_2024.json",
    },
    DatasetEntry {
        key: "alta_com",
        title: "Alta repercussão (com transcrição)",
        file: "transcription/videos_2024_onwards.json",
    },
];

/// Resolve a dataset selector
///
/// # Errors
/// * `ConfigError::UnknownDataset` - key is not in the table (exact match)
pub fn find_dataset(key: &str) -> Result<&'static DatasetEntry, ConfigError> {
    DATASETS
        .iter()
        .find(|entry| entry.key == key)
        .ok_or_else(|| ConfigError::UnknownDataset(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_dataset() {
        let entry = find_dataset("alta_com").unwrap();
        assert_eq!(entry.file, "transcription/videos_2024_onwards.json");
        assert_eq!(entry.title, "Alta repercussão (com transcrição)");
    }

    #[test]
    fn test_find_dataset_unknown() {
        assert!(matches!(
            find_dataset("todos"),
            Err(ConfigError::UnknownDataset(key)) if key == "todos"
        ));
        assert!(find_dataset("TODOS_SEM").is_err());
        assert!(find_dataset("").is_err());
    }

    #[test]
    fn test_catalog_keys_unique() {
        assert_eq!(DATASETS.len(), 6);
        for (i, a) in DATASETS.iter().enumerate() {
            for b in &DATASETS[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.file, b.file);
            }
        }
    }
}
