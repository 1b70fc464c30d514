//! Company data provider: the bundled dataset, optionally replaced by a file.
//!
//! A dataset is parsed completely before it is handed to the core, so the
//! filter engine never observes a partially loaded collection.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;

use crate::domain::Company;
use crate::util::{assets, config::AppConfig};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("bundled dataset is missing from the build")]
    BundleMissing,
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset must be a JSON array of companies")]
    NotAnArray,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled dataset"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A record the provider supplied that does not fit the company shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadReport {
    pub source: DatasetSource,
    pub loaded: usize,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Clone, Debug)]
pub struct LoadedDataset {
    pub companies: Vec<Company>,
    pub report: LoadReport,
    /// Why a configured override was not used, if it failed.
    pub override_error: Option<String>,
}

/// Parses a JSON array of companies.
///
/// Malformed records (missing `name` or `headquarters`, wrong types) are
/// left out of the collection and listed in the report.
pub fn parse_companies(json: &str, source: DatasetSource) -> Result<LoadedDataset, DatasetError> {
    let Value::Array(records) = serde_json::from_str::<Value>(json)? else {
        return Err(DatasetError::NotAnArray);
    };

    let mut companies = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Company>(record) {
            Ok(company) => companies.push(company),
            Err(err) => {
                tracing::warn!(%source, index, %err, "skipping malformed company record");
                skipped.push(SkippedRecord {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    let report = LoadReport {
        source,
        loaded: companies.len(),
        skipped,
    };
    Ok(LoadedDataset {
        companies,
        report,
        override_error: None,
    })
}

pub fn load_bundled() -> Result<LoadedDataset, DatasetError> {
    let json = assets::bundled_dataset().ok_or(DatasetError::BundleMissing)?;
    parse_companies(&json, DatasetSource::Bundled)
}

pub fn load_file(path: &Path) -> Result<LoadedDataset, DatasetError> {
    let json = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_companies(&json, DatasetSource::File(path.to_path_buf()))
}

/// Loads the override named by `config` if any, falling back to the bundled
/// dataset when the override cannot be used.
pub fn load_dataset(config: &AppConfig) -> Result<LoadedDataset, DatasetError> {
    let Some(path) = config.dataset_override() else {
        return load_bundled().inspect(log_loaded);
    };

    match load_file(&path) {
        Ok(dataset) => {
            log_loaded(&dataset);
            Ok(dataset)
        }
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "dataset override unusable, using bundled dataset");
            let mut dataset = load_bundled()?;
            dataset.override_error = Some(err.to_string());
            log_loaded(&dataset);
            Ok(dataset)
        }
    }
}

fn log_loaded(dataset: &LoadedDataset) {
    tracing::info!(
        source = %dataset.report.source,
        loaded = dataset.report.loaded,
        skipped = dataset.report.skipped.len(),
        "company dataset loaded"
    );
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_well_formed_records_in_order() {
        let json = r#"[
            {"name": "EPAL", "description": "Port d'Alger", "sectors": ["Port"], "headquarters": "Alger", "website": "https://example.dz"},
            {"name": "EPO", "sectors": ["Port"], "headquarters": "Oran"}
        ]"#;
        let dataset = parse_companies(json, DatasetSource::Bundled).unwrap();
        let names: Vec<&str> = dataset.companies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["EPAL", "EPO"]);
        assert_eq!(dataset.companies[1].website, None);
        assert_eq!(dataset.report.loaded, 2);
        assert!(dataset.report.skipped.is_empty());
    }

    #[test]
    fn malformed_records_are_skipped_and_reported() {
        let json = r#"[
            {"name": "Sans siège"},
            {"name": "EPB", "headquarters": "Béjaïa"},
            {"name": 42, "headquarters": "Oran"}
        ]"#;
        let dataset = parse_companies(json, DatasetSource::Bundled).unwrap();
        assert_eq!(dataset.companies.len(), 1);
        let indices: Vec<usize> = dataset.report.skipped.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn non_array_document_is_rejected() {
        let err = parse_companies(r#"{"name": "EPAL"}"#, DatasetSource::Bundled).unwrap_err();
        assert!(matches!(err, DatasetError::NotAnArray));

        let err = parse_companies("not json", DatasetSource::Bundled).unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn bundled_dataset_loads_cleanly() {
        let dataset = load_bundled().unwrap();
        assert!(!dataset.companies.is_empty());
        assert!(dataset.report.skipped.is_empty());
        assert_eq!(dataset.report.source, DatasetSource::Bundled);
    }

    #[test]
    fn override_file_replaces_bundled_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Solo", "headquarters": "Skikda"}}]"#).unwrap();

        let config = AppConfig {
            dataset_path: Some(file.path().to_path_buf()),
            ..AppConfig::default()
        };
        let dataset = load_dataset(&config).unwrap();
        assert_eq!(dataset.companies.len(), 1);
        assert_eq!(dataset.report.source, DatasetSource::File(file.path().to_path_buf()));
        assert_eq!(dataset.override_error, None);
    }

    #[test]
    fn broken_override_falls_back_to_bundled() {
        let config = AppConfig {
            dataset_path: Some(PathBuf::from("/nonexistent/companies.json")),
            ..AppConfig::default()
        };
        let dataset = load_dataset(&config).unwrap();
        assert_eq!(dataset.report.source, DatasetSource::Bundled);
        assert!(dataset.override_error.is_some());
    }
}
