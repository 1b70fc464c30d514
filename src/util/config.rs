//! Runtime configuration read from the environment.

use std::{path::PathBuf, sync::OnceLock};

use directories::ProjectDirs;

/// Path to a company dataset that replaces the bundled one.
pub const DATASET_ENV: &str = "PANORAMA_DATASET";
/// Log filter directive, e.g. `debug` or `panorama_maritime=trace`.
pub const LOG_ENV: &str = "PANORAMA_LOG";
/// File name looked up in the config directory when no path is set.
pub const DATASET_FILENAME: &str = "companies.json";

const APP_QUALIFIER: &str = "dz";
const APP_ORG: &str = "PanoramaMaritime";
const APP_NAME: &str = "PanoramaMaritime";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub dataset_path: Option<PathBuf>,
    pub log_filter: Option<String>,
    /// Variables that were set but blank, reported once logging is up.
    pub ignored: Vec<&'static str>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut ignored = Vec::new();
        let mut read = |key: &'static str| match lookup(key) {
            Some(value) if value.trim().is_empty() => {
                ignored.push(key);
                None
            }
            Some(value) => Some(value.trim().to_string()),
            None => None,
        };

        let dataset_path = read(DATASET_ENV).map(PathBuf::from);
        let log_filter = read(LOG_ENV);

        Self {
            dataset_path,
            log_filter,
            ignored,
        }
    }

    /// Dataset file to load instead of the bundled one, if any.
    pub fn dataset_override(&self) -> Option<PathBuf> {
        self.dataset_path
            .clone()
            .or_else(|| config_dataset_file().filter(|path| path.is_file()))
    }
}

/// Process-wide configuration, read from the environment on first use.
pub fn app_config() -> &'static AppConfig {
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(AppConfig::from_env)
}

/// `companies.json` inside the platform config directory.
pub fn config_dataset_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(DATASET_FILENAME))
}
