use tracing_subscriber::EnvFilter;

use super::config::{AppConfig, LOG_ENV};

const DEFAULT_FILTER: &str = "info";

/// Installs the global `tracing` subscriber.
///
/// Filter precedence: `PANORAMA_LOG`, then `RUST_LOG`, then `info`.
pub fn init(config: &AppConfig) {
    let mut rejected = None;
    let filter = match config.log_filter.as_deref() {
        Some(directive) => match EnvFilter::try_new(directive) {
            Ok(filter) => Some(filter),
            Err(err) => {
                rejected = Some((directive.to_string(), err.to_string()));
                None
            }
        },
        None => None,
    }
    .or_else(|| EnvFilter::try_from_default_env().ok())
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    // A test harness or an embedding host may already own the subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    if let Some((directive, err)) = rejected {
        tracing::warn!(variable = LOG_ENV, %directive, %err, "invalid log filter ignored");
    }
    for variable in &config.ignored {
        tracing::warn!(variable, "blank environment variable ignored");
    }
}
