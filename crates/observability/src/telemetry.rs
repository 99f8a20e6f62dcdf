//! Tracing subscriber initialization.
//!
//! Composes an `EnvFilter`, an optional stderr `fmt` layer and the log-sink
//! layer on a single registry.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::log_sink_layer::log_sink_layer;

/// Build the filter from the configured level, falling back to `RUST_LOG`, then `info`.
pub fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    match config.log_level.as_deref() {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| ObservabilityError::Config(format!("invalid log level {level:?}: {e}"))),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))),
    }
}

/// Install the global subscriber for this process.
///
/// Fails with [ObservabilityError::InitFailed] if a global subscriber is already set.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let filter = env_filter(&config)?;

    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let sink_layer = log_sink_layer(config.log_sink.clone());

    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .with(sink_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(service.name = %config.service_name, "Tracing initialized");
    Ok(())
}

/// Initialize with configuration from environment variables
pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_from_explicit_level() {
        let config = ObservabilityConfig::default().with_log_level("browser_eval=debug,warn");
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn filter_rejects_garbage() {
        let config = ObservabilityConfig::default().with_log_level("browser_eval=loudest");
        let err = env_filter(&config).unwrap_err();
        assert!(matches!(err, ObservabilityError::Config(_)));
    }
}
