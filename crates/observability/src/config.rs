//! Configuration for logging

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Sink for formatted log lines (e.g. a diagnostics pane). Called from the tracing layer; must not block.
pub type LogSink = Arc<dyn Fn(String) + Send + Sync>;

const DEFAULT_SERVICE_NAME: &str = "browser-eval";

/// Observability configuration
#[derive(Clone)]
pub struct ObservabilityConfig {
    /// Service name recorded on startup (e.g., "browser-eval-card")
    pub service_name: String,

    /// Log level filter (e.g., "info", "debug", "browser_eval=trace")
    /// Defaults to "info" if not set
    pub log_level: Option<String>,

    /// Write formatted events to stderr
    pub enable_console: bool,

    /// Optional sink for each formatted log line. Not serialized.
    pub log_sink: Option<LogSink>,
}

// Arc<dyn Fn> has no serde support; log_sink is skipped both ways.
impl Serialize for ObservabilityConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("ObservabilityConfig", 3)?;
        s.serialize_field("service_name", &self.service_name)?;
        s.serialize_field("log_level", &self.log_level)?;
        s.serialize_field("enable_console", &self.enable_console)?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for ObservabilityConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ObservabilityConfigDe {
            #[serde(default = "default_service_name")]
            service_name: String,
            log_level: Option<String>,
            #[serde(default = "default_console")]
            enable_console: bool,
        }
        fn default_service_name() -> String {
            DEFAULT_SERVICE_NAME.to_string()
        }
        fn default_console() -> bool {
            true
        }
        let de = ObservabilityConfigDe::deserialize(deserializer)?;
        Ok(ObservabilityConfig {
            service_name: de.service_name,
            log_level: de.log_level,
            enable_console: de.enable_console,
            log_sink: None,
        })
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: None,
            enable_console: true,
            log_sink: None,
        }
    }
}

impl std::fmt::Debug for ObservabilityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservabilityConfig")
            .field("service_name", &self.service_name)
            .field("log_level", &self.log_level)
            .field("enable_console", &self.enable_console)
            .field("log_sink", &self.log_sink.as_ref().map(|_| "Some(LogSink)"))
            .finish()
    }
}

impl ObservabilityConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Forward each formatted event to `sink`.
    pub fn with_log_sink(mut self, sink: LogSink) -> Self {
        self.log_sink = Some(sink);
        self
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `BROWSER_EVAL_SERVICE_NAME` → service_name
    /// - `BROWSER_EVAL_LOG` or `RUST_LOG` → log_level
    pub fn from_env() -> Self {
        let service_name = std::env::var("BROWSER_EVAL_SERVICE_NAME")
            .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string());

        let log_level = std::env::var("BROWSER_EVAL_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .filter(|l| !l.trim().is_empty());

        Self {
            service_name,
            log_level,
            enable_console: true,
            log_sink: None,
        }
    }
}
