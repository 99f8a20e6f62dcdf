//! Browser-eval observability - tracing setup shared by the card crates
//!
//! # Quick Start
//!
//! ```no_run
//! use browser_eval_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("browser-eval-card").with_log_level("debug");
//! init(config)?;
//!
//! tracing::info!("card preview started");
//! # Ok::<(), browser_eval_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `BROWSER_EVAL_SERVICE_NAME` - Service name
//! - `BROWSER_EVAL_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod log_sink_layer;
pub mod spans;
pub mod telemetry;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use log_sink_layer::{log_sink_layer, LogSinkLayer};
pub use telemetry::{init, init_from_env};

#[doc(hidden)]
pub use tracing;
