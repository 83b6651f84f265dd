//! # Roster Telemetry
//!
//! Structured logging for Roster components, built on `tracing`.
//!
//! Every binary calls [`init_logging`] once at startup; library crates only
//! emit events through the `tracing` macros.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logging;

pub use logging::init_logging;

/// Configuration for logging.
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event.
    pub service_name: String,
    /// Log level or filter directive.
    pub log_level: String,
    /// Enable JSON logging.
    pub json_logs: bool,
}

impl TelemetryConfig {
    /// Creates a new telemetry configuration.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Sets the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enables JSON logging.
    #[must_use]
    pub fn with_json_logs(mut self) -> Self {
        self.json_logs = true;
        self
    }
}
