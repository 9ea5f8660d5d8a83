//! Telemetry configuration and constants.
//!
//! A Lambda function has no configuration file: everything it needs beyond the
//! ambient AWS environment (credentials, region) is read from environment
//! variables at cold start. This module defines the defaults and the small
//! config struct that drives tracing initialization in `main`.

use std::env;

/// Name of the event field carrying the target group ARN.
pub const TARGET_FIELD: &str = "target";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "tg_health=info,lambda_runtime=info,aws_config=warn";

/// Default log format (text or json). CloudWatch ingests structured JSON.
pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Json;

/// Environment variable selecting the log format ("text" or "json")
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output, useful when invoking locally
    Text,
    /// Structured JSON for CloudWatch
    Json,
}

impl LogFormat {
    /// Parse a format name, falling back to the default for unknown values.
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            _ => DEFAULT_LOG_FORMAT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        }
    }
}

/// Telemetry settings resolved once at cold start.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Tracing filter directive, priority: RUST_LOG > default
    pub log_filter: String,
    /// Output format, priority: LOG_FORMAT > default
    pub format: LogFormat,
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());
        let format = env::var(LOG_FORMAT_ENV)
            .map(|v| LogFormat::parse(&v))
            .unwrap_or(DEFAULT_LOG_FORMAT);

        Self { log_filter, format }
    }
}
