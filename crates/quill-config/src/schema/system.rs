//! System configuration types: logging.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` filter directive for the quill crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "quill=trace",
            LogLevel::Debug => "quill=debug",
            LogLevel::Info => "quill=info",
            LogLevel::Warn => "quill=warn",
            LogLevel::Error => "quill=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
