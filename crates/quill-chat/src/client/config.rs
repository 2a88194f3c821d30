//! Editing service client configuration.

use std::time::Duration;

/// Editing service client configuration.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Base address without a trailing slash.
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Whole-request deadline for the health check only.
    pub health_timeout: Duration,
}

impl EditorConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            connect_timeout: Duration::from_secs(10),
            health_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_health_timeout(mut self, timeout: Duration) -> Self {
        self.health_timeout = timeout;
        self
    }

    /// Full URL for `path` under the base address.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
