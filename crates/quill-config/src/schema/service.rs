//! Editing service connection settings.

use serde::{Deserialize, Serialize};

/// Address used when neither the environment nor the config names one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Environment variable that overrides `service.base_url`.
pub const BASE_URL_ENV: &str = "QUILL_API_URL";

/// Remote editing service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    /// TCP connect timeout in seconds (valid range: 1-120). Requests
    /// themselves have no overall deadline.
    pub connect_timeout_secs: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            connect_timeout_secs: 10,
        }
    }
}

impl ServiceConfig {
    /// Resolve the base URL: `QUILL_API_URL`, then the configured value,
    /// then [`DEFAULT_BASE_URL`]. Trailing slashes are trimmed.
    pub fn resolved_base_url(&self) -> String {
        let from_env = std::env::var(BASE_URL_ENV).ok();
        resolve_base_url(from_env.as_deref(), &self.base_url)
    }
}

pub(crate) fn resolve_base_url(from_env: Option<&str>, configured: &str) -> String {
    let chosen = [from_env, Some(configured)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);
    chosen.trim_end_matches('/').to_string()
}
