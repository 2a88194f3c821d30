//! Quill configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use quill_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    ExportConfig, Language, LogLevel, LoggingConfig, QuillConfig, ServiceConfig, SessionConfig,
    CONFIG_SCHEMA_VERSION, DEFAULT_BASE_URL,
};

use std::path::Path;

use quill_common::ConfigError;

/// Load config from `path` when given, otherwise from the platform default
/// location (creating it on first run).
///
/// An explicit path that does not exist is an error; the default location
/// never is.
pub fn load_config(path: Option<&Path>) -> Result<QuillConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &QuillConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&QuillConfig::default());
        assert!(json.contains("\"service\""));
        assert!(json.contains("\"session\""));
        assert!(json.contains("\"export\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"ar\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config(Some(Path::new("/tmp/quill_missing_dir/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&QuillConfig::default());
        let parsed: QuillConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.service.base_url, DEFAULT_BASE_URL);
        assert_eq!(parsed.session.copy_indicator_ms, 2000);
    }
}
