//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError` so the user sees all
//! of them at once.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::QuillConfig;
use quill_common::ConfigError;

use helpers::{validate_http_url, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &QuillConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_service(&mut errors, config);
    validate_session(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_service(errors: &mut Vec<String>, config: &QuillConfig) {
    // Empty is allowed and means "use the fallback address".
    if !config.service.base_url.trim().is_empty() {
        validate_http_url(errors, "service.base_url", config.service.base_url.trim());
    }
    validate_range(
        errors,
        "service.connect_timeout_secs",
        config.service.connect_timeout_secs,
        1,
        120,
    );
}

fn validate_session(errors: &mut Vec<String>, config: &QuillConfig) {
    validate_range(
        errors,
        "session.copy_indicator_ms",
        config.session.copy_indicator_ms,
        100,
        60_000,
    );
}
