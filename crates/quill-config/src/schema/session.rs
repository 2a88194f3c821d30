//! Session behavior settings: language, copy indicator, error rendering.

use serde::{Deserialize, Serialize};

/// Language of user-facing strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Self::Ar),
            "en" | "english" => Ok(Self::En),
            other => Err(format!("unknown language '{other}' (expected ar or en)")),
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub language: Language,
    /// How long the "copied" marker stays on a message, in milliseconds
    /// (valid range: 100-60000).
    pub copy_indicator_ms: u32,
    /// Render the full failure text in error bubbles instead of the
    /// localized fallback.
    pub detailed_errors: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: Language::Ar,
            copy_indicator_ms: 2000,
            detailed_errors: false,
        }
    }
}
