//! Attachment export settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where exported replies are written.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Target directory. Empty means the user's download directory.
    pub directory: String,
}

impl ExportConfig {
    /// The configured directory, if one is set.
    pub fn directory(&self) -> Option<PathBuf> {
        let dir = self.directory.trim();
        if dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(dir))
        }
    }
}
