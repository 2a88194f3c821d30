//! Capability interfaces for the side effects a session needs from its host.
//!
//! The session controller only talks to these traits, so front ends can
//! plug in the system clipboard, a download folder, or in-memory fakes.

use crate::PlatformError;

/// Platform clipboard.
pub trait ClipboardPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), PlatformError>;
    fn read_text(&self) -> Result<String, PlatformError>;
}

/// Saves a text blob under a suggested file name.
pub trait Exporter: Send + Sync {
    /// Returns a human-readable description of where the content went.
    fn save(&self, file_name: &str, content: &str) -> Result<String, PlatformError>;
}

/// Blocking yes/no gate shown before destructive actions.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
}

/// A file picked by the user, fully read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Lowercased extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        let file = UploadFile::new("Report.DOCX", vec![]);
        assert_eq!(file.extension().as_deref(), Some("docx"));
    }

    #[test]
    fn extension_missing() {
        assert_eq!(UploadFile::new("README", vec![]).extension(), None);
        assert_eq!(UploadFile::new(".bashrc", vec![]).extension(), None);
        assert_eq!(UploadFile::new("trailing.", vec![]).extension(), None);
    }
}
