use std::sync::Mutex;

use quill_common::{ClipboardPort, PlatformError};

/// Cross-platform clipboard abstraction backed by `arboard`.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Creates a new clipboard handle.
    pub fn new() -> Result<Self, PlatformError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Reads text from the system clipboard.
    pub fn get_text(&mut self) -> Result<String, PlatformError> {
        self.inner
            .get_text()
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }

    /// Writes text to the system clipboard.
    pub fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}

/// [`ClipboardPort`] over the system clipboard. A handle is opened per call,
/// so a clipboard that is unavailable at startup can still work later.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardPort for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), PlatformError> {
        Clipboard::new()?.set_text(text)
    }

    fn read_text(&self) -> Result<String, PlatformError> {
        Clipboard::new()?.get_text()
    }
}

/// Process-local clipboard for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(Some(text.into())),
        }
    }
}

impl ClipboardPort for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), PlatformError> {
        let mut slot = self.text.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(text.to_owned());
        Ok(())
    }

    fn read_text(&self) -> Result<String, PlatformError> {
        self.text
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .ok_or_else(|| PlatformError::ClipboardError("clipboard is empty".into()))
    }
}
