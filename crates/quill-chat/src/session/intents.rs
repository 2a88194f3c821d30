//! Clipboard, export, and reset intents. None of these touch `busy`.

use std::time::Instant;

use quill_common::{MessageId, SessionId};
use tracing::{info, warn};

use super::manager::SessionController;
use super::types::{ClipboardOutcome, CopyIndicator, ExportOutcome, ResetOutcome};

/// File name used when exporting message `id`.
pub(crate) fn export_file_name(id: MessageId) -> String {
    format!("quill_output_{id}.txt")
}

impl SessionController {
    /// Copy a message's content to the clipboard and light the copy indicator.
    pub fn copy(&self, id: MessageId) -> ClipboardOutcome {
        let Some(message) = self.message(id) else {
            return ClipboardOutcome::UnknownMessage(id);
        };
        match self.clipboard.write_text(&message.content) {
            Ok(()) => {
                self.lock().copied = Some(CopyIndicator {
                    id,
                    at: Instant::now(),
                });
                ClipboardOutcome::Copied(id)
            }
            Err(e) => {
                warn!(message_id = %id, error = %e, "Failed to copy");
                ClipboardOutcome::Failed(e.to_string())
            }
        }
    }

    /// Append the clipboard text to the compose buffer as-is.
    pub fn paste(&self) -> ClipboardOutcome {
        match self.clipboard.read_text() {
            Ok(text) => {
                let chars = text.chars().count();
                self.lock().composing.push_str(&text);
                ClipboardOutcome::Pasted { chars }
            }
            Err(e) => {
                warn!(error = %e, "Failed to paste");
                ClipboardOutcome::Failed(e.to_string())
            }
        }
    }

    /// Save a message's content as a plain text file.
    pub fn export(&self, id: MessageId) -> ExportOutcome {
        let Some(message) = self.message(id) else {
            return ExportOutcome::UnknownMessage(id);
        };
        match self.exporter.save(&export_file_name(id), &message.content) {
            Ok(location) => ExportOutcome::Saved(location),
            Err(e) => {
                warn!(message_id = %id, error = %e, "Failed to export");
                ExportOutcome::Failed(e.to_string())
            }
        }
    }

    /// Ask for confirmation, then clear the session.
    ///
    /// The busy flag is left alone: an outstanding request still holds it and
    /// its reply is dropped because the session id changed.
    pub fn new_session(&self) -> ResetOutcome {
        if !self.confirm.confirm(self.settings.text.confirm_new_session) {
            return ResetOutcome::Cancelled;
        }

        let mut state = self.lock();
        state.transcript.reset();
        state.composing.clear();
        state.copied = None;
        state.session_id = SessionId::new();
        info!(session_id = %state.session_id, "Started new session");
        ResetOutcome::Reset
    }
}
