//! Controller struct, shared state, and read-side accessors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use quill_common::{ClipboardPort, ConfirmPrompt, Exporter, MessageId, SessionId};

use crate::transcript::Transcript;
use crate::{EditingService, Message};

use super::types::{CopyIndicator, SessionSettings, SessionSnapshot};

/// Mutable session state. Only touched while `SessionController::state` is
/// locked, and never across an `.await`.
#[derive(Debug, Default)]
pub(super) struct SessionState {
    pub(super) session_id: SessionId,
    pub(super) transcript: Transcript,
    pub(super) composing: String,
    pub(super) copied: Option<CopyIndicator>,
}

/// Owns one editing session and serializes its requests.
///
/// Share it behind an `Arc`; every intent takes `&self`.
pub struct SessionController {
    pub(super) service: Arc<dyn EditingService>,
    pub(super) clipboard: Arc<dyn ClipboardPort>,
    pub(super) exporter: Arc<dyn Exporter>,
    pub(super) confirm: Arc<dyn ConfirmPrompt>,
    pub(super) settings: SessionSettings,
    pub(super) state: Mutex<SessionState>,
    /// Set while a request is outstanding.
    pub(super) busy: AtomicBool,
}

impl SessionController {
    pub fn new(
        service: Arc<dyn EditingService>,
        clipboard: Arc<dyn ClipboardPort>,
        exporter: Arc<dyn Exporter>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            service,
            clipboard,
            exporter,
            confirm,
            settings: SessionSettings::default(),
            state: Mutex::new(SessionState::default()),
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_settings(mut self, settings: SessionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub(super) fn lock(&self) -> MutexGuard<'_, SessionState> {
        // A panic while holding the lock leaves plain data behind; keep going.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn session_id(&self) -> SessionId {
        self.lock().session_id
    }

    /// Owned view of the whole session for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        let busy = self.is_busy();
        let state = self.lock();
        SessionSnapshot {
            session_id: state.session_id,
            messages: state.transcript.messages().to_vec(),
            composing: state.composing.clone(),
            busy,
            copied: state
                .copied
                .and_then(|c| c.active_id(self.settings.copy_indicator)),
            tokens: state.transcript.token_summary(),
        }
    }

    pub fn composing_text(&self) -> String {
        self.lock().composing.clone()
    }

    /// Replace the compose buffer.
    pub fn set_composing(&self, text: impl Into<String>) {
        self.lock().composing = text.into();
    }

    /// Append to the compose buffer, separated by a newline when it already
    /// holds text.
    pub fn append_composing(&self, text: &str) {
        let mut state = self.lock();
        if !state.composing.is_empty() && !text.is_empty() {
            state.composing.push('\n');
        }
        state.composing.push_str(text);
    }

    pub fn message(&self, id: MessageId) -> Option<Message> {
        self.lock().transcript.get(id).cloned()
    }

    pub fn message_count(&self) -> usize {
        self.lock().transcript.len()
    }

    pub fn total_tokens(&self) -> u64 {
        self.lock().transcript.aggregate_tokens()
    }

    /// The message currently shown as copied, if the indicator window is
    /// still open.
    pub fn copied_id(&self) -> Option<MessageId> {
        self.lock()
            .copied
            .and_then(|c| c.active_id(self.settings.copy_indicator))
    }
}
