//! Text submission and document upload.

use quill_common::{new_correlation_id, SessionId, UploadFile};
use tracing::{debug, info, warn};

use crate::{EditReply, Message, ServiceError};

use super::manager::SessionController;
use super::types::{BusyGuard, RejectReason, SubmitOutcome};

#[derive(Debug, Clone, Copy)]
enum RequestKind {
    Text,
    Upload,
}

impl SessionController {
    /// Submit the current compose buffer.
    ///
    /// The buffer is taken and the user turn appended under one lock, so text
    /// pasted or appended afterwards stays in the buffer for the next submit.
    pub async fn submit(&self) -> SubmitOutcome {
        self.send_text(None).await
    }

    /// Send `text` to the editing service and append both turns. The compose
    /// buffer is cleared.
    ///
    /// Blank text or a request already in flight leaves everything unchanged.
    pub async fn submit_text(&self, text: &str) -> SubmitOutcome {
        self.send_text(Some(text)).await
    }

    async fn send_text(&self, given: Option<&str>) -> SubmitOutcome {
        if given.is_some_and(|text| text.trim().is_empty()) {
            return SubmitOutcome::Rejected(RejectReason::EmptyText);
        }
        let _guard = match BusyGuard::acquire(&self.busy) {
            Ok(guard) => guard,
            Err(reason) => {
                debug!("submit ignored: request in flight");
                return SubmitOutcome::Rejected(reason);
            }
        };

        let (text, session_id) = {
            let mut state = self.lock();
            let text = match given {
                Some(text) => {
                    state.composing.clear();
                    text.to_string()
                }
                None if state.composing.trim().is_empty() => {
                    return SubmitOutcome::Rejected(RejectReason::EmptyText);
                }
                None => std::mem::take(&mut state.composing),
            };
            state.transcript.append(Message::user(text.clone()));
            (text, state.session_id)
        };

        let request_id = new_correlation_id();
        info!(request_id = %request_id, chars = text.chars().count(), "Submitting text");
        let result = self.service.submit_text(&text).await;
        self.finish_turn(session_id, &request_id, RequestKind::Text, result)
    }

    /// Upload a picked file. `None` means the picker was dismissed.
    pub async fn attach(&self, file: Option<UploadFile>) -> SubmitOutcome {
        match file {
            Some(file) => self.submit_file(&file).await,
            None => SubmitOutcome::Rejected(RejectReason::NoFile),
        }
    }

    /// Upload `file` for editing. The file type is not checked here; the
    /// service decides what it accepts.
    pub async fn submit_file(&self, file: &UploadFile) -> SubmitOutcome {
        let _guard = match BusyGuard::acquire(&self.busy) {
            Ok(guard) => guard,
            Err(reason) => {
                debug!("upload ignored: request in flight");
                return SubmitOutcome::Rejected(reason);
            }
        };

        let session_id = {
            let mut state = self.lock();
            let placeholder = self.settings.text.analyzing_file(&file.name);
            state.transcript.append(Message::user(placeholder));
            state.session_id
        };

        let request_id = new_correlation_id();
        info!(
            request_id = %request_id,
            file = %file.name,
            bytes = file.bytes.len(),
            "Uploading file"
        );
        let result = self.service.submit_file(file).await;
        self.finish_turn(session_id, &request_id, RequestKind::Upload, result)
    }

    fn finish_turn(
        &self,
        issued_under: SessionId,
        request_id: &str,
        kind: RequestKind,
        result: Result<EditReply, ServiceError>,
    ) -> SubmitOutcome {
        let message = match result {
            Ok(reply) => {
                debug!(
                    request_id = %request_id,
                    status = reply.status.as_deref().unwrap_or("-"),
                    original_chars = reply.original_text.as_ref().map(|t| t.chars().count()),
                    "Reply received"
                );
                Message::reply(reply)
            }
            Err(e) => {
                warn!(request_id = %request_id, kind = ?e.kind(), error = %e, "Request failed");
                let content = self.settings.text.failure(&self.failure_text(kind, &e));
                Message::failure(content, e.kind())
            }
        };

        let mut state = self.lock();
        if state.session_id != issued_under {
            info!(request_id = %request_id, "Session was reset; dropping reply");
            return SubmitOutcome::Discarded;
        }

        let reply_id = message.id;
        let outcome = match message.failure {
            Some(kind) => SubmitOutcome::Failed { reply_id, kind },
            None => SubmitOutcome::Completed { reply_id },
        };
        state.transcript.append(message);
        outcome
    }

    fn failure_text(&self, kind: RequestKind, error: &ServiceError) -> String {
        if self.settings.detailed_errors {
            return error.to_string();
        }
        match error {
            ServiceError::Network(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => match kind {
                RequestKind::Text => self.settings.text.text_failure_fallback.to_string(),
                RequestKind::Upload => self.settings.text.upload_failure_fallback.to_string(),
            },
        }
    }
}
