//! Conversation engine for Quill.
//!
//! Provides the editing-service client and the single-session manager:
//! - Transcript store with derived token accounting
//! - Text submission and document upload with a single-flight busy flag
//! - Clipboard, export, and reset intents over injected ports
//! - Localized user-facing strings

pub mod client;
pub mod session;
pub mod strings;
pub mod transcript;

use async_trait::async_trait;
use quill_common::{MessageId, UploadFile};
use serde::{Deserialize, Serialize};

pub use client::{EditorClient, EditorConfig, ServiceStatus};
pub use session::{
    ClipboardOutcome, ExportOutcome, RejectReason, ResetOutcome, SessionController,
    SessionSettings, SessionSnapshot, SubmitOutcome,
};
pub use strings::UiText;
pub use transcript::{TokenSummary, Transcript};

/// The remote editing service as seen by the session.
///
/// Both calls are single-shot: one request, one complete reply.
#[async_trait]
pub trait EditingService: Send + Sync {
    async fn submit_text(&self, text: &str) -> Result<EditReply, ServiceError>;

    async fn submit_file(&self, file: &UploadFile) -> Result<EditReply, ServiceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Never modified after it is appended.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    /// Usage reported for this reply, exactly as the service sent it.
    pub token_usage: Option<TokenUsage>,
    pub analysis: Option<EditAnalysis>,
    /// Set on synthetic error replies.
    pub failure: Option<FailureKind>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into())
    }

    /// Assistant message carrying a successful reply.
    pub fn reply(reply: EditReply) -> Self {
        let mut msg = Self::new(Role::Assistant, reply.manuscript);
        msg.token_usage = reply.token_usage;
        msg.analysis = reply.analysis;
        msg
    }

    /// Assistant message standing in for a failed request.
    pub fn failure(content: impl Into<String>, kind: FailureKind) -> Self {
        let mut msg = Self::new(Role::Assistant, content.into());
        msg.failure = Some(kind);
        msg
    }

    fn new(role: Role, content: String) -> Self {
        Self {
            id: MessageId::next(),
            role,
            content,
            token_usage: None,
            analysis: None,
            failure: None,
        }
    }
}

/// Token counts reported by the service. Any field may be missing; missing
/// is not the same as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
}

/// Editorial feedback returned alongside the manuscript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditAnalysis {
    pub editor_notes: Vec<String>,
    pub metric_scores: Option<MetricScores>,
    pub violations: Vec<Violation>,
}

impl EditAnalysis {
    pub fn is_empty(&self) -> bool {
        self.editor_notes.is_empty() && self.metric_scores.is_none() && self.violations.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricScores {
    pub strictness: Option<f64>,
    pub majesty: Option<f64>,
    pub superiority: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub suggestion: String,
}

/// A successful service reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditReply {
    pub manuscript: String,
    pub token_usage: Option<TokenUsage>,
    pub analysis: Option<EditAnalysis>,
    pub status: Option<String>,
    /// Text the service extracted from an uploaded document.
    pub original_text: Option<String>,
}

impl EditReply {
    pub fn new(manuscript: impl Into<String>) -> Self {
        Self {
            manuscript: manuscript.into(),
            ..Self::default()
        }
    }

    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.token_usage = Some(usage);
        self
    }
}

/// Which request path failed, kept on error messages for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Network,
    Service,
    MalformedResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Service { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ServiceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ServiceError::Network(_) => FailureKind::Network,
            ServiceError::Service { .. } => FailureKind::Service,
            ServiceError::MalformedResponse(_) => FailureKind::MalformedResponse,
        }
    }
}
