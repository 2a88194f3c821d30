//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use quill_common::{MessageId, SessionId};

use crate::{FailureKind, Message, TokenSummary, UiText};

/// Guard that clears the `busy` flag on drop, ensuring it is always released
/// even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy flag. Fails if a request is in flight.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, RejectReason> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(RejectReason::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Tunables for a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// How long a copied message shows as copied.
    pub copy_indicator: Duration,
    /// Show the full failure text in error replies.
    pub detailed_errors: bool,
    pub text: UiText,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            copy_indicator: Duration::from_millis(2000),
            detailed_errors: false,
            text: UiText::default(),
        }
    }
}

/// Which message was copied last, and when.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CopyIndicator {
    pub(crate) id: MessageId,
    pub(crate) at: Instant,
}

impl CopyIndicator {
    pub(crate) fn active_id(&self, window: Duration) -> Option<MessageId> {
        (self.at.elapsed() < window).then_some(self.id)
    }
}

/// Why a submission was refused before any request went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Busy,
    EmptyText,
    NoFile,
}

/// Result of a text submission or upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The reply was appended.
    Completed { reply_id: MessageId },
    /// An error reply was appended.
    Failed {
        reply_id: MessageId,
        kind: FailureKind,
    },
    /// Nothing changed and no request was sent.
    Rejected(RejectReason),
    /// The session was reset while the request was in flight; the reply was
    /// dropped.
    Discarded,
}

impl SubmitOutcome {
    pub fn reply_id(&self) -> Option<MessageId> {
        match self {
            SubmitOutcome::Completed { reply_id } | SubmitOutcome::Failed { reply_id, .. } => {
                Some(*reply_id)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied(MessageId),
    Pasted { chars: usize },
    UnknownMessage(MessageId),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Where the file went, as reported by the exporter.
    Saved(String),
    UnknownMessage(MessageId),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Reset,
    Cancelled,
}

/// Owned copy of everything a front end needs to draw the session.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub messages: Vec<Message>,
    pub composing: String,
    pub busy: bool,
    pub copied: Option<MessageId>,
    pub tokens: TokenSummary,
}

impl SessionSnapshot {
    pub fn total_tokens(&self) -> u64 {
        self.tokens.total_tokens
    }
}
