//! Ordered message history and the token totals derived from it.

use quill_common::MessageId;

use crate::Message;

/// Append-only (until reset) list of messages in display order.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message at the end.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Drop every message.
    pub fn reset(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Sum of `total_tokens` over all messages; a missing count adds 0.
    pub fn aggregate_tokens(&self) -> u64 {
        self.messages
            .iter()
            .filter_map(|m| m.token_usage.and_then(|u| u.total_tokens))
            .fold(0u64, u64::saturating_add)
    }

    /// Input, output, and total sums in one pass.
    pub fn token_summary(&self) -> TokenSummary {
        self.messages
            .iter()
            .fold(TokenSummary::default(), |mut acc, msg| {
                if let Some(usage) = msg.token_usage {
                    acc.input_tokens = acc
                        .input_tokens
                        .saturating_add(usage.input_tokens.unwrap_or(0));
                    acc.output_tokens = acc
                        .output_tokens
                        .saturating_add(usage.output_tokens.unwrap_or(0));
                    acc.total_tokens = acc
                        .total_tokens
                        .saturating_add(usage.total_tokens.unwrap_or(0));
                    acc.replies_with_usage += 1;
                }
                acc
            })
    }

}

/// Token totals over a transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenSummary {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub total_tokens: u64,
    /// Messages that carried a usage record at all.
    pub replies_with_usage: usize,
}
