//! Plain-text rendering of transcript messages and token totals.

use std::fmt::Write;

use quill_chat::{Message, MetricScores, Role, SessionSnapshot, TokenSummary, TokenUsage, UiText};

/// `IN 5 · OUT 3 · TOT 8`; a missing count shows as `-`.
pub fn usage_line(usage: &TokenUsage) -> String {
    let show = |v: Option<u64>| v.map_or_else(|| "-".to_string(), |n| n.to_string());
    format!(
        "IN {} · OUT {} · TOT {}",
        show(usage.input_tokens),
        show(usage.output_tokens),
        show(usage.total_tokens)
    )
}

/// Running total shown after every reply.
pub fn token_total(tokens: &TokenSummary, text: &UiText) -> String {
    format!("{} {}", tokens.total_tokens, text.token_unit)
}

/// Detailed `/tokens` output.
pub fn token_report(tokens: &TokenSummary, text: &UiText) -> String {
    format!(
        "IN {} · OUT {} · {} · {}: {}",
        tokens.input_tokens,
        tokens.output_tokens,
        token_total(tokens, text),
        text.usage_replies,
        tokens.replies_with_usage
    )
}

fn scores_line(scores: &MetricScores) -> String {
    let show = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |n| format!("{n:.2}"));
    format!(
        "strictness {} · majesty {} · superiority {}",
        show(scores.strictness),
        show(scores.majesty),
        show(scores.superiority)
    )
}

/// One message with its header, body, and any usage or analysis lines.
pub fn message(msg: &Message, text: &UiText, copied: bool) -> String {
    let label = match msg.role {
        Role::User => text.user_label,
        Role::Assistant => text.assistant_label,
    };

    let mut out = format!("[#{}] {label}", msg.id);
    if copied {
        let _ = write!(out, "  ✓ {}", text.copied_label);
    }
    out.push('\n');
    out.push_str(&msg.content);

    if let Some(usage) = msg.token_usage {
        let _ = write!(out, "\n  {}", usage_line(&usage));
    }

    if let Some(analysis) = &msg.analysis {
        for note in &analysis.editor_notes {
            let _ = write!(out, "\n  • {note}");
        }
        if let Some(scores) = &analysis.metric_scores {
            let _ = write!(out, "\n  {}", scores_line(scores));
        }
        for v in &analysis.violations {
            let _ = write!(out, "\n  ! [{}] \"{}\" → {}", v.kind, v.text, v.suggestion);
        }
    }
    out
}

/// The whole transcript followed by the token total.
pub fn transcript(snapshot: &SessionSnapshot, text: &UiText) -> String {
    if snapshot.messages.is_empty() {
        return text.empty_transcript.to_string();
    }
    let mut out = String::new();
    for msg in &snapshot.messages {
        out.push_str(&message(msg, text, snapshot.copied == Some(msg.id)));
        out.push_str("\n\n");
    }
    out.push_str(&token_total(&snapshot.tokens, text));
    out
}
