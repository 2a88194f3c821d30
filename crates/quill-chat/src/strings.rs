//! User-facing strings, one table per language.

/// Every string the session and front end show to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    /// Prefix of error replies.
    pub failure_marker: &'static str,
    /// Upload placeholder; `{name}` is replaced by the file name.
    pub analyzing_file: &'static str,
    pub text_failure_fallback: &'static str,
    pub upload_failure_fallback: &'static str,
    pub confirm_new_session: &'static str,
    pub empty_transcript: &'static str,
    pub user_label: &'static str,
    pub assistant_label: &'static str,
    pub copied_label: &'static str,
    pub busy_notice: &'static str,
    pub empty_input_notice: &'static str,
    pub working: &'static str,
    pub new_session_done: &'static str,
    pub new_session_cancelled: &'static str,
    pub online: &'static str,
    pub offline: &'static str,
    pub token_unit: &'static str,
    /// Label for the count of replies that reported usage.
    pub usage_replies: &'static str,
}

impl UiText {
    pub const fn arabic() -> Self {
        Self {
            failure_marker: "❌",
            analyzing_file: "📎 جاري تحليل الملف: {name}...",
            text_failure_fallback: "عذراً، حدث خطأ في الاتصال بخدمة التحرير.",
            upload_failure_fallback: "عذراً، حدث خطأ داخلي في النظام.",
            confirm_new_session: "هل أنت متأكد من بدء جلسة جديدة؟ سيتم مسح المحادثة الحالية.",
            empty_transcript: "ابدأ بكتابة النص أو ارفع ملف لمعالجته...",
            user_label: "أنت",
            assistant_label: "النص بعد التحرير",
            copied_label: "تم النسخ",
            busy_notice: "جاري معالجة الطلب السابق، يرجى الانتظار.",
            empty_input_notice: "أدخل النص للتحرير...",
            working: "...",
            new_session_done: "بدأت جلسة جديدة.",
            new_session_cancelled: "تم الإلغاء.",
            online: "متصل",
            offline: "غير متصل",
            token_unit: "TKN",
            usage_replies: "ردود بإحصاء",
        }
    }

    pub const fn english() -> Self {
        Self {
            failure_marker: "❌",
            analyzing_file: "📎 Analyzing file: {name}...",
            text_failure_fallback: "Sorry, the editing service could not be reached.",
            upload_failure_fallback: "Sorry, an internal system error occurred.",
            confirm_new_session: "Start a new session? The current conversation will be cleared.",
            empty_transcript: "Start by typing text or upload a file to process...",
            user_label: "You",
            assistant_label: "Edited text",
            copied_label: "Copied",
            busy_notice: "Still working on the previous request, please wait.",
            empty_input_notice: "Enter text to edit...",
            working: "...",
            new_session_done: "Started a new session.",
            new_session_cancelled: "Cancelled.",
            online: "Online",
            offline: "Offline",
            token_unit: "TKN",
            usage_replies: "replies with usage",
        }
    }

    /// Placeholder shown as the user's turn while a file is processed.
    pub fn analyzing_file(&self, name: &str) -> String {
        self.analyzing_file.replace("{name}", name)
    }

    /// Error bubble content: marker, a space, then the message.
    pub fn failure(&self, message: &str) -> String {
        format!("{} {}", self.failure_marker, message)
    }
}

impl Default for UiText {
    fn default() -> Self {
        Self::arabic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_keeps_literal_file_name() {
        for text in [UiText::arabic(), UiText::english()] {
            let placeholder = text.analyzing_file("report {v2}.docx");
            assert!(placeholder.contains("report {v2}.docx"), "{placeholder}");
            assert!(placeholder.starts_with("📎"));
        }
    }

    #[test]
    fn failure_is_prefixed_with_marker() {
        let text = UiText::english();
        assert_eq!(text.failure("boom"), "❌ boom");
    }

    #[test]
    fn default_is_arabic() {
        assert_eq!(UiText::default(), UiText::arabic());
    }
}
