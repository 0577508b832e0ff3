//! Logging utilities
//!
//! Helpers for keeping request logs readable

/// Truncate a string with a note about the original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let prefix: String = s.chars().take(max_len).collect();
        format!(
            "{}... ({} chars truncated)",
            prefix,
            s.chars().count() - max_len
        )
    } else {
        s.to_string()
    }
}

/// Create a compact summary of an incoming question for debug logs
pub fn create_question_log_summary(question: &str) -> serde_json::Value {
    serde_json::json!({
        "question": truncate_content(question, 120),
        "length": question.chars().count(),
    })
}
