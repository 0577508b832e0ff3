//! Client-side conversation history

use crate::models::api::{ApiResponse, Source};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the conversation. Immutable once appended.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    pub source: Option<Source>,
    pub tokens_used: Option<u32>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
            source: None,
            tokens_used: None,
        }
    }

    /// Bot answer built from a successful chat response
    pub fn bot(response: ApiResponse) -> Self {
        Self {
            text: response.response,
            sender: Sender::Bot,
            source: Some(response.source),
            tokens_used: response.tokens_used,
        }
    }

    /// Bot-visible warning with no source tag, shown when a request fails
    pub fn warning(detail: impl std::fmt::Display) -> Self {
        Self {
            text: format!("⚠️ {}", detail),
            sender: Sender::Bot,
            source: None,
            tokens_used: None,
        }
    }
}

/// Append-only, insertion-ordered message history for one session.
///
/// Held by the chat UI and passed down explicitly; there is no removal or
/// reordering API, and nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_preserves_insertion_order() {
        let mut history = Conversation::new();
        for i in 0..5 {
            history.push(Message::user(format!("question {}", i)));
            history.push(Message::bot(ApiResponse {
                response: format!("answer {}", i),
                source: Source::Local,
                tokens_used: None,
            }));
        }

        assert_eq!(history.len(), 10);
        let texts: Vec<&str> = history.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts[0], "question 0");
        assert_eq!(texts[1], "answer 0");
        assert_eq!(texts[8], "question 4");
        assert_eq!(texts[9], "answer 4");
    }

    #[test]
    fn test_user_message_has_no_metadata() {
        let message = Message::user("How much water should I drink?");
        assert_eq!(message.sender, Sender::User);
        assert!(message.source.is_none());
        assert!(message.tokens_used.is_none());
    }

    #[test]
    fn test_bot_message_carries_metadata() {
        let message = Message::bot(ApiResponse {
            response: "Drink water".to_string(),
            source: Source::Local,
            tokens_used: Some(12),
        });

        assert_eq!(message.sender, Sender::Bot);
        assert_eq!(message.text, "Drink water");
        assert_eq!(message.source, Some(Source::Local));
        assert_eq!(message.tokens_used, Some(12));
    }

    #[test]
    fn test_warning_message_has_no_source_tag() {
        let message = Message::warning("Something went wrong. Please try again, Error: 500");
        assert_eq!(message.sender, Sender::Bot);
        assert!(message.text.starts_with("⚠️"));
        assert!(message.text.contains("Error: 500"));
        assert!(message.source.is_none());
    }
}
