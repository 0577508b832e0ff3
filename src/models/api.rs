//! Wire types for the chat endpoint and the backend query call

use serde::{Deserialize, Serialize};

/// Where an answer came from: a fixed knowledge base or a generative model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Local,
    Openai,
}

impl Source {
    /// User-facing label for the source tag
    pub fn label(&self) -> &'static str {
        match self {
            Source::Local => "Local Knowledge",
            Source::Openai => "AI Generated",
        }
    }
}

/// Request body for `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question, forwarded verbatim to the backend
    pub user_input: String,
}

/// Response body for `POST /api/chat`
///
/// The same shape is used for success and failure; failures carry
/// `source: "local"` and `tokens_used: 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Answer text (or "Error: ..." on failure)
    pub response: String,
    /// Source tag
    pub source: Source,
    /// Token count, when the backend reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
}

impl ApiResponse {
    /// The fixed failure shape: error text, local source, zero tokens
    pub fn failure(message: impl std::fmt::Display) -> Self {
        Self {
            response: format!("Error: {}", message),
            source: Source::Local,
            tokens_used: Some(0),
        }
    }
}

/// Backend answer parsed leniently so missing fields can be reported as a
/// validation failure instead of a deserialization error
#[derive(Debug, Clone, Deserialize)]
pub struct BackendAnswer {
    pub response: Option<String>,
    pub source: Option<Source>,
    pub tokens_used: Option<u32>,
}

impl BackendAnswer {
    /// Check the required fields and reshape into the chat response
    pub fn into_api_response(self) -> Option<ApiResponse> {
        match (self.response, self.source) {
            (Some(response), Some(source)) => Some(ApiResponse {
                response,
                source,
                tokens_used: self.tokens_used,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_serialization() {
        assert_eq!(serde_json::to_string(&Source::Local).unwrap(), "\"local\"");
        assert_eq!(serde_json::to_string(&Source::Openai).unwrap(), "\"openai\"");

        let source: Source = serde_json::from_str("\"openai\"").unwrap();
        assert_eq!(source, Source::Openai);
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(Source::Local.label(), "Local Knowledge");
        assert_eq!(Source::Openai.label(), "AI Generated");
    }

    #[test]
    fn test_tokens_used_omitted_when_absent() {
        let response = ApiResponse {
            response: "Drink water".to_string(),
            source: Source::Local,
            tokens_used: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("tokens_used").is_none());
        assert_eq!(json["response"], "Drink water");
        assert_eq!(json["source"], "local");
    }

    #[test]
    fn test_failure_shape() {
        let failure = ApiResponse::failure("backend unreachable");

        assert_eq!(failure.response, "Error: backend unreachable");
        assert_eq!(failure.source, Source::Local);
        assert_eq!(failure.tokens_used, Some(0));

        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["tokens_used"], 0);
    }

    #[test]
    fn test_backend_answer_complete() {
        let answer: BackendAnswer = serde_json::from_str(
            r#"{"response": "Eat greens", "source": "openai", "tokens_used": 42}"#,
        )
        .unwrap();

        let response = answer.into_api_response().unwrap();
        assert_eq!(response.response, "Eat greens");
        assert_eq!(response.source, Source::Openai);
        assert_eq!(response.tokens_used, Some(42));
    }

    #[test]
    fn test_backend_answer_missing_source() {
        let answer: BackendAnswer =
            serde_json::from_str(r#"{"response": "Eat greens"}"#).unwrap();
        assert!(answer.into_api_response().is_none());
    }

    #[test]
    fn test_backend_answer_missing_response() {
        let answer: BackendAnswer = serde_json::from_str(r#"{"source": "local"}"#).unwrap();
        assert!(answer.into_api_response().is_none());
    }
}
