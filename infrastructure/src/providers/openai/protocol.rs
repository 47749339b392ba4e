//! Wire types for the OpenAI-compatible chat-completion endpoint.
//!
//! Only the fields this client sends or reads are modeled; everything
//! else in the provider's response is ignored.

use serde::{Deserialize, Serialize};

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message (instructions for the model).
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a user message (the concrete task).
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body for `POST {base_url}/chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

/// Response body for a non-streaming completion
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

/// The assistant message inside a choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// `null` for some providers when the budget was consumed by
    /// reasoning tokens.
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first completion choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_expected_shape() {
        let request = ChatCompletionRequest {
            model: "google/gemini-2.5-flash-lite".to_string(),
            messages: vec![
                ChatMessage::system("You are a placeholder text generator."),
                ChatMessage::user("Instruction: Output exactly 6 words."),
            ],
            temperature: 1.25,
            top_p: 0.98,
            max_tokens: 530,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "google/gemini-2.5-flash-lite");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["temperature"], 1.25);
        assert_eq!(json["top_p"], 0.98);
        assert_eq!(json["max_tokens"], 530);
    }

    #[test]
    fn test_response_first_content() {
        let raw = r#"{
            "id": "gen-123",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Copper bells hum beneath the rafters."}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 90, "completion_tokens": 8}
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.first_content(),
            Some("Copper bells hum beneath the rafters.")
        );
    }

    #[test]
    fn test_response_without_choices_has_no_content() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(response.first_content(), None);

        let response: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn test_response_with_null_content_has_no_content() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_content(), None);
    }
}
