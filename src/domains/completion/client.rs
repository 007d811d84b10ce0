//! OpenAI chat-completion client.
//!
//! One outbound call per invocation: system instruction plus user prompt in,
//! the first choice's text out, trimmed. No retries, no explicit timeout
//! (the transport's own defaults apply), no validation of the text against
//! the instructed format.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::CompletionError;
use crate::core::config::CompletionConfig;

/// Seam between the narrative service and the hosted completion API.
///
/// Route tests substitute a stub implementation so no network traffic is
/// needed to exercise the handlers.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Issue one completion call and return the trimmed response text.
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, CompletionError>;
}

/// Client for the OpenAI chat completions endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: CompletionConfig,
}

impl OpenAiClient {
    /// Create a client from the completion section of the configuration.
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, CompletionError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CompletionError::NoApiKey)?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: self.config.temperature,
        };

        debug!("Calling {} (model {})", self.config.base_url, self.config.model);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status,
                message: body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::parse(e.to_string()))?;

        extract_text(parsed)
    }
}

/// Pull the first choice's text out of a chat response and trim it.
fn extract_text(response: ChatResponse) -> Result<String, CompletionError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .ok_or_else(|| CompletionError::empty("response contained no text choice"))
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "instruction",
                },
                ChatMessage {
                    role: "user",
                    content: "prompt",
                },
            ],
            temperature: 0.7,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        // f32 widens through serialization; compare with tolerance.
        assert!((value["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "instruction");
        assert_eq!(value["messages"][1]["role"], "user");
    }

    #[test]
    fn test_extract_text_trims_whitespace() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "  誕生日のお祝い\n「ふーってしたよ！」\n"}}
            ]
        }))
        .unwrap();

        let text = extract_text(response).unwrap();
        assert_eq!(text, "誕生日のお祝い\n「ふーってしたよ！」");
    }

    #[test]
    fn test_extract_text_uses_first_choice() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [
                {"message": {"content": "first"}},
                {"message": {"content": "second"}}
            ]
        }))
        .unwrap();

        assert_eq!(extract_text(response).unwrap(), "first");
    }

    #[test]
    fn test_extract_text_empty_choices() {
        let response: ChatResponse =
            serde_json::from_value(serde_json::json!({"choices": []})).unwrap();

        let err = extract_text(response).unwrap_err();
        assert!(matches!(err, CompletionError::Empty(_)));
    }

    #[test]
    fn test_extract_text_missing_content() {
        let response: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        }))
        .unwrap();

        assert!(extract_text(response).is_err());
    }
}
