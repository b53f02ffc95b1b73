//! OpenAI-compatible chat completion provider (`/chat/completions`).

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tfmigrate_core::conversation::ChatMessage;
use tfmigrate_core::{Completion, CompletionOptions, Conversation};

use super::non_empty;

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    /// `api_key` is `None` for keyless local servers. When present it is sent
    /// as a bearer token.
    pub fn new(
        api_base: &str,
        model: &str,
        api_key: Option<String>,
        timeout_seconds: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: completions_url(api_base),
            model: model.to_string(),
            api_key,
        })
    }
}

fn completions_url(api_base: &str) -> String {
    format!("{}/chat/completions", api_base.trim_end_matches('/'))
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Text of the first choice.
fn extract_content(response: ChatCompletionResponse) -> Result<String, Error> {
    let content = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::GenerationFailure("response contained no choices".to_string()))?
        .message
        .content
        .ok_or_else(|| {
            Error::GenerationFailure("response is missing the message content".to_string())
        })?;

    non_empty(content)
}

impl Completion for OpenAiClient {
    async fn complete(
        &self,
        conversation: &Conversation,
        options: &CompletionOptions,
    ) -> Result<String, Error> {
        let payload = ChatCompletionRequest {
            model: &self.model,
            messages: conversation.chat_messages(),
            temperature: options.temperature,
        };

        log::debug!(
            "Sending {} message(s) to {} (model {})",
            payload.messages.len(),
            self.url,
            self.model
        );

        let mut request = self.client.post(&self.url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::GenerationFailure(format!("request to {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GenerationFailure(format!(
                "{} returned HTTP {status}: {}",
                self.url,
                body.trim()
            )));
        }

        let parsed = response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| Error::GenerationFailure(format!("failed to parse response body: {e}")))?;

        extract_content(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ChatCompletionResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_completions_url() {
        assert_eq!(
            completions_url("https://api.openai.com/v1/"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            completions_url("http://localhost:8080/v1"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_extract_first_choice() {
        let response = parse(
            r####"{"choices":[{"message":{"role":"assistant","content":"###main.tf###\nM\nmain.tf:end\n"}},{"message":{"content":"ignored"}}]}"####,
        );

        assert_eq!(
            extract_content(response).unwrap(),
            "###main.tf###\nM\nmain.tf:end"
        );
    }

    #[test]
    fn test_missing_choices_is_a_generation_failure() {
        let response = parse(r#"{"id":"chatcmpl-1"}"#);
        assert!(matches!(
            extract_content(response),
            Err(Error::GenerationFailure(_))
        ));
    }

    #[test]
    fn test_null_content_is_a_generation_failure() {
        let response = parse(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#);
        assert!(matches!(
            extract_content(response),
            Err(Error::GenerationFailure(msg)) if msg.contains("content")
        ));
    }

    #[test]
    fn test_request_payload_shape() {
        let conversation = tfmigrate_core::build_conversation(
            &[tfmigrate_core::ExamplePair::new("in", "out")],
            "query",
        );
        let payload = ChatCompletionRequest {
            model: "gpt-4o",
            messages: conversation.chat_messages(),
            temperature: 0.0,
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["temperature"], 0.0);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][1]["role"], "assistant");
        assert_eq!(json["messages"][2]["content"], "query");
    }
}
