use crate::prelude::*;
use rig::client::CompletionClient;
use rig::completion::Chat;
use rig::message::Message;
use rig::providers::ollama;
use tfmigrate_core::{Completion, CompletionOptions, Conversation, Role, Turn};

use super::non_empty;

pub struct OllamaClient {
    client: ollama::Client,
    model: String,
}

impl OllamaClient {
    pub fn new(ollama_url: &str, model: &str) -> Result<Self> {
        use rig::client::Nothing;

        let client = ollama::Client::builder()
            .api_key(Nothing)
            .base_url(ollama_url)
            .build()
            .map_err(|e| eyre!("Failed to create Ollama client: {}", e))?;

        Ok(Self {
            client,
            model: model.to_string(),
        })
    }
}

fn to_message(turn: &Turn) -> Message {
    match turn.role {
        Role::ExampleInput | Role::Query => Message::user(turn.content.clone()),
        Role::ExampleOutput => Message::assistant(turn.content.clone()),
    }
}

impl Completion for OllamaClient {
    async fn complete(
        &self,
        conversation: &Conversation,
        options: &CompletionOptions,
    ) -> Result<String, Error> {
        let query = conversation
            .query()
            .ok_or_else(|| Error::GenerationFailure("conversation has no query turn".into()))?;
        let history: Vec<Message> = conversation.history().iter().map(to_message).collect();

        let agent = self
            .client
            .agent(&self.model)
            .temperature(f64::from(options.temperature))
            .build();

        log::debug!(
            "Sending {} history turn(s) to Ollama model {}",
            history.len(),
            self.model
        );

        let response = agent
            .chat(&query.content, history)
            .await
            .map_err(|e| Error::GenerationFailure(format!("Ollama request failed: {e}")))?;

        non_empty(response)
    }
}
