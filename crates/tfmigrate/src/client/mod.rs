use crate::prelude::*;
use tfmigrate_core::{Completion, CompletionOptions, Conversation};

pub mod ollama;
pub mod openai;

pub use ollama::OllamaClient;
pub use openai::OpenAiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Provider {
    /// Local models served by Ollama
    Ollama,
    /// Any OpenAI-compatible `/chat/completions` endpoint
    Openai,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ClientOptions {
    /// Completion provider
    #[arg(long, env = "TFMIGRATE_PROVIDER", value_enum, default_value = "ollama")]
    pub provider: Provider,

    /// Model used for the migration
    #[arg(long, env = "TFMIGRATE_MODEL", default_value = "llama3.1")]
    pub model: String,

    /// Ollama base URL
    #[arg(long, env = "OLLAMA_URL", default_value = "http://localhost:11434")]
    pub ollama_url: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, env = "OPENAI_API_BASE", default_value = "https://api.openai.com/v1")]
    pub api_base: String,

    /// API key for the OpenAI-compatible API
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds (OpenAI-compatible provider)
    #[arg(long, env = "TFMIGRATE_TIMEOUT", default_value = "600")]
    pub timeout: u64,
}

impl ClientOptions {
    /// Where requests go, for the plan shown before a run.
    pub fn endpoint(&self) -> &str {
        match self.provider {
            Provider::Ollama => &self.ollama_url,
            Provider::Openai => &self.api_base,
        }
    }
}

/// The configured completion provider.
pub enum Client {
    Ollama(OllamaClient),
    OpenAi(OpenAiClient),
}

impl Client {
    pub fn from_options(options: &ClientOptions) -> Result<Self> {
        match options.provider {
            Provider::Ollama => Ok(Client::Ollama(OllamaClient::new(
                &options.ollama_url,
                &options.model,
            )?)),
            Provider::Openai => Ok(Client::OpenAi(OpenAiClient::new(
                &options.api_base,
                &options.model,
                options.api_key.clone(),
                options.timeout,
            )?)),
        }
    }
}

impl Completion for Client {
    async fn complete(
        &self,
        conversation: &Conversation,
        options: &CompletionOptions,
    ) -> Result<String, Error> {
        match self {
            Client::Ollama(client) => client.complete(conversation, options).await,
            Client::OpenAi(client) => client.complete(conversation, options).await,
        }
    }
}

/// Providers report an empty answer as a failed generation.
pub(crate) fn non_empty(text: String) -> Result<String, Error> {
    let text = text.trim_end().to_string();
    if text.trim().is_empty() {
        Err(Error::GenerationFailure(
            "model returned an empty response".to_string(),
        ))
    } else {
        Ok(text)
    }
}
