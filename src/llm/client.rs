use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;
use crate::llm::openai::OpenAiClient;
use crate::{RecapError, Result};

/// A single completion request: one system message and one user message.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub instructions: &'a str,
    pub text: &'a str,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one request and return the text of the first completion.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => Err(RecapError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: openai, gemini",
            other
        ))),
    }
}

/// Strip trailing slashes from a configured endpoint, falling back to `default`.
pub(crate) fn resolve_endpoint(configured: &str, default: &str) -> String {
    let endpoint = configured.trim();
    if endpoint.is_empty() {
        default.to_string()
    } else {
        endpoint.trim_end_matches('/').to_string()
    }
}

pub(crate) fn http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| RecapError::Config(format!("Failed to build HTTP client: {}", e)))
}
