use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{http_client, resolve_endpoint, CompletionRequest, LlmProvider};
use crate::{RecapError, Result};

const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(RecapError::Config(
                "Gemini API key is missing. Set llm.api_key in config or RECAP_API_KEY."
                    .to_string(),
            ));
        }

        Ok(Self {
            http: http_client(settings.llm.timeout_secs)?,
            api_key,
            endpoint: resolve_endpoint(&settings.llm.endpoint, DEFAULT_GEMINI_ENDPOINT),
        })
    }

    fn request_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, model, self.api_key
        )
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String> {
        let body = GeminiGenerateContentRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: request.instructions,
                }],
            },
            contents: vec![GeminiContent {
                role: Some("user"),
                parts: vec![GeminiPart { text: request.text }],
            }],
        };

        // The URL carries the key, so keep it out of error messages.
        let response = self
            .http
            .post(self.request_url(request.model))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                RecapError::RemoteService(format!("Gemini request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            RecapError::RemoteService(format!(
                "Failed to read Gemini response: {}",
                e.without_url()
            ))
        })?;

        if !status.is_success() {
            return Err(RecapError::RemoteService(format!(
                "Gemini returned {}: {}",
                status,
                text.trim()
            )));
        }

        parse_generate_content(&text)
    }
}

/// Concatenate the text parts of the first candidate.
fn parse_generate_content(body: &str) -> Result<String> {
    let payload: GeminiGenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        RecapError::MalformedResponse(format!("Failed to parse Gemini response: {}", e))
    })?;

    let parts: Vec<String> = payload
        .candidates
        .into_iter()
        .next()
        .map(|c| c.content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if parts.is_empty() {
        return Err(RecapError::MalformedResponse(
            "Gemini response did not contain completion text".to_string(),
        ));
    }

    Ok(parts.concat())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerateContentRequest<'a> {
    system_instruction: GeminiContent<'a>,
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiGenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContentResponse,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}
