use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{http_client, resolve_endpoint, CompletionRequest, LlmProvider};
use crate::{RecapError, Result};

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(RecapError::Config(
                "OpenAI API key is missing. Set llm.api_key in config or RECAP_API_KEY."
                    .to_string(),
            ));
        }

        Ok(Self {
            http: http_client(settings.llm.timeout_secs)?,
            api_key,
            endpoint: resolve_endpoint(&settings.llm.endpoint, DEFAULT_OPENAI_ENDPOINT),
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String> {
        let body = ChatCompletionRequest {
            model: request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.instructions,
                },
                ChatMessage {
                    role: "user",
                    content: request.text,
                },
            ],
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RecapError::RemoteService(format!("OpenAI request failed: {}", e)))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            RecapError::RemoteService(format!("Failed to read OpenAI response: {}", e))
        })?;

        if !status.is_success() {
            return Err(RecapError::RemoteService(format!(
                "OpenAI returned {}: {}",
                status,
                text.trim()
            )));
        }

        parse_completion(&text)
    }
}

/// Extract the first choice's message content from a chat completion body.
fn parse_completion(body: &str) -> Result<String> {
    let payload: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        RecapError::MalformedResponse(format!("Failed to parse OpenAI response: {}", e))
    })?;

    payload
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            RecapError::MalformedResponse(
                "OpenAI response did not contain completion text".to_string(),
            )
        })
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
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
    use crate::llm::client::test_server::serve_once;

    #[test]
    fn request_serializes_system_then_user() {
        let body = ChatCompletionRequest {
            model: "gpt-3.5-turbo-0125",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "be brief",
                },
                ChatMessage {
                    role: "user",
                    content: "hello",
                },
            ],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo-0125");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "be brief");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn returns_first_choice_verbatim() {
        let body = r###"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "## Notes\n- one\n"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        }"###;

        assert_eq!(parse_completion(body).unwrap(), "## Notes\n- one\n");
    }

    #[test]
    fn empty_choices_are_malformed() {
        let err = parse_completion(r#"{"choices": []}"#).unwrap_err();
        assert!(matches!(err, RecapError::MalformedResponse(_)));
    }

    #[test]
    fn null_content_is_malformed() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let err = parse_completion(body).unwrap_err();
        assert!(matches!(err, RecapError::MalformedResponse(_)));
    }

    #[test]
    fn whitespace_content_is_returned_verbatim() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": " \n"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), " \n");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_remote_service_error() {
        let mut settings = Settings::default();
        settings.llm.api_key = "sk-test".to_string();
        settings.llm.endpoint = "http://127.0.0.1:1/v1".to_string();
        settings.llm.timeout_secs = 5;

        let client = OpenAiClient::from_settings(&settings).unwrap();
        let err = client
            .complete(CompletionRequest {
                model: "gpt-3.5-turbo-0125",
                instructions: "be brief",
                text: "hello",
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RecapError::RemoteService(_)));
    }

    #[tokio::test]
    async fn error_status_is_remote_service_error() {
        let endpoint = serve_once("429 Too Many Requests", r#"{"error":"rate limited"}"#).await;
        let mut settings = Settings::default();
        settings.llm.api_key = "sk-test".to_string();
        settings.llm.endpoint = endpoint;

        let client = OpenAiClient::from_settings(&settings).unwrap();
        let err = client
            .complete(CompletionRequest {
                model: "gpt-3.5-turbo-0125",
                instructions: "be brief",
                text: "hello",
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RecapError::RemoteService(_)));
        let message = err.to_string();
        assert!(message.contains("429"));
        assert!(message.contains("rate limited"));
    }

    #[tokio::test]
    async fn successful_call_returns_completion() {
        let endpoint = serve_once(
            "200 OK",
            r##"{"choices":[{"message":{"role":"assistant","content":"# Notes"}}]}"##,
        )
        .await;
        let mut settings = Settings::default();
        settings.llm.api_key = "sk-test".to_string();
        settings.llm.endpoint = endpoint;

        let client = OpenAiClient::from_settings(&settings).unwrap();
        let text = client
            .complete(CompletionRequest {
                model: "gpt-3.5-turbo-0125",
                instructions: "be brief",
                text: "hello",
            })
            .await
            .unwrap();

        assert_eq!(text, "# Notes");
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_completion("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, RecapError::MalformedResponse(_)));
    }

    #[test]
    fn custom_endpoint_builds_url() {
        let mut settings = Settings::default();
        settings.llm.api_key = "sk-test".to_string();
        settings.llm.endpoint = "http://localhost:11434/v1/".to_string();

        let client = OpenAiClient::from_settings(&settings).unwrap();
        assert_eq!(
            client.request_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }
}
