use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::llm::client::{CompletionRequest, LlmProvider, RemoteError};
use crate::{Result, TaggerError};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClient {
    /// Build a client from `OPENAI_API_KEY` and, if set, `OPENAI_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_values(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(BASE_URL_ENV).ok(),
        )
    }

    fn from_values(api_key: Option<String>, endpoint: Option<String>) -> Result<Self> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(TaggerError::Credential { var: API_KEY_ENV })?;

        let endpoint = endpoint
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_OPENAI_ENDPOINT.to_string());

        Self::new(api_key, endpoint)
    }

    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .build()
                .map_err(|e| TaggerError::Remote(RemoteError::Transport(e)))?,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        })
    }

    #[cfg(test)]
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn complete(
        &self,
        request: CompletionRequest<'_>,
    ) -> std::result::Result<String, RemoteError> {
        // Every model gets a single user turn, no system message.
        let body = ChatCompletionRequest {
            model: request.model,
            messages: vec![ChatMessage {
                role: "user",
                content: request.prompt,
            }],
            temperature: request.temperature,
        };

        tracing::debug!(
            url = %self.request_url(),
            model = request.model,
            "Sending chat completion request"
        );

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(RemoteError::Transport)?;

        let status = response.status();
        let text = response.text().await.map_err(RemoteError::Transport)?;

        if !status.is_success() {
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        parse_completion(&text)
    }
}

/// Extract the first choice's content from a chat completion body.
fn parse_completion(body: &str) -> std::result::Result<String, RemoteError> {
    let payload: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;

    let choice = payload
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| RemoteError::MalformedResponse("response contained no choices".into()))?;

    choice.message.content.ok_or_else(|| {
        RemoteError::MalformedResponse("first choice has no text content".into())
    })
}

/// Prefer the API's own `error.message`, fall back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorResponse>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
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

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}
