use async_trait::async_trait;
use thiserror::Error;

/// Chat completion request payload.
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub temperature: f64,
    pub prompt: &'a str,
}

/// Failure while talking to the completion API.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Return the text of the first choice, unmodified.
    async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, RemoteError>;
}
