//! LLM module for transcript-tagger
//!
//! Sends the assembled prompt to an OpenAI-compatible chat completion API.

mod client;
mod openai;

pub use client::{CompletionRequest, LlmProvider, RemoteError};
pub use openai::{OpenAiClient, API_KEY_ENV, BASE_URL_ENV, DEFAULT_OPENAI_ENDPOINT};
