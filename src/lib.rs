//! transcript-tagger - Tag a text transcript with an LLM
//!
//! Loads a prompt template from `config.yaml`, fills in the transcript and
//! writes the model's reply to a file.

pub mod cli;
pub mod config;
pub mod llm;
pub mod transcript;

use std::path::PathBuf;

use thiserror::Error;

use crate::llm::RemoteError;

/// Main error type for transcript-tagger
#[derive(Error, Debug)]
pub enum TaggerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("OpenAI API key not set. Export it with:\nexport {var}=\"your-api-key-here\"")]
    Credential { var: &'static str },

    #[error("Transcript file {} is empty.", .path.display())]
    EmptyInput { path: PathBuf },

    #[error("Failed to process transcript with OpenAI: {0}")]
    Remote(#[from] RemoteError),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl TaggerError {
    /// Whether the error is reported with `ERROR:` and exit code 1.
    ///
    /// Configuration failures are left to propagate out of `main`.
    pub fn is_handled(&self) -> bool {
        !matches!(self, TaggerError::Config(_))
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        TaggerError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaggerError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "transcript-tagger";
