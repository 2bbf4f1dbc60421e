//! CLI command implementations

use std::path::Path;

use crate::cli::args::Cli;
use crate::config::RunConfig;
use crate::llm::{CompletionRequest, LlmProvider, OpenAiClient};
use crate::transcript::{build_prompt, read_transcript};
use crate::{Result, TaggerError};

/// Run the full pipeline: config, credential, transcript, completion, output.
pub async fn run(cli: Cli) -> Result<()> {
    let config = RunConfig::load()?;
    let provider = OpenAiClient::from_env()?;

    tag_transcript(&config, &cli.input, &cli.output, &provider).await
}

/// Tag a transcript file and write the model's reply to `output`.
///
/// `output` is only touched once the completion has succeeded.
pub async fn tag_transcript(
    config: &RunConfig,
    input: &Path,
    output: &Path,
    provider: &dyn LlmProvider,
) -> Result<()> {
    let transcript = read_transcript(input)?;
    let prompt = build_prompt(&config.prompt, &transcript);

    println!();
    println!("=== Sending Request to OpenAI ===");
    println!("Model: {}", config.model);
    println!("Temperature: {}", config.temperature);
    println!("=================================");

    let tagged = provider
        .complete(CompletionRequest {
            model: &config.model,
            temperature: config.temperature,
            prompt: &prompt,
        })
        .await?;

    std::fs::write(output, &tagged).map_err(|e| {
        TaggerError::io(
            format!("Failed to write tagged transcript to {}", output.display()),
            e,
        )
    })?;

    tracing::info!(bytes = tagged.len(), "Wrote tagged transcript");
    println!("Tagged transcript saved to: {}", output.display());

    Ok(())
}
