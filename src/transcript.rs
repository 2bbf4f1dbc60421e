//! Transcript loading and prompt assembly

use std::path::Path;

use crate::{Result, TaggerError};

/// Token in the prompt template that is replaced with the transcript.
pub const TRANSCRIPT_PLACEHOLDER: &str = "{transcript}";

/// Read a transcript file and strip surrounding whitespace.
///
/// Fails with [`TaggerError::EmptyInput`] when nothing is left after trimming.
pub fn read_transcript(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        TaggerError::io(
            format!("Failed to read transcript file {}", path.display()),
            e,
        )
    })?;

    let transcript = raw.trim();
    if transcript.is_empty() {
        return Err(TaggerError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(bytes = transcript.len(), "Loaded transcript");
    Ok(transcript.to_string())
}

/// Fill every placeholder in `template` with `transcript`.
///
/// A template without the placeholder comes back unchanged.
pub fn build_prompt(template: &str, transcript: &str) -> String {
    if !template.contains(TRANSCRIPT_PLACEHOLDER) {
        tracing::debug!(
            "Prompt template has no {} placeholder; transcript will not be sent",
            TRANSCRIPT_PLACEHOLDER
        );
    }
    template.replace(TRANSCRIPT_PLACEHOLDER, transcript)
}
