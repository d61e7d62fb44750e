//! Prompt improvement via the model.
//!
//! Sends the user's prompt to Gemini under a prompt-engineering system
//! instruction and returns a cleaned-up rewrite alongside the original.
//! Unlike the chat path, failures here are surfaced as typed errors so the
//! HTTP layer can distinguish a caller mistake (400) from a provider
//! failure (500).

use crate::{Content, GeminiClient, GenerationConfig};
use serde::Serialize;

const IMPROVE_INSTRUCTION: &str = "You are a prompt engineering expert. Rewrite the user's prompt \
to be clearer, more specific, and more likely to get a high-quality response from an AI \
assistant. Keep the user's intent and language. Return only the improved prompt, with no \
preamble, no explanation, and no surrounding quotes.";

/// Original prompt plus its model-written rewrite.
#[derive(Serialize, Clone, Debug)]
pub struct Improvement {
    pub original: String,
    pub improved: String,
}

/// Failure modes of [`improve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImproveError {
    /// The trimmed prompt was empty; no external call was attempted.
    EmptyPrompt,
    /// The external generation call failed.
    Generation(String),
}

impl std::fmt::Display for ImproveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImproveError::EmptyPrompt => write!(f, "prompt must not be empty"),
            ImproveError::Generation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ImproveError {}

/// Rewrite a prompt for clarity. Validates before any network call.
pub async fn improve(client: &GeminiClient, prompt: &str) -> Result<Improvement, ImproveError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(ImproveError::EmptyPrompt);
    }

    let text = client
        .generate(
            Some(IMPROVE_INSTRUCTION),
            vec![Content::user(prompt)],
            GenerationConfig::improve(),
        )
        .await
        .map_err(ImproveError::Generation)?;

    Ok(Improvement {
        original: prompt.to_string(),
        improved: strip_decorations(&text),
    })
}

/// Strip markdown emphasis markers and wrapping quote characters that models
/// tend to add despite instructions.
fn strip_decorations(text: &str) -> String {
    let without_emphasis: String = text.chars().filter(|c| *c != '*').collect();
    without_emphasis
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}
