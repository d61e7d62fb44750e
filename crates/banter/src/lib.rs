//! Persona-styled chat proxy core for the Gemini `generateContent` API.
//!
//! `banter` is the library behind a thin HTTP backend that forwards user
//! prompts to Google's generative-language API, optionally wrapping them with
//! a selectable personality system instruction and per-conversation history.
//! The interesting part — to the extent one exists — is the conversation-state
//! layer between the HTTP surface and the external call.
//!
//! # Getting started
//!
//! ```ignore
//! use banter::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), String> {
//!     let api_key = std::env::var("GEMINI_API_KEY").unwrap();
//!     let client = GeminiClient::new(api_key)?;
//!     let chat = ChatService::new(client);
//!
//!     let reply = chat.complete("Why is the sky blue?", "teacher", "default").await;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```
//!
//! # Where to find things
//!
//! - **Call the model:** [`GeminiClient`] and the wire types in this module.
//! - **Multi-turn chat with personas:** [`ChatService`](chat::ChatService),
//!   which owns a [`ConversationStore`](convo::ConversationStore) and resolves
//!   system instructions from the [`style`] registry.
//! - **Score a prompt locally:** [`heuristics::analyze`] — pure function, no
//!   network.
//! - **Rewrite a prompt via the model:** [`improve::improve`].
//!
//! # Design notes
//!
//! Errors are plain `String`s throughout the plumbing; the one place the HTTP
//! layer must tell a caller mistake apart from a provider failure
//! ([`improve`]) gets a dedicated enum. Conversation state lives behind a
//! `Mutex` inside [`ConversationStore`](convo::ConversationStore) — there is
//! no global map.

pub mod chat;
pub mod convo;
pub mod heuristics;
pub mod improve;
pub mod prelude;
pub mod style;

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::convo::{Role, Turn};

// ── Constants ──────────────────────────────────────────────────────

/// Base URL of the Google generative-language API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for all generation calls.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

// ── Generation parameters ──────────────────────────────────────────

/// Sampling parameters sent with a generation request.
///
/// Each call site picks one canonical configuration — see
/// [`GenerationConfig::chat`] and [`GenerationConfig::improve`].
#[derive(Serialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl GenerationConfig {
    /// Configuration for chat completions (stateful and stateless).
    pub fn chat() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 8000,
            top_p: Some(0.95),
            top_k: Some(64),
        }
    }

    /// Configuration for prompt-improvement calls.
    pub fn improve() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 5000,
            top_p: None,
            top_k: None,
        }
    }
}

// ── Wire types ─────────────────────────────────────────────────────

/// One block of text inside a [`Content`].
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Part {
    pub text: String,
}

/// A role-tagged message in the Gemini wire format.
///
/// Roles on this wire are `"user"` and `"model"` — the system instruction
/// travels in a separate top-level field, not as a message.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part { text: text.into() }],
        }
    }
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role,
            parts: vec![Part {
                text: turn.content.clone(),
            }],
        }
    }
}

/// System instruction wrapper. Gemini expects `{"parts": [{"text": ...}]}`
/// with no role.
#[derive(Serialize, Debug)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// `generateContent` request body.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
    pub generation_config: GenerationConfig,
}

// Raw response (internal deserialization target).
#[derive(Deserialize, Debug)]
struct RawGenerateResponse {
    candidates: Option<Vec<RawCandidate>>,
    error: Option<ApiErrorResponse>,
}

#[derive(Deserialize, Debug)]
struct RawCandidate {
    content: Option<RawContent>,
}

#[derive(Deserialize, Debug)]
struct RawContent {
    parts: Option<Vec<Part>>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorResponse {
    message: String,
}

// ── Client ─────────────────────────────────────────────────────────

/// Async HTTP client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new client with the given API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .user_agent("banter/0.1")
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            client,
            api_key: api_key.into().trim().to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    /// Set the model (e.g. `gemini-2.5-flash`, `gemini-2.5-pro`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL. Used to point the client at a local stub
    /// server in integration tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a `generateContent` request and return the first candidate's text.
    pub async fn generate(
        &self,
        system_instruction: Option<&str>,
        contents: Vec<Content>,
        config: GenerationConfig,
    ) -> Result<String, String> {
        let body = GenerateRequest {
            contents,
            system_instruction: system_instruction.map(SystemInstruction::new),
            generation_config: config,
        };

        debug!(
            "Gemini request: model={}, contents={}, system={}, max_tokens={}, temp={}",
            self.model,
            body.contents.len(),
            body.system_instruction.is_some(),
            config.max_output_tokens,
            config.temperature,
        );

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| format!("failed to read response: {e}"))?;

        debug!(
            "Gemini response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        if !status.is_success() {
            return Err(format!("Gemini API HTTP {status}: {text}"));
        }

        let parsed: RawGenerateResponse =
            serde_json::from_str(&text).map_err(|e| format!("failed to parse response: {e}"))?;

        if let Some(err) = parsed.error {
            return Err(format!("Gemini API error: {}", err.message));
        }

        let reply = parsed
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .map(|parts| {
                parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            });

        match reply {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err("empty response from Gemini".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_constructors() {
        let user = Content::user("hello");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.parts[0].text, "hello");

        let model = Content::model("hi there");
        assert_eq!(model.role, Role::Model);
    }

    #[test]
    fn request_serializes_to_gemini_wire_shape() {
        let req = GenerateRequest {
            contents: vec![Content::user("hi")],
            system_instruction: Some(SystemInstruction::new("Be terse.")),
            generation_config: GenerationConfig::chat(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "Be terse.");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 8000);
        assert_eq!(json["generationConfig"]["topK"], 64);
    }

    #[test]
    fn improve_config_omits_sampling_thresholds() {
        let json = serde_json::to_value(GenerationConfig::improve()).unwrap();
        assert_eq!(json["maxOutputTokens"], 5000);
        assert!(json.get("topP").is_none());
        assert!(json.get("topK").is_none());
    }

    #[test]
    fn turn_converts_to_content() {
        let turn = Turn::model("a reply");
        let content = Content::from(&turn);
        assert_eq!(content.role, Role::Model);
        assert_eq!(content.parts[0].text, "a reply");
    }
}
