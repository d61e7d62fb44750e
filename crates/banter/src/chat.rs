//! Stateful chat completion: persona resolution + per-conversation history.
//!
//! [`ChatService`] is the layer between the HTTP surface and the Gemini call.
//! Each completion appends the user turn, replays the prior transcript as
//! history, and appends the model's reply back into the transcript.
//!
//! Provider errors on the chat path are swallowed into the response text
//! (`"Error: ..."`) rather than propagated — the browser client renders
//! whatever comes back in the `response` field. The original error is always
//! logged first.

use crate::convo::{ConversationStore, Turn};
use crate::style;
use crate::{Content, GeminiClient, GenerationConfig};
use tracing::{debug, error};

/// Chat completion service owning the conversation store.
pub struct ChatService {
    client: GeminiClient,
    store: ConversationStore,
}

impl ChatService {
    /// Create a service with an empty, unbounded conversation store.
    pub fn new(client: GeminiClient) -> Self {
        Self::with_store(client, ConversationStore::new())
    }

    /// Create a service with a preconfigured store (e.g. a bounded one).
    pub fn with_store(client: GeminiClient, store: ConversationStore) -> Self {
        Self { client, store }
    }

    /// The underlying Gemini client.
    pub fn client(&self) -> &GeminiClient {
        &self.client
    }

    /// The conversation store.
    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Run one styled, history-aware completion.
    ///
    /// The returned string is always suitable for the `response` field: on
    /// provider failure it carries `"Error: {cause}"` instead of a reply, and
    /// the failed exchange's user turn stays in the transcript (matching the
    /// append-before-call flow).
    pub async fn complete(&self, prompt: &str, style_id: &str, conversation_id: &str) -> String {
        self.store.append_turn(conversation_id, Turn::user(prompt));

        let instruction = style::resolve_instruction(style_id);
        let history = self.store.history_excluding_last(conversation_id);

        debug!(
            "chat completion: conversation={}, style={}, history_turns={}",
            conversation_id,
            style_id,
            history.len()
        );

        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::user(prompt));

        match self
            .client
            .generate(Some(instruction), contents, GenerationConfig::chat())
            .await
        {
            Ok(text) => {
                self.store
                    .append_turn(conversation_id, Turn::model(text.clone()));
                text
            }
            Err(e) => {
                error!("chat completion failed for conversation {conversation_id}: {e}");
                format!("Error: {e}")
            }
        }
    }

    /// One-shot completion: no history, no persona, chat configuration.
    pub async fn complete_stateless(&self, prompt: &str) -> Result<String, String> {
        self.client
            .generate(None, vec![Content::user(prompt)], GenerationConfig::chat())
            .await
    }

    /// Reset a conversation's transcript.
    pub fn clear(&self, conversation_id: &str) {
        self.store.clear(conversation_id);
    }
}
