//! Per-conversation transcripts.
//!
//! A [`ConversationStore`] maps a caller-supplied conversation id to an
//! ordered transcript of [`Turn`]s. The store is an explicit object meant to
//! be owned by the server (no global map) and guards its map with a `Mutex`,
//! so concurrent requests cannot tear it — though interleaving of whole turns
//! across concurrent requests for the same id remains possible.
//!
//! Transcripts grow by append and are truncated only by [`clear`]
//! (or the optional [`with_max_turns`] bound).
//!
//! [`clear`]: ConversationStore::clear
//! [`with_max_turns`]: ConversationStore::with_max_turns

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// Conversation id used when the caller doesn't supply one.
pub const DEFAULT_CONVERSATION: &str = "default";

/// Speaker of a turn. Matches the Gemini wire roles.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One message exchange unit: a role plus text content. Immutable once
/// appended.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: content.into(),
        }
    }
}

/// Process-wide registry of transcripts, keyed by conversation id.
///
/// The store does not enforce user/model alternation — transcripts alternate
/// by construction in the chat path, but nothing checks it.
pub struct ConversationStore {
    transcripts: Mutex<HashMap<String, Vec<Turn>>>,
    /// When set, transcripts are capped to this many turns, oldest dropped.
    max_turns: Option<usize>,
}

impl ConversationStore {
    /// Create an empty, unbounded store.
    pub fn new() -> Self {
        Self {
            transcripts: Mutex::new(HashMap::new()),
            max_turns: None,
        }
    }

    /// Cap each transcript to at most `max_turns` turns, dropping the oldest
    /// when the cap is exceeded. Off by default.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Append one turn, creating the transcript if absent.
    pub fn append_turn(&self, conversation_id: &str, turn: Turn) {
        let mut map = self.transcripts.lock().unwrap();
        let transcript = map.entry(conversation_id.to_string()).or_default();
        transcript.push(turn);
        if let Some(cap) = self.max_turns
            && transcript.len() > cap
        {
            let excess = transcript.len() - cap;
            transcript.drain(..excess);
        }
    }

    /// All turns except the most recently appended one, in original order.
    ///
    /// Used to build the history for a generation call after the current user
    /// turn has already been appended, so the in-flight prompt is sent as the
    /// current message rather than duplicated in history.
    pub fn history_excluding_last(&self, conversation_id: &str) -> Vec<Turn> {
        let map = self.transcripts.lock().unwrap();
        match map.get(conversation_id) {
            Some(transcript) if transcript.len() > 1 => {
                transcript[..transcript.len() - 1].to_vec()
            }
            _ => Vec::new(),
        }
    }

    /// Reset a transcript to empty. No-op for unknown ids.
    pub fn clear(&self, conversation_id: &str) {
        let mut map = self.transcripts.lock().unwrap();
        if let Some(transcript) = map.get_mut(conversation_id) {
            transcript.clear();
        }
    }

    /// Number of turns currently stored for a conversation.
    pub fn turn_count(&self, conversation_id: &str) -> usize {
        let map = self.transcripts.lock().unwrap();
        map.get(conversation_id).map_or(0, |t| t.len())
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_transcript() {
        let store = ConversationStore::new();
        assert_eq!(store.turn_count("a"), 0);

        store.append_turn("a", Turn::user("hi"));
        assert_eq!(store.turn_count("a"), 1);
    }

    #[test]
    fn history_excludes_just_appended_turn() {
        let store = ConversationStore::new();
        store.append_turn("a", Turn::user("one"));
        store.append_turn("a", Turn::model("two"));
        store.append_turn("a", Turn::user("three"));

        let history = store.history_excluding_last("a");
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], Turn::user("one"));
        assert_eq!(history[1], Turn::model("two"));
    }

    #[test]
    fn history_of_single_turn_is_empty() {
        let store = ConversationStore::new();
        store.append_turn("a", Turn::user("only"));
        assert!(store.history_excluding_last("a").is_empty());
    }

    #[test]
    fn history_of_unknown_conversation_is_empty() {
        let store = ConversationStore::new();
        assert!(store.history_excluding_last("nope").is_empty());
    }

    #[test]
    fn clear_resets_any_prior_state() {
        let store = ConversationStore::new();
        store.append_turn("x", Turn::user("a"));
        store.append_turn("x", Turn::model("b"));

        store.clear("x");
        assert_eq!(store.turn_count("x"), 0);
        assert!(store.history_excluding_last("x").is_empty());

        // Clearing an unknown conversation is a no-op, not an error.
        store.clear("never-seen");
    }

    #[test]
    fn conversations_do_not_share_transcripts() {
        let store = ConversationStore::new();
        store.append_turn("a", Turn::user("for a"));
        store.append_turn("b", Turn::user("for b"));

        assert_eq!(store.turn_count("a"), 1);
        assert_eq!(store.turn_count("b"), 1);
        store.clear("a");
        assert_eq!(store.turn_count("b"), 1);
    }

    #[test]
    fn max_turns_drops_oldest() {
        let store = ConversationStore::new().with_max_turns(3);
        for i in 0..5 {
            store.append_turn("a", Turn::user(format!("msg {i}")));
        }

        assert_eq!(store.turn_count("a"), 3);
        let history = store.history_excluding_last("a");
        assert_eq!(history[0], Turn::user("msg 2"));
    }

    #[test]
    fn turn_role_serde_roundtrip() {
        let json = serde_json::to_string(&Turn::model("x")).unwrap();
        assert!(json.contains("\"model\""));
        let parsed: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.role, Role::Model);
    }
}
