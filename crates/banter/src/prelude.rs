//! Convenience re-exports for common `banter` types.
//!
//! Meant to be glob-imported when embedding the proxy:
//!
//! ```ignore
//! use banter::prelude::*;
//! ```

// ── Client and wire types ───────────────────────────────────────────
pub use crate::{Content, GeminiClient, GenerationConfig, Part, DEFAULT_MODEL};

// ── Chat ────────────────────────────────────────────────────────────
pub use crate::chat::ChatService;
pub use crate::convo::{ConversationStore, Role, Turn, DEFAULT_CONVERSATION};
pub use crate::style::{resolve_instruction, styles, Style, DEFAULT_STYLE};

// ── Prompt tooling ──────────────────────────────────────────────────
pub use crate::heuristics::{analyze, PromptAnalysis, PromptQuality};
pub use crate::improve::{improve, ImproveError, Improvement};
