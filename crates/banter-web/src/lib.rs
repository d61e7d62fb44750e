//! HTTP surface for the `banter` persona chat proxy.
//!
//! `banter-web` exposes the chat, style, and prompt-tooling endpoints over
//! axum and serves a small embedded chat page at `/`.
//!
//! # Quick start
//!
//! ```ignore
//! use banter::prelude::*;
//! use banter_web::{WebConfig, spawn_web};
//! use std::sync::Arc;
//!
//! let client = GeminiClient::new(api_key)?;
//! let chat = Arc::new(ChatService::new(client));
//!
//! let addr = spawn_web(chat, WebConfig::default()).await;
//! println!("Chat UI: http://{addr}");
//! ```
//!
//! # Endpoints
//!
//! | Route | Method | Body | Response |
//! |-------|--------|------|----------|
//! | `/` | GET | — | embedded HTML chat page |
//! | `/` | POST | form `prompt`, `style?`, `conversation_id?` | `{response, style}` |
//! | `/api/styles` | GET | — | `{styleId: {name}, ...}` |
//! | `/api/clear` | POST | `{conversation_id?}` | `{success: true}` |
//! | `/api/improve-prompt` | POST | `{prompt}` | `{original, improved}` / `{error}` |
//! | `/api/analyze-prompt` | POST | `{prompt}` | heuristic analysis, always 200 |
//!
//! Provider failures on `POST /` come back as HTTP 200 with the error text in
//! the `response` field; `/api/improve-prompt` surfaces them as HTTP 500.

mod api;
mod server;

pub use api::AppState;

use banter::chat::ChatService;
use std::net::SocketAddr;
use std::sync::Arc;

/// Configuration for the web server.
pub struct WebConfig {
    /// Address to bind to. Default: `127.0.0.1:5000`. Port 0 binds a random
    /// available port (used by tests).
    pub bind_addr: SocketAddr,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

/// Spawn the web server on a Tokio task and return the bound address.
///
/// The server runs until the Tokio runtime shuts down. For a foreground
/// server, use [`build_router`] with `axum::serve` directly.
pub async fn spawn_web(chat: Arc<ChatService>, config: WebConfig) -> SocketAddr {
    let router = build_router(chat);
    server::start_server(router, config.bind_addr).await
}

/// Build the full axum router for a chat service.
pub fn build_router(chat: Arc<ChatService>) -> axum::Router {
    server::build_router(AppState { chat })
}
