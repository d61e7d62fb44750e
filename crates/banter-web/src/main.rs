//! Persona chat proxy server.
//!
//! Reads the API key from the `GEMINI_API_KEY` environment variable (a `.env`
//! file in the working directory is honored).
//!
//! # Usage
//!
//! ```bash
//! GEMINI_API_KEY=... cargo run -p banter-web
//! GEMINI_API_KEY=... cargo run -p banter-web -- --model gemini-2.5-pro
//! GEMINI_API_KEY=... cargo run -p banter-web -- --port 8080 --max-turns 100
//! ```
//!
//! Then open the printed URL in a browser, or drive the API directly:
//!
//! ```bash
//! curl -X POST http://127.0.0.1:5000/ -d 'prompt=Why is the sky blue?&style=eli5'
//! curl -X POST http://127.0.0.1:5000/api/analyze-prompt \
//!   -H 'Content-Type: application/json' -d '{"prompt":"tell me about something"}'
//! ```

use std::sync::Arc;

use banter::chat::ChatService;
use banter::convo::ConversationStore;
use banter::{DEFAULT_MODEL, GeminiClient};
use banter_web::build_router;
use clap::Parser;

/// Persona chat proxy over the Gemini generateContent API.
#[derive(Parser)]
#[command(about = "Persona-styled chat proxy with a browser UI")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Gemini model to use.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Cap each conversation to this many turns, dropping the oldest.
    /// Unbounded when omitted.
    #[arg(long)]
    max_turns: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    // Load .env before reading the key; missing file is fine.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let api_key = std::env::var("GEMINI_API_KEY")
        .map_err(|_| "Set GEMINI_API_KEY env var to your Gemini API key")?;
    let client = GeminiClient::new(api_key)?.with_model(&args.model);

    let store = match args.max_turns {
        Some(cap) => ConversationStore::new().with_max_turns(cap),
        None => ConversationStore::new(),
    };
    let chat = Arc::new(ChatService::with_store(client, store));

    let router = build_router(chat);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("failed to bind {addr}: {e}"))?;

    println!("Chat UI: http://{addr}");
    axum::serve(listener, router)
        .await
        .map_err(|e| format!("server error: {e}"))
}
