//! Endpoint handlers.
//!
//! Error-channel behavior differs by endpoint, preserved from the observed
//! client contract: the chat form endpoint embeds provider errors in a normal
//! 200 response body, while `/api/improve-prompt` maps them to proper status
//! codes. Both log the original error.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use banter::chat::ChatService;
use banter::convo::DEFAULT_CONVERSATION;
use banter::heuristics::{self, PromptAnalysis};
use banter::improve::{self, ImproveError};
use banter::style::{self, DEFAULT_STYLE};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

/// Shared application state passed to all handlers via axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
}

/// GET / — Embedded chat page.
pub async fn index_page() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// GET /api/styles — All registered personality styles.
pub async fn get_styles() -> Json<serde_json::Value> {
    let mut map = serde_json::Map::new();
    for style in style::styles() {
        map.insert(style.id.to_string(), json!({ "name": style.name }));
    }
    Json(serde_json::Value::Object(map))
}

/// Request body for POST /api/clear.
#[derive(Deserialize)]
pub struct ClearRequest {
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// POST /api/clear — Reset a conversation's transcript.
///
/// Unknown conversation ids are a no-op; the call always succeeds.
pub async fn post_clear(
    State(app): State<AppState>,
    Json(body): Json<ClearRequest>,
) -> Json<serde_json::Value> {
    let conversation_id = body
        .conversation_id
        .as_deref()
        .unwrap_or(DEFAULT_CONVERSATION);
    app.chat.clear(conversation_id);
    Json(json!({ "success": true }))
}

/// Request body for POST /api/improve-prompt and /api/analyze-prompt.
#[derive(Deserialize)]
pub struct PromptRequest {
    pub prompt: String,
}

/// POST /api/improve-prompt — Model-assisted prompt rewrite.
///
/// 400 for an empty prompt (checked before any external call), 500 when the
/// provider fails, 200 with `{original, improved}` otherwise.
pub async fn post_improve(
    State(app): State<AppState>,
    Json(body): Json<PromptRequest>,
) -> Response {
    match improve::improve(app.chat.client(), &body.prompt).await {
        Ok(improvement) => (StatusCode::OK, Json(improvement)).into_response(),
        Err(e @ ImproveError::EmptyPrompt) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": e.to_string() })),
        )
            .into_response(),
        Err(ImproveError::Generation(e)) => {
            error!("prompt improvement failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e })),
            )
                .into_response()
        }
    }
}

/// POST /api/analyze-prompt — Local heuristic scoring. Always 200.
pub async fn post_analyze(Json(body): Json<PromptRequest>) -> Json<PromptAnalysis> {
    Json(heuristics::analyze(&body.prompt))
}

/// Form body for POST /.
#[derive(Deserialize)]
pub struct ChatForm {
    pub prompt: String,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// POST / — Styled, history-aware chat completion.
///
/// Always 200: provider failures come back as `Error: ...` text in the
/// `response` field (the service logs the original error).
pub async fn post_chat(
    State(app): State<AppState>,
    Form(form): Form<ChatForm>,
) -> Json<serde_json::Value> {
    let style = form.style.as_deref().unwrap_or(DEFAULT_STYLE);
    let conversation_id = form
        .conversation_id
        .as_deref()
        .unwrap_or(DEFAULT_CONVERSATION);

    let response = app.chat.complete(&form.prompt, style, conversation_id).await;

    Json(json!({
        "response": response,
        "style": style,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_request_conversation_id_is_optional() {
        let req: ClearRequest = serde_json::from_str("{}").unwrap();
        assert!(req.conversation_id.is_none());

        let req: ClearRequest = serde_json::from_str(r#"{"conversation_id":"abc"}"#).unwrap();
        assert_eq!(req.conversation_id.as_deref(), Some("abc"));
    }

    #[test]
    fn chat_form_defaults() {
        let form: ChatForm = serde_urlencoded_from("prompt=hi");
        assert_eq!(form.prompt, "hi");
        assert!(form.style.is_none());
        assert!(form.conversation_id.is_none());
    }

    #[test]
    fn chat_form_full() {
        let form: ChatForm = serde_urlencoded_from("prompt=hi&style=eli5&conversation_id=c1");
        assert_eq!(form.style.as_deref(), Some("eli5"));
        assert_eq!(form.conversation_id.as_deref(), Some("c1"));
    }

    // Build the form struct from key=value pairs without pulling in a
    // urlencoded dev-dependency.
    fn serde_urlencoded_from(query: &str) -> ChatForm {
        let mut map = serde_json::Map::new();
        for pair in query.split('&') {
            let (k, v) = pair.split_once('=').unwrap();
            map.insert(k.to_string(), serde_json::Value::String(v.to_string()));
        }
        serde_json::from_value(serde_json::Value::Object(map)).unwrap()
    }
}
