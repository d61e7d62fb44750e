//! Axum server setup and router construction.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, AppState};

/// Build the full axum router: chat page + form endpoint at `/`, JSON API
/// under `/api/*`.
pub fn build_router(app_state: AppState) -> Router {
    // Permissive CORS for browser clients served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(api::index_page).post(api::post_chat))
        .route("/api/styles", get(api::get_styles))
        .route("/api/clear", post(api::post_clear))
        .route("/api/improve-prompt", post(api::post_improve))
        .route("/api/analyze-prompt", post(api::post_analyze))
        .with_state(app_state)
        .layer(cors)
}

/// Start the axum server on a background task and return the bound address.
pub async fn start_server(router: Router, bind_addr: SocketAddr) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind(bind_addr).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}
