pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.body_limit_bytes;
    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/generate-resume", post(handlers::handle_generate))
        .route("/api/download/:filename", get(handlers::handle_download))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    // Built form UI with SPA fallback, only when it has been built.
    if static_dir.is_dir() {
        info!("Serving static UI from {}", static_dir.display());
        let index = static_dir.join("index.html");
        router.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
    } else {
        router
    }
}
