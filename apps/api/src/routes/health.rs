use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Static liveness probe.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Resume Builder is running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
