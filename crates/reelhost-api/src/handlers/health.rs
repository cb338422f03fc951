use axum::Json;
use serde_json::{json, Value};

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/healthz",
    tag = "health",
    responses((status = 200, description = "Service is alive"))
)]
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
