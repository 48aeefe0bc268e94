use axum::Json;

use crate::adapters::inbound::http::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
