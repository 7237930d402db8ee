use crate::model::HealthResponse;
use axum::Json;

/// Body of `GET /`.
pub const INFO_MESSAGE: &str = "M3U decode gateway is running. Use /decode/<base64>";

pub async fn info_handler() -> &'static str {
    INFO_MESSAGE
}

/// Liveness probe. The gateway holds no state, so being able to answer is
/// the whole check.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
