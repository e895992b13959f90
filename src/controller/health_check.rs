use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

pub fn router() -> Router {
    Router::new().route("/health", get(get_health_check))
}

/// Liveness probe
async fn get_health_check() -> impl IntoResponse {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();

    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "timestamp": timestamp })),
    )
}
