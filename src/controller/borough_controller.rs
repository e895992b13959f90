use std::sync::Arc;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use tracing::debug;
use crate::controller::AppState;
use crate::repositories::borough_repo::BoroughRepo;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(retrieve_boroughs))
        .route("/:name", get(retrieve_borough_by_name))
        .route_layer(Extension(app_state.borough_repo))
}

pub fn locations_router(app_state: AppState) -> Router {
    Router::new()
        .route("/popular", get(retrieve_popular_locations))
        .route_layer(Extension(app_state.borough_repo))
}

pub async fn retrieve_boroughs(
    Extension(borough_repo): Extension<Arc<BoroughRepo>>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(json!(borough_repo.all())))
}

pub async fn retrieve_borough_by_name(
    Extension(borough_repo): Extension<Arc<BoroughRepo>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match borough_repo.find_by_name(&name) {
        Some(borough) => (StatusCode::OK, Json(json!(borough))).into_response(),
        None => {
            debug!("No borough matching {}", name);
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("No borough matching '{}'", name) })),
            ).into_response()
        }
    }
}

pub async fn retrieve_popular_locations(
    Extension(borough_repo): Extension<Arc<BoroughRepo>>,
) -> impl IntoResponse {
    (StatusCode::OK, Json(borough_repo.popular_locations()))
}
