use std::sync::Arc;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use tracing::info;
use crate::controller::AppState;
use crate::services::property_service::{PropertySearchParams, PropertyService};

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(search_properties))
        .route("/:id", get(retrieve_property))
        .route_layer(Extension(app_state.property_service))
}

pub async fn search_properties(
    Extension(property_service): Extension<Arc<PropertyService>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    let query = PropertySearchParams::from_pairs(&pairs);
    let search_res = property_service.search(&query);
    if search_res.fallback == Some(true) {
        info!("Served degraded property search results");
    }

    (StatusCode::OK, Json(search_res))
}

pub async fn retrieve_property(
    Extension(property_service): Extension<Arc<PropertyService>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let property_res = property_service.details(&id).await;

    (StatusCode::OK, Json(property_res))
}
