use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use lifemap_api::controller::{router_endpoints, AppState};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

fn create_test_app() -> Router {
    router_endpoints(AppState::demo())
}

async fn get(uri: &str) -> axum::response::Response {
    create_test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = hyper::body::to_bytes(response.into_body())
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Failed to parse JSON")
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn lifestyle_defaults_to_central_london_and_whole_catalog() {
    let response = get("/api/lifestyle").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["total"], 17);
    assert_eq!(body["radius"], 2000);
    assert_eq!(body["type"], "all");
    assert_eq!(body["location"]["lat"], 51.5074);
    assert_eq!(body["location"]["lng"], -0.1278);

    let distances: Vec<f64> = body["amenities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["distance"].as_f64().unwrap())
        .collect();
    assert_eq!(distances.len(), 17);
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn lifestyle_tiny_radius_is_empty() {
    let body = json_response(get("/api/lifestyle?lat=51.5074&lng=-0.1278&radius=100").await).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["amenities"], serde_json::json!([]));
}

#[tokio::test]
async fn lifestyle_score_only_returns_the_score() {
    let response = get("/api/lifestyle?type=score&radius=250").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["lifestyleScore"], 60);
    assert!(body.get("amenities").is_none());
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn lifestyle_group_search_echoes_type() {
    let body = json_response(get("/api/lifestyle?type=restaurants").await).await;
    assert_eq!(body["type"], "restaurants");
    assert_eq!(body["total"], 3);
    assert_eq!(body["amenities"][0]["id"], "restaurant-0");
    assert_eq!(body["amenities"][0]["tags"]["cuisine"], "British");
}

#[tokio::test]
async fn lifestyle_unknown_type_is_unrestricted() {
    let body = json_response(get("/api/lifestyle?type=nightlife").await).await;
    assert_eq!(body["type"], "nightlife");
    assert_eq!(body["total"], 17);
}

#[tokio::test]
async fn lifestyle_malformed_params_are_defaulted() {
    let response = get("/api/lifestyle?lat=north&lng=&radius=far").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["location"]["lat"], 51.5074);
    assert_eq!(body["radius"], 2000);
    assert_eq!(body["total"], 17);
}

#[tokio::test]
async fn lifestyle_repeated_keys_use_first_value() {
    let response = get("/api/lifestyle?type=score&radius=250&type=all&radius=2000").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["lifestyleScore"], 60);
    assert!(body.get("amenities").is_none());

    let response = get("/api/lifestyle?lat=51.5074&lat=52.0").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["location"]["lat"], 51.5074);
}

#[tokio::test]
async fn lifestyle_radius_reads_leading_integer() {
    let body = json_response(get("/api/lifestyle?radius=1e3").await).await;
    assert_eq!(body["radius"], 1);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn properties_repeated_keys_use_first_value() {
    let response = get("/api/properties?page=1&page=2&pageSize=3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["properties"][0]["id"], 1);
}

#[tokio::test]
async fn properties_five_plus_bedrooms() {
    let body = json_response(get("/api/properties?minBedrooms=5&maxBedrooms=5%2B").await).await;

    let properties = body["properties"].as_array().unwrap();
    assert_eq!(body["totalResults"], 4);
    assert!(properties.iter().all(|p| p["bedrooms"].as_u64().unwrap() >= 5));
    assert!(body.get("fallback").is_none());
}

#[tokio::test]
async fn properties_are_paginated() {
    let body = json_response(get("/api/properties?page=3&pageSize=3").await).await;
    assert_eq!(body["page"], 3);
    assert_eq!(body["pageSize"], 3);
    assert_eq!(body["totalResults"], 10);

    let ids: Vec<u64> = body["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![7, 8, 9]);
}

#[tokio::test]
async fn property_details_fall_back_to_demo_data() {
    let response = get("/api/properties/4").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_response(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["fallback"], true);
    assert_eq!(body["property"]["id"], 4);
    assert_eq!(body["property"]["type"], "Mansion");
    assert_eq!(body["property"]["lifestyleScore"], 96);
}

#[tokio::test]
async fn boroughs_are_listed() {
    let body = json_response(get("/api/boroughs").await).await;
    let boroughs = body.as_array().unwrap();

    assert_eq!(boroughs.len(), 10);
    assert_eq!(boroughs[0]["id"], "kensington-chelsea");
    assert_eq!(boroughs[0]["coordinates"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn borough_lookup_by_name() {
    let body = json_response(get("/api/boroughs/hackney").await).await;
    assert_eq!(body["name"], "Hackney");

    let response = get("/api/boroughs/atlantis").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn popular_locations() {
    let body = json_response(get("/api/locations/popular").await).await;
    assert_eq!(body.as_array().unwrap().len(), 10);
    assert_eq!(body[0], "Kensington");
}

#[tokio::test]
async fn placeholder_is_a_cacheable_svg() {
    let response = get("/api/placeholder/640/480").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
    assert_eq!(response.headers()[header::CACHE_CONTROL], "public, max-age=3600");

    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let svg = String::from_utf8(body.to_vec()).unwrap();
    assert!(svg.contains("640 × 480"));
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let response = get("/api/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_response(response).await;
    assert!(body["error"].is_string());
}
