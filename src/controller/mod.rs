use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::amenity_catalog::MockAmenityCatalog;
use crate::repositories::borough_repo::BoroughRepo;
use crate::repositories::listings_client::ListingsClient;
use crate::repositories::property_repo::MockPropertyRepo;
use crate::services::lifestyle_service::LifestyleService;
use crate::services::property_service::PropertyService;

pub mod borough_controller;
pub mod health_check;
pub mod lifestyle_controller;
pub mod placeholder_controller;
pub mod property_controller;

/// Services shared by every handler. All of them are stateless, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub lifestyle_service: Arc<LifestyleService>,
    pub property_service: Arc<PropertyService>,
    pub borough_repo: Arc<BoroughRepo>,
}

impl AppState {
    pub fn new(
        lifestyle_service: LifestyleService,
        property_service: PropertyService,
        borough_repo: BoroughRepo,
    ) -> Self {
        Self {
            lifestyle_service: Arc::new(lifestyle_service),
            property_service: Arc::new(property_service),
            borough_repo: Arc::new(borough_repo),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let listings = match (&config.zoopla_base_url, &config.zoopla_api_key) {
            (Some(base_url), Some(api_key)) => {
                info!("Property details will be fetched from {}", base_url);
                Some(ListingsClient::new(
                    base_url,
                    api_key,
                    Duration::from_secs(config.listings_timeout_secs),
                )?)
            }
            _ => {
                info!("No listings provider configured, property details will use demo data");
                None
            }
        };

        Ok(Self::new(
            LifestyleService::new(Arc::new(MockAmenityCatalog)),
            PropertyService::new(Arc::new(MockPropertyRepo), listings),
            BoroughRepo::new(),
        ))
    }

    /// Demo data everywhere and no upstream provider.
    pub fn demo() -> Self {
        Self::new(
            LifestyleService::new(Arc::new(MockAmenityCatalog)),
            PropertyService::new(Arc::new(MockPropertyRepo), None),
            BoroughRepo::new(),
        )
    }
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let origins = if config.origin_urls.trim() == "*" {
        AllowOrigin::any()
    } else {
        let origins = config
            .origin_urls
            .split(',')
            .map(|s| s.trim().parse::<HeaderValue>())
            .collect::<Result<Vec<HeaderValue>, _>>()
            .context("Invalid origin in ORIGIN_URLS")?;
        AllowOrigin::list(origins)
    };

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::OPTIONS])
                        .allow_origin(origins)
                        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                )
        );

    let address = SocketAddr::new(config.host, config.port);
    info!("API server listening on: {}", address);
    axum::Server::bind(&address)
        .serve(application.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .nest("/api/lifestyle", lifestyle_controller::router(app_state.clone()))
        .nest("/api/properties", property_controller::router(app_state.clone()))
        .nest("/api/boroughs", borough_controller::router(app_state.clone()))
        .nest("/api/locations", borough_controller::locations_router(app_state))
        .nest("/api/placeholder", placeholder_controller::router())
        .fallback(page_not_found_handler)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down API server"),
        Err(e) => {
            tracing::warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
