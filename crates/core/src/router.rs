//! Router building for the latency API.

use axum::Router;
use axum::http::{Method, StatusCode};
use axum::routing::{any, post};
use latency_telemetry::Aggregator;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::latency_handler;

/// Path the latency endpoint is published under, besides `/`.
pub const LATENCY_API_PATH: &str = "/api/latency";

/// Router building utilities
pub struct RouterBuilder;

impl RouterBuilder {
    /// Create the router serving latency summaries from `aggregator`.
    #[must_use]
    pub fn create_latency_router(aggregator: Aggregator) -> Router {
        Router::new()
            .route("/", post(latency_handler))
            .route(LATENCY_API_PATH, post(latency_handler))
            .with_state(aggregator)
    }

    /// Finalize a router with common layers
    #[must_use]
    pub fn finalize_router(router: Router) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::POST])
            .allow_headers(Any);

        router
            .fallback(any(|| async { (StatusCode::NOT_FOUND, "") }))
            .layer(cors)
    }

    /// Latency router with fallback and CORS applied.
    #[must_use]
    pub fn build(aggregator: Aggregator) -> Router {
        Self::finalize_router(Self::create_latency_router(aggregator))
    }
}
