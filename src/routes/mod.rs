//! HTTP route handlers for the documentation site.
//!
//! Routes are organized by content type, with per-route Cache-Control headers.
//! Listing pages use short cache durations since they re-enumerate the
//! filesystem on each request; document pages cache longer.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;
pub mod microservice;
pub mod platform;
pub mod schema;
pub mod workflow;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{
    CACHE_CONTROL_DOCUMENT, CACHE_CONTROL_LISTING, CACHE_CONTROL_STATIC, STATIC_DIR,
};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Listing pages - short cache, directory contents may change
    let listing_routes = Router::new()
        .route("/", get(home::index))
        .route("/docs", get(home::docs_redirect))
        .route("/platform/{platform}", get(platform::detail))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_LISTING),
        ));

    // Document pages - longer cache, externally authored content changes rarely
    let document_routes = Router::new()
        .route("/docs/{platform}/schema", get(schema::view))
        .route("/docs/{platform}/schema/raw", get(schema::raw))
        .route("/docs/{platform}/workflows/{workflow}", get(workflow::view))
        .route(
            "/docs/{platform}/microservices/{service}",
            get(microservice::view),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DOCUMENT),
        ));

    // Static files - long cache with immutable hint
    let static_routes = Router::new()
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(listing_routes)
        .merge(document_routes)
        .merge(health_routes)
        .merge(static_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
