//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by orchestrators and load balancers to verify the service is
//! alive; it deliberately touches neither the documentation tree nor the
//! template engine.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
