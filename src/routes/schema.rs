//! Handlers for the platform schema document, rendered and raw.
//!
//! The schema is the platform's primary reference document; unlike workflows
//! and microservice READMEs it is expected to exist, so a failed read is a
//! 500, not a 404.

use axum::{
    extract::{Path, State},
    http::header::{self, HeaderName},
    response::Html,
};
use tracing::instrument;

use crate::error::AppError;
use crate::markdown;
use crate::registry;
use crate::state::AppState;

/// Rendered schema page handler.
#[instrument(name = "schema::view", skip(state), fields(platform = %platform))]
pub async fn view(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> Result<Html<String>, AppError> {
    if !registry::is_known_platform(&platform) {
        return Err(AppError::PlatformNotFound(platform));
    }

    let source = state
        .docs
        .read_schema(&platform)
        .await
        .map_err(AppError::SchemaRead)?;
    let content = markdown::render(&source);

    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);
    context.insert("platform", &platform);
    context.insert(
        "title",
        &format!("{} Schema Documentation", registry::display_name(&platform)),
    );
    context.insert("content", &content);

    let html = state.tera.render("document.html", &context)?;
    Ok(Html(html))
}

/// Raw schema handler, returning the markdown source byte-identical to the
/// on-disk file.
#[instrument(name = "schema::raw", skip(state), fields(platform = %platform))]
pub async fn raw(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> Result<([(HeaderName, &'static str); 1], String), AppError> {
    if !registry::is_known_platform(&platform) {
        return Err(AppError::PlatformNotFound(platform));
    }

    let source = state
        .docs
        .read_schema(&platform)
        .await
        .map_err(AppError::SchemaRead)?;

    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], source))
}
