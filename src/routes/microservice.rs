//! Handler for viewing a microservice's rendered README.

use axum::{
    extract::{Path, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::markdown;
use crate::registry;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ViewPath {
    pub platform: String,
    pub service: String,
}

/// Reads and renders `README.md` from the microservice's directory. A missing
/// README is a 404.
#[instrument(
    name = "microservice::view",
    skip(state),
    fields(platform = %path.platform, service = %path.service)
)]
pub async fn view(
    State(state): State<AppState>,
    Path(path): Path<ViewPath>,
) -> Result<Html<String>, AppError> {
    if !registry::is_known_platform(&path.platform) {
        return Err(AppError::PlatformNotFound(path.platform));
    }

    let source = state
        .docs
        .read_microservice_readme(&path.platform, &path.service)
        .await
        .map_err(|_| AppError::MicroserviceNotFound(path.service.clone()))?;
    let content = markdown::render(&source);

    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);
    context.insert("platform", &path.platform);
    context.insert(
        "title",
        &format!(
            "{} - {}",
            registry::display_name(&path.service),
            registry::display_name(&path.platform)
        ),
    );
    context.insert("content", &content);

    let html = state.tera.render("document.html", &context)?;
    Ok(Html(html))
}
