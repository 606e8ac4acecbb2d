//! Handler for viewing a rendered workflow document.

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
    pub workflow: String,
}

/// Reads and renders a workflow document. A missing document is a 404; the
/// existence of a workflow is only ever determined by this read attempt.
#[instrument(
    name = "workflow::view",
    skip(state),
    fields(platform = %path.platform, workflow = %path.workflow)
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
        .read_workflow(&path.platform, &path.workflow)
        .await
        .map_err(|_| AppError::WorkflowNotFound(path.workflow.clone()))?;
    let content = markdown::render(&source);

    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);
    context.insert("platform", &path.platform);
    context.insert(
        "title",
        &format!(
            "{} - {}",
            registry::display_name(&path.workflow),
            registry::display_name(&path.platform)
        ),
    );
    context.insert("content", &content);

    let html = state.tera.render("document.html", &context)?;
    Ok(Html(html))
}
