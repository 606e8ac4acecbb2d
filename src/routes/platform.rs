//! Handler for the platform detail page.
//!
//! Shows the platform's schema link plus its workflows and microservices in
//! two independent sections; either section may be empty when the
//! corresponding directory is absent.

use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::instrument;

use crate::error::AppError;
use crate::registry;
use crate::state::AppState;

/// Platform detail page handler.
#[instrument(name = "platform::detail", skip(state), fields(platform = %platform))]
pub async fn detail(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> Result<Html<String>, AppError> {
    if !registry::is_known_platform(&platform) {
        return Err(AppError::PlatformNotFound(platform));
    }

    // Independent directory scans; each yields an empty list on its own
    let (workflows, microservices) = tokio::join!(
        state.docs.list_workflows(&platform),
        state.docs.list_microservices(&platform),
    );

    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);
    context.insert("platform", &platform);
    context.insert("workflows", &workflows);
    context.insert("microservices", &microservices);

    let html = state.tera.render("platform.html", &context)?;
    Ok(Html(html))
}
