//! Handlers for the platform listing page.

use axum::{
    extract::State,
    response::{Html, Redirect},
};
use tracing::instrument;

use crate::error::AppError;
use crate::registry;
use crate::state::AppState;

/// Home page handler listing every known platform with a link to its
/// detail page.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);
    context.insert("platforms", &registry::PLATFORMS);

    let html = state.tera.render("home.html", &context)?;
    Ok(Html(html))
}

/// Legacy entry point; the platform listing lives at the site root.
pub async fn docs_redirect() -> Redirect {
    Redirect::to("/")
}
