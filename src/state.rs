//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::AppConfig;
use crate::docs::DocLibrary;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration, Tera template engine, and the
/// documentation library rooted at the configured documents directory. All of
/// it is immutable after startup; no synchronization is needed.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub docs: DocLibrary,
}

impl AppState {
    /// Creates a new application state from the given configuration,
    /// templates, and documentation library.
    pub fn new(config: AppConfig, tera: Tera, docs: DocLibrary) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            docs,
        }
    }
}
