//! Tera template engine initialization and custom filters.

use tera::Tera;

use crate::config::TEMPLATE_GLOB;
use crate::error::AppError;
use crate::registry;

/// Initialize the Tera template engine
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::new(TEMPLATE_GLOB)?;

    tera.register_filter("titleize", titleize_filter);

    Ok(tera)
}

/// Title-case a hyphenated identifier ("canvas-homes" -> "Canvas Homes").
/// Used for platform, workflow, and microservice names in page bodies.
fn titleize_filter(
    value: &tera::Value,
    _args: &std::collections::HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("titleize filter expects a string"))?;

    Ok(tera::Value::String(registry::display_name(s)))
}
