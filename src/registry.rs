//! Fixed registry of known platform identifiers.
//!
//! The registry is the sole authorization check for platform-scoped routes.
//! Handlers reject identifiers outside this set before touching the
//! filesystem, so a request parameter is never joined onto a path
//! unvalidated.

/// Known platform identifiers, in display order.
pub const PLATFORMS: &[&str] = &["truestate", "acn", "vault", "canvas-homes", "restack"];

/// Check whether `id` names a known platform.
pub fn is_known_platform(id: &str) -> bool {
    PLATFORMS.contains(&id)
}

/// Human-readable label for a hyphenated identifier
/// (`canvas-homes` -> `Canvas Homes`).
pub fn display_name(id: &str) -> String {
    id.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
