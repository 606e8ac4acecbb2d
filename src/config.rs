//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines constants for
//! HTTP cache TTLs, default paths, and logging. `AppConfig` is the root
//! configuration struct; every section has built-in defaults so the service
//! runs without a config file at all.

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// These constants control Cache-Control headers for upstream caches.
// All values are in seconds.

/// Listing pages (home, platform detail) re-enumerate the filesystem per request
pub const HTTP_CACHE_LISTING_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_LISTING_SWR: u32 = 30;

/// Document pages - externally authored content, changes rarely
pub const HTTP_CACHE_DOCUMENT_MAX_AGE: u32 = 300;
pub const HTTP_CACHE_DOCUMENT_SWR: u32 = 60;

/// Static assets (CSS) - long cache with immutable hint
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

/// Stale-if-error duration - serve stale content during origin failures
pub const HTTP_CACHE_STALE_IF_ERROR: u32 = 300;

// Pre-formatted Cache-Control header values (compile-time string concatenation)
pub const CACHE_CONTROL_LISTING: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_LISTING_MAX_AGE,
    HTTP_CACHE_LISTING_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

pub const CACHE_CONTROL_DOCUMENT: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_DOCUMENT_MAX_AGE,
    HTTP_CACHE_DOCUMENT_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

pub const CACHE_CONTROL_STATIC: &str =
    formatcp!("public, max-age={}, immutable", HTTP_CACHE_STATIC_MAX_AGE);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Glob pattern for template files
pub const TEMPLATE_GLOB: &str = "templates/**/*";

/// Directory for static files
pub const STATIC_DIR: &str = "static";

/// Default documentation root directory
pub const DEFAULT_DOCS_ROOT: &str = "docs/platforms";

/// Default site name shown in page headers and titles
pub const DEFAULT_SITE_NAME: &str = "Tech Documentation";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "docshelf=debug,tower_http=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Environment variable overriding the configured listen port
pub const PORT_ENV_VAR: &str = "PORT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Documentation tree location
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        3000
    }
}

/// Location of the documentation tree on disk
#[derive(Debug, Clone, Deserialize)]
pub struct DocsConfig {
    /// Root directory containing one subdirectory per platform
    #[serde(default = "DocsConfig::default_root")]
    pub root: PathBuf,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
        }
    }
}

impl DocsConfig {
    fn default_root() -> PathBuf {
        PathBuf::from(DEFAULT_DOCS_ROOT)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Site title shown in the header and page titles
    #[serde(default = "UiConfig::default_site_name")]
    pub site_name: String,
    /// Version string, populated at runtime
    #[serde(skip_deserializing, default = "UiConfig::default_version")]
    pub version: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: Self::default_site_name(),
            version: Self::default_version(),
        }
    }
}

impl UiConfig {
    fn default_site_name() -> String {
        DEFAULT_SITE_NAME.to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to built-in defaults
    /// when the file does not exist. An existing but unreadable or invalid
    /// file is an error. The `PORT` environment variable overrides the
    /// configured listen port.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config: AppConfig = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };

        config.apply_port_override(std::env::var(PORT_ENV_VAR).ok().as_deref())?;
        Ok(config)
    }

    fn apply_port_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        if let Some(raw) = value {
            self.http.port = raw.parse().map_err(|_| {
                ConfigError::Validation(format!("invalid {PORT_ENV_VAR} value: {raw}"))
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
