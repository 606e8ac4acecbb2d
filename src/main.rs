//! Docshelf: a web interface to platform documentation trees.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, sets up the Tera templates and the documentation
//! library, builds the Axum router with all routes, and starts the HTTP server.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docshelf::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use docshelf::docs::DocLibrary;
use docshelf::routes::create_router;
use docshelf::state::AppState;
use docshelf::templates::init_templates;

/// Docshelf: a web interface to platform documentation
#[derive(Parser, Debug)]
#[command(name = "docshelf", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "docshelf=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (built-in defaults if the file is absent)
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(&log_filter))
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(&log_filter))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        docs_root = %config.docs.root.display(),
        platforms = ?docshelf::registry::PLATFORMS,
        "Loaded configuration"
    );

    // Initialize Tera templates
    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    // Documentation library rooted at the configured documents directory
    let docs = DocLibrary::new(config.docs.root.clone());

    // Create application state and router
    let state = AppState::new(config.clone(), tera, docs);
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
