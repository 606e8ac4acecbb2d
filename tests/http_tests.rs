//! HTTP integration tests driving the full router in-process.
//!
//! Each test builds the real router over a temporary documentation tree and
//! issues requests through `tower::ServiceExt::oneshot`, so routing, cache
//! headers, error mapping, and template rendering are all exercised together.
//!
//! Run with: cargo test --test http_tests

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use docshelf::config::AppConfig;
use docshelf::docs::DocLibrary;
use docshelf::routes::create_router;
use docshelf::state::AppState;
use docshelf::templates::init_templates;

/// Build a temporary documentation tree:
/// - `truestate` has a schema, one workflow, and one microservice
/// - `acn` has only a schema (no workflows/ or microservices/ directories)
/// - `vault` is registered but has no directory at all
fn fixture_tree() -> TempDir {
    let dir = TempDir::new().unwrap();

    let truestate = dir.path().join("truestate");
    std::fs::create_dir_all(truestate.join("workflows")).unwrap();
    std::fs::create_dir_all(truestate.join("microservices/search")).unwrap();
    std::fs::write(truestate.join("schema.md"), "# Title").unwrap();
    std::fs::write(
        truestate.join("workflows/lead-intake.md"),
        "# Lead Intake\n\nSteps.",
    )
    .unwrap();
    std::fs::write(
        truestate.join("microservices/search/README.md"),
        "# Search Service",
    )
    .unwrap();

    let acn = dir.path().join("acn");
    std::fs::create_dir_all(&acn).unwrap();
    std::fs::write(acn.join("schema.md"), "# ACN").unwrap();

    dir
}

fn app(root: &std::path::Path) -> Router {
    let tera = init_templates().expect("templates should load");
    let state = AppState::new(AppConfig::default(), tera, DocLibrary::new(root));
    create_router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn home_lists_all_platforms() {
    let tree = fixture_tree();
    let (status, _, body) = get(app(tree.path()), "/").await;

    assert_eq!(status, StatusCode::OK);
    for platform in ["truestate", "acn", "vault", "canvas-homes", "restack"] {
        assert!(
            body.contains(&format!("/platform/{platform}")),
            "missing link for {platform}"
        );
    }
    // Hyphenated identifiers are title-cased for display
    assert!(body.contains("Canvas Homes"));
}

#[tokio::test]
async fn docs_redirects_to_root() {
    let tree = fixture_tree();
    let (status, headers, _) = get(app(tree.path()), "/docs").await;

    assert!(status.is_redirection(), "got {status}");
    assert_eq!(headers[header::LOCATION], "/");
}

#[tokio::test]
async fn platform_detail_lists_workflows_and_microservices() {
    let tree = fixture_tree();
    let (status, _, body) = get(app(tree.path()), "/platform/truestate").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/docs/truestate/schema"));
    assert!(body.contains("/docs/truestate/workflows/lead-intake"));
    assert!(body.contains("/docs/truestate/microservices/search"));
    assert!(body.contains("Lead Intake"));
}

#[tokio::test]
async fn platform_detail_shows_empty_sections_without_directories() {
    let tree = fixture_tree();
    let (status, _, body) = get(app(tree.path()), "/platform/acn").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No workflow documentation available"));
    assert!(body.contains("No microservices documentation available"));
}

#[tokio::test]
async fn schema_page_contains_rendered_markdown() {
    let tree = fixture_tree();
    let (status, _, body) = get(app(tree.path()), "/docs/truestate/schema").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Title</h1>"), "got: {body}");
}

#[tokio::test]
async fn schema_raw_returns_source_byte_identical() {
    let tree = fixture_tree();
    let (status, headers, body) = get(app(tree.path()), "/docs/truestate/schema/raw").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "# Title");
    let content_type = headers[header::CONTENT_TYPE].to_str().unwrap();
    assert!(
        content_type.starts_with("text/markdown"),
        "got: {content_type}"
    );
}

#[tokio::test]
async fn unknown_platform_is_rejected_on_every_scoped_route() {
    let tree = fixture_tree();
    for uri in [
        "/platform/unknown",
        "/docs/unknown/schema",
        "/docs/unknown/schema/raw",
        "/docs/unknown/workflows/lead-intake",
        "/docs/unknown/microservices/search",
    ] {
        let (status, _, body) = get(app(tree.path()), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "for {uri}");
        assert_eq!(body, r#"{"error":"Platform not found"}"#, "for {uri}");
    }
}

#[tokio::test]
async fn missing_schema_file_is_a_read_failure() {
    let tree = fixture_tree();
    // vault is in the registry but has no directory in the fixture tree
    let (status, _, body) = get(app(tree.path()), "/docs/vault/schema").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Failed to read schema file"}"#);

    let (status, _, body) = get(app(tree.path()), "/docs/vault/schema/raw").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Failed to read schema file"}"#);
}

#[tokio::test]
async fn workflow_page_renders_and_missing_workflow_is_404() {
    let tree = fixture_tree();
    let (status, _, body) = get(app(tree.path()), "/docs/truestate/workflows/lead-intake").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Lead Intake</h1>"));

    let (status, _, body) = get(app(tree.path()), "/docs/truestate/workflows/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Workflow documentation not found"}"#);
}

#[tokio::test]
async fn microservice_page_renders_and_missing_service_is_404() {
    let tree = fixture_tree();
    let (status, _, body) = get(app(tree.path()), "/docs/truestate/microservices/search").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Search Service</h1>"));

    let (status, _, body) = get(app(tree.path()), "/docs/truestate/microservices/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"error":"Microservice documentation not found"}"#);
}

#[tokio::test]
async fn dot_dot_segments_read_as_not_found() {
    let tree = fixture_tree();
    let (status, _, _) = get(app(tree.path()), "/docs/truestate/workflows/..").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = get(app(tree.path()), "/docs/truestate/microservices/..").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_and_document_pages_carry_cache_headers() {
    let tree = fixture_tree();
    let (_, headers, _) = get(app(tree.path()), "/").await;
    let cache = headers[header::CACHE_CONTROL].to_str().unwrap();
    assert!(cache.contains("max-age="), "got: {cache}");

    let (_, headers, _) = get(app(tree.path()), "/docs/truestate/schema").await;
    let cache = headers[header::CACHE_CONTROL].to_str().unwrap();
    assert!(cache.contains("stale-while-revalidate="), "got: {cache}");
}

#[tokio::test]
async fn health_returns_ok() {
    let tree = fixture_tree();
    let (status, _, body) = get(app(tree.path()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
