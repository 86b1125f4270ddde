//! Integration tests for the HTTP surface
//!
//! Documentation sites are wiremock servers; the router is served on an
//! ephemeral local port and exercised with a real HTTP client.

use doc_harvest::config::parse_config;
use doc_harvest::server::router;
use doc_harvest::DocsService;
use reqwest::header::{HeaderName, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a single documentation page at `page_path`
async fn mount_docs(server: &MockServer, page_path: &str, body: &str, expected: Option<u64>) {
    let mock = Mock::given(method("GET")).and(path(page_path)).respond_with(
        ResponseTemplate::new(200)
            .set_body_string(format!("<html><body><main>{}</main></body></html>", body))
            .insert_header("content-type", "text/html"),
    );

    match expected {
        Some(hits) => mock.expect(hits).mount(server).await,
        None => mock.mount(server).await,
    }
}

/// Serves the app with presets `alpha`, `beta` (with a prompt) and `empty`
///
/// Returns the app's base URL.
async fn spawn_app(server: &MockServer) -> String {
    let toml = format!(
        r#"
        [crawler]
        deadline-ms = 5000
        request-timeout-ms = 2000

        [[preset]]
        name = "alpha"
        title = "Alpha"
        base-url = "{uri}/alpha/"

        [[preset]]
        name = "beta"
        title = "Beta"
        base-url = "{uri}/beta/"
        prompt = "Answer briefly"

        [[preset]]
        name = "empty"
        title = "Empty"
        base-url = "{uri}/empty/"
        "#,
        uri = server.uri()
    );

    let config = parse_config(&toml).expect("Invalid test config");
    let service = DocsService::from_config(config).expect("Failed to build service");
    let app = router(Arc::new(service));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move { axum::serve(listener, app).await });

    format!("http://{}", addr)
}

async fn get(app: &str, uri: &str) -> Response {
    reqwest::get(format!("{}{}", app, uri))
        .await
        .expect("Request failed")
}

async fn body_text(response: Response) -> String {
    response.text().await.expect("Unreadable body")
}

fn header_value(response: &Response, name: HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[tokio::test]
async fn test_healthz() {
    let server = MockServer::start().await;
    let app = spawn_app(&server).await;

    let response = get(&app, "/healthz").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_index_lists_presets() {
    let server = MockServer::start().await;
    let app = spawn_app(&server).await;

    let response = get(&app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("alpha - Alpha"));
    assert!(body.contains("beta - Beta"));
}

#[tokio::test]
async fn test_single_preset() {
    let server = MockServer::start().await;
    mount_docs(&server, "/alpha/", "<p>Alpha docs</p>", None).await;
    let app = spawn_app(&server).await;

    let response = get(&app, "/alpha").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(&response, CONTENT_TYPE).as_deref(),
        Some("text/plain; charset=utf-8")
    );
    assert!(header_value(&response, CONTENT_DISPOSITION).is_none());
    assert_eq!(body_text(response).await, "## Documentation: \n\nAlpha docs");
}

#[tokio::test]
async fn test_multiple_presets_download() {
    let server = MockServer::start().await;
    mount_docs(&server, "/alpha/", "<p>Alpha docs</p>", None).await;
    mount_docs(&server, "/beta/", "<p>Beta docs</p>", None).await;
    let app = spawn_app(&server).await;

    let response = get(&app, "/alpha,%20beta?download=true").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(&response, CONTENT_DISPOSITION).as_deref(),
        Some(r#"attachment; filename="alpha-beta.txt""#)
    );
    assert_eq!(
        body_text(response).await,
        "## Documentation: \n\nAlpha docs\n\n---\n\n## Documentation: \n\nBeta docs\n\nInstructions for LLMs: <SYSTEM>Answer briefly</SYSTEM>"
    );
}

#[tokio::test]
async fn test_download_requires_literal_true() {
    let server = MockServer::start().await;
    mount_docs(&server, "/alpha/", "<p>Alpha docs</p>", None).await;
    let app = spawn_app(&server).await;

    let response = get(&app, "/alpha?download=yes").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(header_value(&response, CONTENT_DISPOSITION).is_none());
}

#[tokio::test]
async fn test_unknown_presets_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let app = spawn_app(&server).await;

    let response = get(&app, "/alpha,nope,gone").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, r#"Invalid preset(s): "nope", "gone""#);
}

#[tokio::test]
async fn test_empty_preset_fails_request() {
    let server = MockServer::start().await;
    mount_docs(&server, "/alpha/", "<p>Alpha docs</p>", None).await;
    mount_docs(&server, "/empty/", "<script>render()</script>", None).await;
    let app = spawn_app(&server).await;

    let response = get(&app, "/alpha,empty").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_text(response).await,
        r#"Failed to fetch documentation for presets "alpha, empty""#
    );
}

#[tokio::test]
async fn test_unreachable_site_fails_request() {
    let server = MockServer::start().await;
    let app = spawn_app(&server).await;

    let response = get(&app, "/beta").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_repeat_request_served_from_cache() {
    let server = MockServer::start().await;
    mount_docs(&server, "/alpha/", "<p>Alpha docs</p>", Some(1)).await;
    let app = spawn_app(&server).await;

    let first = body_text(get(&app, "/alpha").await).await;
    let second = body_text(get(&app, "/alpha").await).await;

    assert_eq!(first, "## Documentation: \n\nAlpha docs");
    assert_eq!(first, second);
}
