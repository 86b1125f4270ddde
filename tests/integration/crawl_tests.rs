//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over real HTTP.

use doc_harvest::config::UserAgentConfig;
use doc_harvest::crawler::{crawl, Coordinator, CrawlConfig, HttpFetcher, PageFetcher, StopReason};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration rooted at `{server}/docs/`
fn create_test_config(server: &MockServer) -> CrawlConfig {
    CrawlConfig {
        title: "Test Docs".to_string(),
        base_url: format!("{}/docs/", server.uri()),
        url_patterns: Vec::new(),
        include_url_patterns: Vec::new(),
        focus_areas: Vec::new(),
        exclude_areas: Vec::new(),
        max_pages: 25,
        deadline: Duration::from_secs(10),
        request_timeout: Duration::from_secs(2),
        max_links_per_page: 5,
    }
}

fn user_agent() -> UserAgentConfig {
    UserAgentConfig {
        crawler_name: "TestBot".to_string(),
        crawler_version: "1.0.0".to_string(),
        contact_url: Some("https://example.com/contact".to_string()),
    }
}

fn fetcher() -> Arc<dyn PageFetcher> {
    Arc::new(HttpFetcher::new(&user_agent()).expect("Failed to build HTTP client"))
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html; charset=utf-8")
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html(body))
        .mount(server)
        .await;
}

async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}

#[tokio::test]
async fn test_full_crawl_with_negated_pattern() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/docs/",
        r#"<main><h1>Docs</h1>
            <a href="/docs/guide">Guide</a>
            <a href="/docs/internal-secret">Secret</a>
        </main>"#,
    )
    .await;
    mount_page(&server, "/docs/guide", "<main><h1>Guide</h1><p>Read me</p></main>").await;
    mount_page(&server, "/docs/internal-secret", "<main><p>Do not crawl</p></main>").await;

    let mut config = create_test_config(&server);
    config.url_patterns = vec!["**/*".to_string(), "!internal-*".to_string()];

    let content = crawl(config, fetcher()).await.expect("Crawl failed");

    assert!(content.contains("## Documentation: guide\n\n# Guide\n\nRead me"));
    assert!(!content.contains("Do not crawl"));

    let paths = requested_paths(&server).await;
    assert!(paths.contains(&"/docs/guide".to_string()));
    assert!(!paths.contains(&"/docs/internal-secret".to_string()));
}

#[tokio::test]
async fn test_single_page_limit() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/docs/",
        r#"<main><p>Index</p><a href="a">A</a><a href="b">B</a></main>"#,
    )
    .await;

    let mut config = create_test_config(&server);
    config.max_pages = 1;

    let report = Coordinator::new(config, fetcher())
        .expect("Invalid config")
        .run()
        .await;

    assert_eq!(requested_paths(&server).await, vec!["/docs/".to_string()]);
    assert_eq!(report.stop_reason, StopReason::PageLimit);
    assert!(report.content.starts_with("## Documentation: \n\nIndex"));
}

#[tokio::test]
async fn test_include_patterns_seed_from_index() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/docs/",
        r#"<nav>
            <a href="js-overview">JS</a>
            <a href="go-overview">Go</a>
            <a href="introduction">Intro</a>
        </nav>"#,
    )
    .await;
    mount_page(
        &server,
        "/docs/js-overview",
        r#"<main><p>JavaScript SDK</p><a href="js-records">Records</a><a href="go-records">Go</a></main>"#,
    )
    .await;
    mount_page(&server, "/docs/js-records", "<main><p>JS records</p></main>").await;
    mount_page(&server, "/docs/go-records", "<main><p>Go records</p></main>").await;

    let mut config = create_test_config(&server);
    config.url_patterns = vec!["js-*".to_string()];
    config.include_url_patterns = vec!["js-".to_string()];
    config.focus_areas = vec!["js-".to_string()];
    config.exclude_areas = vec!["go-".to_string(), "introduction".to_string()];

    let content = crawl(config, fetcher()).await.expect("Crawl failed");

    assert_eq!(
        content,
        "## Documentation: js-overview\n\nJavaScript SDK\n\n[Records](js-records)[Go](go-records)\n\n## Documentation: js-records\n\nJS records"
    );

    let paths = requested_paths(&server).await;
    assert!(!paths.contains(&"/docs/go-overview".to_string()));
    assert!(!paths.contains(&"/docs/go-records".to_string()));
}

#[tokio::test]
async fn test_failed_pages_are_skipped() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/docs/",
        r#"<a href="missing">Missing</a><a href="manual">Manual</a><a href="broken">Broken</a><a href="good">Good</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/docs/manual"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0x25, 0x50, 0x44, 0x46])
                .insert_header("content-type", "application/pdf"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_page(&server, "/docs/good", "<main><p>Good page</p></main>").await;

    let report = Coordinator::new(create_test_config(&server), fetcher())
        .expect("Invalid config")
        .run()
        .await;

    assert!(report.content.contains("## Documentation: good\n\nGood page"));
    assert_eq!(report.pages_fetched, 5);
    assert_eq!(report.failed_fetches, 3);
    assert_eq!(report.stop_reason, StopReason::FrontierExhausted);
}

#[tokio::test]
async fn test_assets_and_other_sites_not_fetched() {
    let server = MockServer::start().await;
    let other = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html("<p>Elsewhere</p>"))
        .expect(0)
        .mount(&other)
        .await;

    mount_page(
        &server,
        "/docs/",
        &format!(
            r#"<a href="style.css">CSS</a>
               <a href="img/logo.PNG">Logo</a>
               <a href="{}/docs/guide">Other site</a>
               <a href="/blog/post">Blog</a>
               <a href="guide">Guide</a>"#,
            other.uri()
        ),
    )
    .await;
    mount_page(&server, "/docs/guide", "<p>Guide</p>").await;

    crawl(create_test_config(&server), fetcher())
        .await
        .expect("Crawl failed");

    assert_eq!(
        requested_paths(&server).await,
        vec!["/docs/".to_string(), "/docs/guide".to_string()]
    );
}

#[tokio::test]
async fn test_user_agent_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/docs/"))
        .and(header(
            "user-agent",
            "TestBot/1.0.0 (+https://example.com/contact)",
        ))
        .respond_with(html("<p>Hello bot</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let content = crawl(create_test_config(&server), fetcher())
        .await
        .expect("Crawl failed");

    assert_eq!(content, "## Documentation: \n\nHello bot");
}

#[tokio::test]
async fn test_deadline_returns_partial_content() {
    let server = MockServer::start().await;

    let links: String = (0..5)
        .map(|i| format!(r#"<a href="page{}">Page {}</a>"#, i, i))
        .collect();
    mount_page(&server, "/docs/", &format!("<main><p>Index</p>{}</main>", links)).await;

    Mock::given(method("GET"))
        .and(path("/docs/page0"))
        .respond_with(html("<p>First page</p>").set_delay(Duration::from_millis(200)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(html("<p>Slow page</p>").set_delay(Duration::from_millis(400)))
        .mount(&server)
        .await;

    let mut config = create_test_config(&server);
    config.deadline = Duration::from_millis(300);

    let report = Coordinator::new(config, fetcher())
        .expect("Invalid config")
        .run()
        .await;

    assert_eq!(report.stop_reason, StopReason::Deadline);
    assert!(report.content.contains("Index"));
    assert!(report.content.contains("First page"));
    assert!(report.pages_fetched < 6);
    assert!(report.elapsed < Duration::from_secs(3));
}

#[tokio::test]
async fn test_slow_page_times_out() {
    let server = MockServer::start().await;

    mount_page(&server, "/docs/", r#"<p>Index</p><a href="slow">Slow</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/docs/slow"))
        .respond_with(html("<p>Too late</p>").set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let mut config = create_test_config(&server);
    config.request_timeout = Duration::from_millis(100);

    let report = Coordinator::new(config, fetcher())
        .expect("Invalid config")
        .run()
        .await;

    assert!(report.content.contains("Index"));
    assert!(!report.content.contains("Too late"));
    assert_eq!(report.failed_fetches, 1);
}
