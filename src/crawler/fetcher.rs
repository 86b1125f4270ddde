//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - The `PageFetcher` seam the crawl driver fetches through
//! - Building HTTP clients with proper user agent strings
//! - Error classification into `FetchResult` variants

use crate::config::UserAgentConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
///
/// Every failure is a value, not an error: the crawler logs it and moves on.
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Non-2xx response
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Response is not an HTML or text document
    ContentMismatch {
        /// The Content-Type received
        content_type: String,
    },

    /// Network error (connection refused, reset, unreadable body, ...)
    NetworkError {
        /// Error description
        error: String,
    },

    /// The per-request timeout elapsed
    Timeout,
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the body of a successful fetch
    pub fn into_body(self) -> Option<String> {
        match self {
            Self::Success { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Short description of a failed fetch for logging
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::HttpError { status_code } => Some(format!("HTTP {}", status_code)),
            Self::ContentMismatch { content_type } => {
                Some(format!("Expected HTML, got {}", content_type))
            }
            Self::NetworkError { error } => Some(error.clone()),
            Self::Timeout => Some("Request timeout".to_string()),
        }
    }
}

/// Anything the crawler can fetch pages through
///
/// Implementations must honour `timeout` for the whole request; the crawler
/// also enforces it from the outside.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and classifies the outcome
    async fn fetch(&self, url: &str, timeout: Duration) -> FetchResult;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use doc_harvest::config::UserAgentConfig;
/// use doc_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// `PageFetcher` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &UserAgentConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> FetchResult {
        fetch_url(&self.client, url, timeout).await
    }
}

/// Fetches a URL and classifies the response
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with HTML/text body | `Success` |
/// | Non-2xx | `HttpError` |
/// | 2xx with another Content-Type | `ContentMismatch` |
/// | Timeout | `Timeout` |
/// | Anything else | `NetworkError` |
pub async fn fetch_url(client: &Client, url: &str, timeout: Duration) -> FetchResult {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(response) => response,
        Err(e) => return classify_error(e),
    };

    let status = response.status();
    let final_url = response.url().to_string();

    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_document_content_type(&content_type) {
        return FetchResult::ContentMismatch { content_type };
    }

    match response.text().await {
        Ok(body) => FetchResult::Success {
            final_url,
            status_code: status.as_u16(),
            body,
        },
        Err(e) => classify_error(e),
    }
}

fn classify_error(error: reqwest::Error) -> FetchResult {
    if error.is_timeout() {
        FetchResult::Timeout
    } else if error.is_connect() {
        FetchResult::NetworkError {
            error: "Connection refused".to_string(),
        }
    } else {
        FetchResult::NetworkError {
            error: error.to_string(),
        }
    }
}

/// A missing Content-Type is given the benefit of the doubt
fn is_document_content_type(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.is_empty()
        || content_type.contains("text/html")
        || content_type.contains("application/xhtml")
        || content_type.contains("text/plain")
}
