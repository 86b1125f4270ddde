//! Crawler module for documentation page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `PageFetcher` seam
//! - HTML link extraction and content extraction
//! - Link prioritization for focused crawls
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod parser;
mod prioritizer;

pub use coordinator::{Coordinator, CrawlReport, StopReason};
pub use extractor::extract_content;
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use parser::extract_links;
pub use prioritizer::{importance_score, prioritize_links, DEFAULT_PRIORITY_KEYWORDS};

use crate::HarvestError;
use std::sync::Arc;
use std::time::Duration;

/// Everything one crawl needs to know
///
/// Usually built from a preset with `Preset::crawl_config`.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Display name, used in logs
    pub title: String,

    /// Absolute URL prefix; every crawled URL lies under it
    pub base_url: String,

    /// Glob patterns (`!` negates) deciding which links are queued
    pub url_patterns: Vec<String>,

    /// Path prefixes that seed the crawl and restrict processing
    pub include_url_patterns: Vec<String>,

    /// Path keywords that restrict processing and drive prioritization
    pub focus_areas: Vec<String>,

    /// Path keywords that veto processing
    pub exclude_areas: Vec<String>,

    /// Maximum number of page fetches
    pub max_pages: usize,

    /// Crawl-wide time budget
    pub deadline: Duration,

    /// Per-request time budget
    pub request_timeout: Duration,

    /// Links queued per fetched page, after prioritization
    pub max_links_per_page: usize,
}

/// Runs a complete crawl and returns the aggregated content
///
/// This is the main entry point for a one-off crawl. It will:
/// 1. Validate the base URL and compile the URL patterns
/// 2. Seed the frontier
/// 3. Fetch, extract and follow links until a limit is hit
/// 4. Join the page sections into one document
///
/// An empty string is a valid result; use `Coordinator` directly to learn why
/// a crawl came back empty.
///
/// # Returns
///
/// * `Ok(String)` - Aggregated content, possibly empty
/// * `Err(HarvestError)` - Invalid base URL or URL pattern
pub async fn crawl(
    config: CrawlConfig,
    fetcher: Arc<dyn PageFetcher>,
) -> Result<String, HarvestError> {
    let report = Coordinator::new(config, fetcher)?.run().await;
    Ok(report.content)
}
