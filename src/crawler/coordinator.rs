//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that drives one documentation crawl:
//! - Seeding the frontier (directly, or from an index-page scan)
//! - Filtering URLs for processing and for queuing
//! - Fetching, extracting content and discovering links
//! - Stopping on frontier exhaustion, page ceiling, deadline or cancellation

use crate::crawler::extractor::extract_content;
use crate::crawler::fetcher::{FetchResult, PageFetcher};
use crate::crawler::parser::extract_links;
use crate::crawler::prioritizer::prioritize_links;
use crate::crawler::CrawlConfig;
use crate::output::join_pages;
use crate::state::{CrawlState, PageResult};
use crate::url::{crawlable, parse_base_url, processable, relative_path, PatternSet};
use crate::HarvestError;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Why a crawl stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every queued URL was handled
    FrontierExhausted,
    /// `max_pages` fetches were issued
    PageLimit,
    /// The crawl-wide deadline elapsed
    Deadline,
    /// The cancellation token fired
    Cancelled,
}

/// Outcome of one crawl
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Page sections joined with a blank line; possibly empty
    pub content: String,

    /// Pages that yielded content, in fetch order
    pub pages: Vec<PageResult>,

    /// Page fetches issued (the index scan is not counted)
    pub pages_fetched: usize,

    /// Page fetches that failed or timed out
    pub failed_fetches: usize,

    /// Popped URLs dropped by the processable filter
    pub skipped_unprocessable: usize,

    pub stop_reason: StopReason,

    pub elapsed: Duration,
}

impl CrawlReport {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: CrawlConfig,
    base_url: Url,
    patterns: PatternSet,
    fetcher: Arc<dyn PageFetcher>,
    cancel: Option<CancellationToken>,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Fails if the base URL is not an HTTP(S) URL or a URL pattern cannot be compiled.
    /// The stored base URL is the parsed serialization, the form discovered links take.
    pub fn new(
        mut config: CrawlConfig,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Result<Self, HarvestError> {
        let base_url = parse_base_url(&config.base_url)?;
        config.base_url = base_url.as_str().to_string();
        let patterns = PatternSet::compile(&config.url_patterns)?;

        Ok(Self {
            config,
            base_url,
            patterns,
            fetcher,
            cancel: None,
        })
    }

    /// Stops the crawl early once `token` is cancelled
    ///
    /// The token is checked before every page, alongside the deadline.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Runs the crawl loop to completion
    ///
    /// Per-page failures are logged and skipped; partial content is a valid result.
    pub async fn run(&self) -> CrawlReport {
        tracing::info!(
            "Starting crawl for {} (include={:?}, focus={:?}, exclude={:?})",
            self.config.title,
            self.config.include_url_patterns,
            self.config.focus_areas,
            self.config.exclude_areas
        );

        let mut state = CrawlState::new(self.config.deadline);
        let seeds = self.seed_urls(&state).await;
        state.seed(seeds);

        let mut failed_fetches = 0;
        let mut skipped_unprocessable = 0;

        let stop_reason = loop {
            if self.is_cancelled() {
                tracing::info!("Crawl for {} cancelled", self.config.title);
                break StopReason::Cancelled;
            }

            if state.deadline_elapsed() {
                tracing::info!("Deadline reached, stopping crawl for {}", self.config.title);
                break StopReason::Deadline;
            }

            if state.page_count() >= self.config.max_pages {
                break StopReason::PageLimit;
            }

            let Some(url) = state.next_url() else {
                break StopReason::FrontierExhausted;
            };

            if state.is_visited(&url) {
                continue;
            }

            if !processable(&url, &self.config) {
                tracing::debug!("Skipping URL (filtered out): {}", url);
                skipped_unprocessable += 1;
                continue;
            }

            state.mark_visited(&url);
            tracing::debug!(
                "Fetching {} ({}/{}, {} queued)",
                url,
                state.page_count(),
                self.config.max_pages,
                state.frontier_len()
            );

            if !self.process_url(&mut state, &url).await {
                failed_fetches += 1;
            }
        };

        let elapsed = state.elapsed();
        let pages_fetched = state.page_count();
        let pages = state.into_pages();
        let content = join_pages(&pages, &self.config.base_url);

        tracing::info!(
            "Crawled {} pages from {} documentation in {:?} ({} with content, stop: {:?})",
            pages_fetched,
            self.config.title,
            elapsed,
            pages.len(),
            stop_reason
        );

        CrawlReport {
            content,
            pages,
            pages_fetched,
            failed_fetches,
            skipped_unprocessable,
            stop_reason,
            elapsed,
        }
    }

    /// Builds the initial frontier
    ///
    /// With include patterns the base page is scanned for links whose path
    /// starts with one of them; if the scan fails or finds nothing, the frontier
    /// falls back to `base_url + first include pattern`.
    async fn seed_urls(&self, state: &CrawlState) -> Vec<String> {
        let base = &self.config.base_url;

        let Some(first_pattern) = self.config.include_url_patterns.first() else {
            return vec![base.clone()];
        };
        let fallback = format!("{}{}", base, first_pattern);

        if state.deadline_elapsed() || self.is_cancelled() {
            return vec![fallback];
        }

        tracing::info!(
            "Fetching main index page to find all {} documentation links",
            self.config.title
        );

        let Some(html) = self.fetch_page(base).await else {
            tracing::info!("Index scan failed, using fallback: {}", fallback);
            return vec![fallback];
        };

        let prefixes: Vec<String> = self
            .config
            .include_url_patterns
            .iter()
            .map(|p| p.to_lowercase())
            .collect();

        let seeds: Vec<String> = extract_links(&html, &self.base_url)
            .into_iter()
            .filter(|link| {
                let path = relative_path(link, base).to_lowercase();
                prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
            })
            .collect();

        tracing::info!(
            "Found {} initial {} documentation links",
            seeds.len(),
            self.config.title
        );

        if seeds.is_empty() {
            tracing::info!("No matching pages found, using fallback: {}", fallback);
            return vec![fallback];
        }

        seeds
    }

    /// Fetches one page, extracts its content and queues its links
    ///
    /// Returns false if the fetch failed.
    async fn process_url(&self, state: &mut CrawlState, url: &str) -> bool {
        let Some(html) = self.fetch_page(url).await else {
            return false;
        };

        let text = extract_content(&html);
        if !text.trim().is_empty() {
            state.push_page(PageResult::new(url, text));
        }

        let links = extract_links(&html, &self.base_url);
        for link in self.select_links(state, links) {
            state.enqueue(link);
        }

        true
    }

    /// Filters discovered links and caps the per-page fan-out
    ///
    /// Links are reordered by priority first when focus areas are configured.
    fn select_links(&self, state: &CrawlState, links: Vec<String>) -> Vec<String> {
        let ordered = if self.config.focus_areas.is_empty() {
            links
        } else {
            prioritize_links(
                links,
                &self.config.base_url,
                Some(self.config.focus_areas.as_slice()),
            )
        };

        ordered
            .into_iter()
            .filter(|link| {
                !state.is_visited(link) && crawlable(link, &self.config.base_url, &self.patterns)
            })
            .take(self.config.max_links_per_page)
            .collect()
    }

    /// Fetches a URL under the per-request timeout
    async fn fetch_page(&self, url: &str) -> Option<String> {
        let timeout = self.config.request_timeout;
        let result = tokio::time::timeout(timeout, self.fetcher.fetch(url, timeout))
            .await
            .unwrap_or(FetchResult::Timeout);

        if let Some(reason) = result.failure_reason() {
            tracing::warn!("Failed to fetch {}: {}", url, reason);
        }

        result.into_body()
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}
