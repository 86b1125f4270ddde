use crate::state::PageResult;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use tokio::time::Instant;

/// Mutable state of a single crawl invocation
///
/// Created fresh for every crawl and discarded once the corpus is assembled.
/// The visited set only ever grows; the frontier is a FIFO queue.
#[derive(Debug)]
pub struct CrawlState {
    /// URLs that have been fetched (or attempted)
    visited: HashSet<String>,

    /// Discovered URLs waiting to be fetched, earliest first
    frontier: VecDeque<String>,

    /// Number of page fetches issued
    page_count: usize,

    /// When the crawl started
    started_at: Instant,

    /// Wall-clock budget for the crawl
    deadline: Duration,

    /// Extracted pages in fetch order
    pages: Vec<PageResult>,
}

impl CrawlState {
    pub fn new(deadline: Duration) -> Self {
        Self {
            visited: HashSet::new(),
            frontier: VecDeque::new(),
            page_count: 0,
            started_at: Instant::now(),
            deadline,
            pages: Vec::new(),
        }
    }

    /// Replaces the frontier with the seed URLs
    pub fn seed<I: IntoIterator<Item = String>>(&mut self, urls: I) {
        self.frontier = urls.into_iter().collect();
    }

    /// Appends a URL to the frontier tail
    pub fn enqueue(&mut self, url: String) {
        self.frontier.push_back(url);
    }

    /// Pops the earliest queued URL
    pub fn next_url(&mut self) -> Option<String> {
        self.frontier.pop_front()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Marks a URL visited and counts it as a page fetch
    ///
    /// Returns false if the URL had already been visited.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        if !self.visited.insert(url.to_string()) {
            return false;
        }
        self.page_count += 1;
        true
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Returns true once the crawl budget is spent
    pub fn deadline_elapsed(&self) -> bool {
        self.elapsed() >= self.deadline
    }

    pub fn push_page(&mut self, page: PageResult) {
        self.pages.push(page);
    }

    /// Consumes the state, yielding the extracted pages in order
    pub fn into_pages(self) -> Vec<PageResult> {
        self.pages
    }
}
