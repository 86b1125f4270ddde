use crate::config::presets::builtin_presets;
use crate::crawler::CrawlConfig;
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for doc-harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    /// Preset registry. An empty list falls back to the built-in presets.
    #[serde(rename = "preset", default)]
    pub presets: Vec<Preset>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            crawler: CrawlerConfig::default(),
            cache: CacheConfig::default(),
            user_agent: UserAgentConfig::default(),
            presets: builtin_presets(),
        }
    }
}

impl Config {
    /// Looks up a preset by its exact name
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to (host:port)
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

/// Crawl limits shared by every preset
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Maximum number of pages fetched per crawl
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,

    /// Wall-clock budget for one crawl (milliseconds)
    #[serde(rename = "deadline-ms", default = "default_deadline_ms")]
    pub deadline_ms: u64,

    /// Timeout for a single page request (milliseconds)
    #[serde(rename = "request-timeout-ms", default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Maximum number of discovered links queued per fetched page
    #[serde(rename = "max-links-per-page", default = "default_max_links_per_page")]
    pub max_links_per_page: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
            deadline_ms: default_deadline_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            max_links_per_page: default_max_links_per_page(),
        }
    }
}

fn default_max_pages() -> usize {
    25
}

fn default_deadline_ms() -> u64 {
    45_000
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_max_links_per_page() -> usize {
    5
}

/// Response cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// How long a crawled corpus stays fresh (seconds). 0 disables caching.
    #[serde(rename = "ttl-secs", default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    24 * 60 * 60
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url", default)]
    pub contact_url: Option<String>,
}

impl UserAgentConfig {
    /// Formats the header value: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        match &self.contact_url {
            Some(url) => format!("{}/{} (+{})", self.crawler_name, self.crawler_version, url),
            None => format!("{}/{}", self.crawler_name, self.crawler_version),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
            contact_url: None,
        }
    }
}

fn default_crawler_name() -> String {
    "doc-harvest".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// A named documentation source
#[derive(Debug, Clone, Deserialize)]
pub struct Preset {
    /// Name used in request paths (e.g. `pocketbase-js`)
    pub name: String,

    /// Human readable title, used for logging and cache keys
    pub title: String,

    /// Origin plus path prefix of the documentation tree
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Glob patterns (`*` wildcard, `!` negation) for links worth following
    #[serde(rename = "url-patterns", default)]
    pub url_patterns: Vec<String>,

    /// Path prefixes a page must start with to be extracted
    #[serde(rename = "include-url-patterns", default)]
    pub include_url_patterns: Vec<String>,

    /// Keywords that select and prioritize pages
    #[serde(rename = "focus-areas", default)]
    pub focus_areas: Vec<String>,

    /// Keywords that veto pages
    #[serde(rename = "exclude-areas", default)]
    pub exclude_areas: Vec<String>,

    /// Instructions appended for language models
    #[serde(default)]
    pub prompt: Option<String>,

    /// Post-crawl minimization of the corpus
    #[serde(default)]
    pub minimize: Option<MinimizeOptions>,
}

impl Preset {
    /// Builds the crawl input for this preset under the given limits
    pub fn crawl_config(&self, limits: &CrawlerConfig) -> CrawlConfig {
        CrawlConfig {
            title: self.title.clone(),
            base_url: self.base_url.clone(),
            url_patterns: self.url_patterns.clone(),
            include_url_patterns: self.include_url_patterns.clone(),
            focus_areas: self.focus_areas.clone(),
            exclude_areas: self.exclude_areas.clone(),
            max_pages: limits.max_pages,
            deadline: Duration::from_millis(limits.deadline_ms),
            request_timeout: Duration::from_millis(limits.request_timeout_ms),
            max_links_per_page: limits.max_links_per_page,
        }
    }
}

/// Options for shrinking a corpus before it is served
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MinimizeOptions {
    /// Collapse every whitespace run to a single space
    #[serde(rename = "normalize-whitespace", default)]
    pub normalize_whitespace: bool,

    /// Drop fenced code blocks
    #[serde(rename = "remove-code-blocks", default)]
    pub remove_code_blocks: bool,

    /// Drop `[...]` spans
    #[serde(rename = "remove-square-brackets", default)]
    pub remove_square_brackets: bool,

    /// Drop `(...)` spans
    #[serde(rename = "remove-parentheses", default)]
    pub remove_parentheses: bool,

    /// Trim leading and trailing whitespace
    #[serde(default)]
    pub trim: bool,
}
