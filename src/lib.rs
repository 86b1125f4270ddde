//! doc-harvest: documentation crawler and aggregator for LLM context
//!
//! This crate crawls documentation sites described by named presets, extracts
//! their readable content as markdown-like text, caches the result, and serves
//! the combined corpus over HTTP.

pub mod cache;
pub mod config;
pub mod crawler;
pub mod output;
pub mod server;
pub mod service;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for doc-harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid preset(s): {}", quote_names(.0))]
    UnknownPresets(Vec<String>),

    #[error("No content found for {preset}")]
    EmptyContent { preset: String },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid URL pattern: {0}")]
    InvalidPattern(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL")]
    MissingHost,
}

fn quote_names(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("\"{}\"", name))
        .collect::<Vec<_>>()
        .join(", ")
}

// Re-export commonly used types
pub use cache::{ContentCache, MemoryCache};
pub use config::{Config, Preset};
pub use crawler::{crawl, CrawlConfig, CrawlReport, HttpFetcher, PageFetcher, StopReason};
pub use service::DocsService;
