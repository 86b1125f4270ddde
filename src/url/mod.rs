//! URL handling module for doc-harvest
//!
//! This module provides base URL parsing, relative path computation, glob
//! pattern matching, and the two URL eligibility predicates used by the crawler:
//!
//! - `crawlable`: may the URL be added to the frontier?
//! - `processable`: should the URL's content be extracted into the corpus?

mod filter;
mod matcher;

use crate::UrlError;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

// Re-export main functions
pub use filter::{crawlable, processable};
pub use matcher::{glob_to_regex, GlobPattern, PatternSet, CATCH_ALL};

/// Stylesheets, scripts, images and fonts are never documentation pages
#[allow(clippy::expect_used)]
static ASSET_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(css|js|png|jpg|jpeg|gif|svg|ico|woff|woff2|ttf|eot)$")
        .expect("ASSET_EXTENSION regex")
});

/// Parses a preset base URL
///
/// Only HTTP(S) URLs with a host are accepted.
///
/// # Examples
///
/// ```
/// use doc_harvest::url::parse_base_url;
///
/// let url = parse_base_url("https://pocketbase.io/docs/").unwrap();
/// assert_eq!(url.host_str(), Some("pocketbase.io"));
///
/// assert!(parse_base_url("mailto:docs@example.com").is_err());
/// ```
pub fn parse_base_url(base_url: &str) -> Result<Url, UrlError> {
    let url = Url::parse(base_url).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost);
    }

    Ok(url)
}

/// Returns the part of `url` after the `base_url` prefix
///
/// URLs outside the base are returned unchanged.
///
/// ```
/// use doc_harvest::url::relative_path;
///
/// assert_eq!(relative_path("https://x.dev/docs/guide", "https://x.dev/docs/"), "guide");
/// assert_eq!(relative_path("https://y.dev/a", "https://x.dev/docs/"), "https://y.dev/a");
/// ```
pub fn relative_path<'a>(url: &'a str, base_url: &str) -> &'a str {
    url.strip_prefix(base_url).unwrap_or(url)
}

/// Returns true if the URL ends in a known non-document file extension
pub fn has_asset_extension(url: &str) -> bool {
    ASSET_EXTENSION.is_match(url)
}

/// Returns true if both URLs share scheme, host and port
pub fn same_origin(a: &Url, b: &Url) -> bool {
    a.origin() == b.origin()
}
