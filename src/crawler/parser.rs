//! HTML parser for extracting same-site links
//!
//! Only `<a href="...">` anchors are considered. Resolution always happens
//! against the crawl's base URL, not the page the link was found on.

use crate::url::same_origin;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts the deduplicated same-site links of an HTML page
///
/// # Link Rules
///
/// **Resolve:**
/// - Absolute `http(s)` hrefs are kept only if they start with `base_url`
/// - Root-relative (`/path`) hrefs resolve against the base URL's origin
/// - Other relative hrefs resolve against the base URL itself
///
/// **Exclude:**
/// - Empty and fragment-only (`#section`) hrefs
/// - `javascript:`, `mailto:`, `tel:` and `data:` links
/// - Relative hrefs that resolve to another origin (e.g. `//cdn.example.com/x`)
///
/// Fragments are stripped so `page#a` and `page#b` collapse into `page`.
/// The result keeps first-seen order.
///
/// # Example
///
/// ```
/// use doc_harvest::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<a href="/docs/guide">Guide</a><a href="https://other.dev/">Other</a>"#;
/// let base = Url::parse("https://x.dev/docs/").unwrap();
/// assert_eq!(extract_links(html, &base), vec!["https://x.dev/docs/guide".to_string()]);
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    let Ok(selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(link) = resolve_link(href, base_url) {
            if seen.insert(link.clone()) {
                links.push(link);
            }
        }
    }

    links
}

/// Resolves a link href to an absolute same-site URL
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
        || lower.starts_with("data:")
    {
        return None;
    }

    let is_absolute = lower.starts_with("http://") || lower.starts_with("https://");

    let mut resolved = base_url.join(href).ok()?;
    resolved.set_fragment(None);

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    if is_absolute {
        // Absolute links must stay under the configured prefix
        if !resolved.as_str().starts_with(base_url.as_str()) {
            return None;
        }
    } else if !same_origin(&resolved, base_url) {
        return None;
    }

    Some(resolved.to_string())
}
