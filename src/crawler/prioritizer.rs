//! Link prioritization for focused crawls

use crate::url::relative_path;
use std::cmp::Reverse;

/// Keywords used when the caller supplies none
pub const DEFAULT_PRIORITY_KEYWORDS: &[&str] = &[
    "api",
    "authentication",
    "collections",
    "records",
    "realtime",
    "files",
    "users",
    "admin",
    "sdk",
    "query",
    "create",
    "update",
    "delete",
    "getting-started",
    "guide",
];

/// Scores a link: shallow paths and keyword hits rank higher
///
/// `score = (5 - min(segments, 5)) + 3 * keyword_hits`, where `segments` counts
/// the `/`-separated parts of the path relative to `base_url`.
pub fn importance_score<S: AsRef<str>>(url: &str, base_url: &str, keywords: &[S]) -> usize {
    let path = relative_path(url, base_url).to_lowercase();
    let segments = path.split('/').count();

    let hits = keywords
        .iter()
        .map(|keyword| keyword.as_ref().to_lowercase())
        .filter(|keyword| path.contains(keyword.as_str()))
        .count();

    (5 - segments.min(5)) + 3 * hits
}

/// Orders links by descending importance
///
/// The sort is stable, so equally scored links keep their discovery order.
pub fn prioritize_links(
    links: Vec<String>,
    base_url: &str,
    keywords: Option<&[String]>,
) -> Vec<String> {
    let mut scored: Vec<(usize, String)> = match keywords {
        Some(keywords) => links
            .into_iter()
            .map(|link| (importance_score(&link, base_url, keywords), link))
            .collect(),
        None => links
            .into_iter()
            .map(|link| {
                (
                    importance_score(&link, base_url, DEFAULT_PRIORITY_KEYWORDS),
                    link,
                )
            })
            .collect(),
    };

    scored.sort_by_key(|(score, _)| Reverse(*score));
    scored.into_iter().map(|(_, link)| link).collect()
}
