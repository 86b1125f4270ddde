use crate::crawler::CrawlConfig;
use crate::url::matcher::PatternSet;
use crate::url::{has_asset_extension, relative_path};

/// Decides whether a URL's content belongs in the corpus
///
/// Keyword checks are case-insensitive substring (or prefix) tests against the
/// lower-cased path relative to the base URL.
///
/// # Decision Order
///
/// 1. Any `exclude_areas` keyword in the path → false (unconditional veto)
/// 2. `include_url_patterns` configured → true iff the path starts with one
/// 3. `focus_areas` configured → true iff the path contains one
/// 4. Nothing configured → true
pub fn processable(url: &str, config: &CrawlConfig) -> bool {
    let path = relative_path(url, &config.base_url).to_lowercase();

    if let Some(area) = config
        .exclude_areas
        .iter()
        .find(|area| path.contains(&area.to_lowercase()))
    {
        tracing::debug!("EXCLUDE: {} matches exclude area {}", url, area);
        return false;
    }

    if !config.include_url_patterns.is_empty() {
        return config
            .include_url_patterns
            .iter()
            .any(|prefix| path.starts_with(&prefix.to_lowercase()));
    }

    if !config.focus_areas.is_empty() {
        let focused = config
            .focus_areas
            .iter()
            .any(|area| path.contains(&area.to_lowercase()));
        if !focused {
            tracing::debug!("EXCLUDE: {} doesn't match any focus area", url);
        }
        return focused;
    }

    true
}

/// Decides whether a discovered URL may join the frontier
///
/// Off-site URLs and static assets are always rejected; the rest are judged
/// by the pattern set against the path relative to `base_url`.
pub fn crawlable(url: &str, base_url: &str, patterns: &PatternSet) -> bool {
    let Some(path) = url.strip_prefix(base_url) else {
        return false;
    };

    if has_asset_extension(url) {
        return false;
    }

    patterns.allows(path)
}
