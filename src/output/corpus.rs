//! Corpus assembly
//!
//! One crawl yields page sections joined by a blank line; one request yields
//! preset blocks joined by a horizontal rule.

use crate::state::PageResult;
use crate::url::relative_path;

/// Separator between the page sections of one crawl
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Separator between the blocks of a multi-preset response
pub const PRESET_SEPARATOR: &str = "\n\n---\n\n";

/// Formats one page as `## Documentation: {relative path}`, a blank line, and its text
pub fn page_section(relative_path: &str, text: &str) -> String {
    format!("## Documentation: {}\n\n{}", relative_path, text)
}

/// Renders each page as a section headed by its path under `base_url`,
/// joined in fetch order
pub fn join_pages(pages: &[PageResult], base_url: &str) -> String {
    pages
        .iter()
        .map(|page| page_section(relative_path(&page.url, base_url), &page.text))
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR)
}

/// Appends the preset's LLM instructions, if any
///
/// # Example
///
/// ```
/// use doc_harvest::output::with_instructions;
///
/// assert_eq!(
///     with_instructions("Docs".to_string(), Some("Be brief")),
///     "Docs\n\nInstructions for LLMs: <SYSTEM>Be brief</SYSTEM>"
/// );
/// ```
pub fn with_instructions(content: String, prompt: Option<&str>) -> String {
    match prompt {
        Some(prompt) if !prompt.is_empty() => {
            format!("{}\n\nInstructions for LLMs: <SYSTEM>{}</SYSTEM>", content, prompt)
        }
        _ => content,
    }
}

/// Joins per-preset blocks in request order
pub fn join_presets<S: AsRef<str>>(blocks: &[S]) -> String {
    blocks
        .iter()
        .map(|block| block.as_ref())
        .collect::<Vec<_>>()
        .join(PRESET_SEPARATOR)
}

/// Attachment filename for a download: the preset names joined by `-`
pub fn download_filename<S: AsRef<str>>(names: &[S]) -> String {
    let stem = names
        .iter()
        .map(|name| name.as_ref())
        .collect::<Vec<_>>()
        .join("-");
    format!("{}.txt", stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_section() {
        assert_eq!(
            page_section("js-records", "Records API"),
            "## Documentation: js-records\n\nRecords API"
        );
        assert_eq!(page_section("", "Home"), "## Documentation: \n\nHome");
    }

    #[test]
    fn test_join_pages() {
        let pages = vec![
            PageResult::new("https://x.dev/docs/", "Home"),
            PageResult::new("https://x.dev/docs/a", "A"),
            PageResult::new("https://x.dev/docs/b/c", "C"),
        ];
        assert_eq!(
            join_pages(&pages, "https://x.dev/docs/"),
            "## Documentation: \n\nHome\n\n## Documentation: a\n\nA\n\n## Documentation: b/c\n\nC"
        );
        assert_eq!(join_pages(&[], "https://x.dev/docs/"), "");
    }

    #[test]
    fn test_without_prompt() {
        assert_eq!(with_instructions("Docs".to_string(), None), "Docs");
        assert_eq!(with_instructions("Docs".to_string(), Some("")), "Docs");
    }

    #[test]
    fn test_join_presets() {
        assert_eq!(join_presets(&["A", "B"]), "A\n\n---\n\nB");
        assert_eq!(join_presets(&["only"]), "only");
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(
            download_filename(&["pocketbase", "pocketpages"]),
            "pocketbase-pocketpages.txt"
        );
        assert_eq!(download_filename(&["pocketbase"]), "pocketbase.txt");
    }
}
