//! Content extraction from raw HTML
//!
//! A deliberately forgiving, regex-driven converter: it narrows the document to
//! its main content region, drops scripts, styles and comments, rewrites common
//! block and inline tags as markdown, strips whatever markup remains and
//! unescapes the basic entities. Malformed HTML degrades the output but never
//! fails.

#![allow(clippy::expect_used)]

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static MAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<main\b[^>]*>(.*?)</main>").expect("MAIN regex"));

static BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body\b[^>]*>(.*?)</body>").expect("BODY regex"));

static ARTICLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<article\b[^>]*>(.*?)</article>").expect("ARTICLE regex")
});

static SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b.*?</script\s*>").expect("SCRIPT regex"));

static STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b.*?</style\s*>").expect("STYLE regex"));

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("COMMENT regex"));

/// `<h1>` through `<h6>`, each paired with its own closing tag
static HEADINGS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    (1..=6)
        .map(|level| {
            Regex::new(&format!(r"(?is)<h{level}\b[^>]*>(.*?)</h{level}>"))
                .expect("HEADING regex")
        })
        .collect()
});

static PARAGRAPH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p>").expect("PARAGRAPH regex"));

static UNORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<ul\b[^>]*>(.*?)</ul>").expect("UNORDERED_LIST regex"));

static ORDERED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<ol\b[^>]*>(.*?)</ol>").expect("ORDERED_LIST regex"));

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<li\b[^>]*>(.*?)</li>").expect("LIST_ITEM regex"));

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<pre\b[^>]*>\s*<code\b[^>]*>(.*?)</code>\s*</pre>")
        .expect("CODE_BLOCK regex")
});

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<code\b[^>]*>(.*?)</code>").expect("INLINE_CODE regex"));

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\b[^>]*?\bhref=["']([^"']+)["'][^>]*>(.*?)</a>"#).expect("LINK regex")
});

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("ANY_TAG regex"));

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("EXCESS_NEWLINES regex"));

/// Entity replacements; `&amp;` is decoded after the others
const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&amp;", "&"),
    ("&nbsp;", " "),
];

/// Converts raw HTML into cleaned markdown-like text
///
/// # Example
///
/// ```
/// use doc_harvest::crawler::extract_content;
///
/// let text = extract_content("<main><h1>Title</h1><p>Body text</p></main>");
/// assert_eq!(text, "# Title\n\nBody text");
/// ```
pub fn extract_content(html: &str) -> String {
    let region = content_region(html);

    let mut text = region.to_string();
    for pattern in [&*SCRIPT, &*STYLE, &*COMMENT] {
        text = replace(pattern, &text, "");
    }

    text = to_markdown(&text);
    text = replace(&ANY_TAG, &text, "");
    text = unescape_entities(&text);
    text = replace(&EXCESS_NEWLINES, &text, "\n\n");

    text.trim().to_string()
}

/// Picks `<main>`, else `<body>`, else the whole document, then narrows to an
/// `<article>` inside it when there is one
fn content_region(html: &str) -> &str {
    let region = first_capture(&MAIN, html)
        .or_else(|| first_capture(&BODY, html))
        .unwrap_or(html);

    first_capture(&ARTICLE, region).unwrap_or(region)
}

fn first_capture<'a>(pattern: &Regex, haystack: &'a str) -> Option<&'a str> {
    pattern
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn to_markdown(html: &str) -> String {
    let mut text = html.to_string();

    for (index, pattern) in HEADINGS.iter().enumerate() {
        let replacement = format!("{} ${{1}}\n\n", "#".repeat(index + 1));
        text = replace(pattern, &text, &replacement);
    }

    text = replace(&PARAGRAPH, &text, "${1}\n\n");
    text = replace(&UNORDERED_LIST, &text, "${1}\n");
    text = replace(&ORDERED_LIST, &text, "${1}\n");
    text = replace(&LIST_ITEM, &text, "- ${1}\n");
    text = replace(&CODE_BLOCK, &text, "```\n${1}\n```\n");
    text = replace(&INLINE_CODE, &text, "`${1}`");
    text = replace(&LINK, &text, "[${2}](${1})");

    text
}

fn replace(pattern: &Regex, text: &str, replacement: &str) -> String {
    match pattern.replace_all(text, replacement) {
        Cow::Borrowed(_) => text.to_string(),
        Cow::Owned(replaced) => replaced,
    }
}

fn unescape_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}
