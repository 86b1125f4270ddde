//! Built-in preset registry
//!
//! Used whenever the configuration file does not declare any `[[preset]]` tables.

use crate::config::types::{MinimizeOptions, Preset};

const POCKETBASE_DOCS: &str = "https://pocketbase.io/docs/";

fn standard_minimize() -> Option<MinimizeOptions> {
    Some(MinimizeOptions {
        normalize_whitespace: true,
        remove_code_blocks: false,
        remove_square_brackets: false,
        remove_parentheses: false,
        trim: true,
    })
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// PocketBase SDK preset restricted to pages whose path starts with `prefix`
fn pocketbase_sdk(name: &str, title: &str, prefix: &str, excluded_sdks: &[&str]) -> Preset {
    let mut exclude_areas = strings(excluded_sdks);
    exclude_areas.extend(strings(&["introduction", "authentication"]));

    Preset {
        name: name.to_string(),
        title: title.to_string(),
        base_url: POCKETBASE_DOCS.to_string(),
        url_patterns: vec![format!("{}*", prefix)],
        include_url_patterns: vec![prefix.to_string()],
        focus_areas: vec![prefix.to_string()],
        exclude_areas,
        prompt: None,
        minimize: standard_minimize(),
    }
}

/// Returns the presets shipped with the binary
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "pocketbase".to_string(),
            title: "PocketBase".to_string(),
            base_url: POCKETBASE_DOCS.to_string(),
            url_patterns: strings(&["**/*", "!js-*", "!go-*", "!dart-*"]),
            include_url_patterns: Vec::new(),
            focus_areas: strings(&[
                "introduction",
                "api",
                "authentication",
                "collections",
                "records",
            ]),
            exclude_areas: strings(&["going-to-production"]),
            prompt: None,
            minimize: standard_minimize(),
        },
        pocketbase_sdk("pocketbase-js", "PocketBase JavaScript", "js-", &["go-", "dart-"]),
        pocketbase_sdk("pocketbase-go", "PocketBase Go", "go-", &["js-", "dart-"]),
        pocketbase_sdk("pocketbase-dart", "PocketBase Dart", "dart-", &["js-", "go-"]),
        Preset {
            name: "pocketpages".to_string(),
            title: "PocketPages".to_string(),
            base_url: "https://pocketpages.dev/docs".to_string(),
            url_patterns: strings(&["**/*"]),
            include_url_patterns: Vec::new(),
            focus_areas: strings(&[
                "introduction",
                "directory-structure",
                "structure",
                "layouts",
                "plugins",
                "htmx",
            ]),
            exclude_areas: Vec::new(),
            prompt: None,
            minimize: standard_minimize(),
        },
    ]
}
