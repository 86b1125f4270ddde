//! Cache module for crawled documentation
//!
//! # Components
//!
//! - `ContentCache`: the cache seam the preset service talks to
//! - `MemoryCache`: in-process TTL cache
//! - `cache_key`: key derivation from a preset's crawl parameters

mod memory;
mod traits;

pub use memory::MemoryCache;
pub use traits::{CacheEntry, ContentCache};

use crate::config::Preset;
use sha2::{Digest, Sha256};

/// Derives the cache key for a preset
///
/// The key is `web-{title}-{base_url}-{digest}`, where the digest is the
/// SHA-256 hex of the URL patterns, include patterns, focus areas and exclude
/// areas. Presets that share a base URL but crawl differently never collide.
pub fn cache_key(preset: &Preset) -> String {
    let mut hasher = Sha256::new();

    for (label, values) in [
        ("patterns", &preset.url_patterns),
        ("include", &preset.include_url_patterns),
        ("focus", &preset.focus_areas),
        ("exclude", &preset.exclude_areas),
    ] {
        hasher.update(label.as_bytes());
        for value in values {
            hasher.update([0u8]);
            hasher.update(value.as_bytes());
        }
        hasher.update([0xffu8]);
    }

    format!(
        "web-{}-{}-{}",
        preset.title,
        preset.base_url,
        hex::encode(hasher.finalize())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin_presets;

    fn preset(name: &str) -> Preset {
        builtin_presets()
            .into_iter()
            .find(|p| p.name == name)
            .unwrap()
    }

    #[test]
    fn test_cache_key_prefix() {
        let key = cache_key(&preset("pocketbase"));
        assert!(key.starts_with("web-PocketBase-https://pocketbase.io/docs/-"));
        // sha256 hex
        assert_eq!(key.rsplit('-').next().unwrap().len(), 64);
    }

    #[test]
    fn test_cache_key_is_stable() {
        assert_eq!(cache_key(&preset("pocketbase")), cache_key(&preset("pocketbase")));
    }

    #[test]
    fn test_sdk_presets_do_not_collide() {
        let js = preset("pocketbase-js");
        let mut go = js.clone();
        go.include_url_patterns = vec!["go-".to_string()];

        assert_eq!(js.base_url, go.base_url);
        assert_ne!(cache_key(&js), cache_key(&go));
    }

    #[test]
    fn test_values_do_not_shift_between_lists() {
        let mut a = preset("pocketbase");
        a.focus_areas = vec!["api".to_string()];
        a.exclude_areas = Vec::new();

        let mut b = a.clone();
        b.focus_areas = Vec::new();
        b.exclude_areas = vec!["api".to_string()];

        assert_ne!(cache_key(&a), cache_key(&b));
    }
}
