//! Preset aggregation service
//!
//! Turns a comma-separated list of preset names into one text document:
//! every preset is crawled (or served from cache) concurrently, minimized,
//! wrapped with its LLM instructions, and the blocks are joined in request order.

use crate::cache::{cache_key, ContentCache, MemoryCache};
use crate::config::{Config, Preset};
use crate::crawler::{Coordinator, HttpFetcher, PageFetcher};
use crate::output::{join_presets, minimize, with_instructions};
use crate::HarvestError;
use futures::future::try_join_all;
use std::sync::Arc;

/// Serves preset documentation from the cache or a fresh crawl
pub struct DocsService {
    config: Config,
    cache: Arc<dyn ContentCache>,
    fetcher: Arc<dyn PageFetcher>,
}

impl DocsService {
    pub fn new(
        config: Config,
        cache: Arc<dyn ContentCache>,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        Self {
            config,
            cache,
            fetcher,
        }
    }

    /// Builds a service with an HTTP fetcher and an in-memory cache
    pub fn from_config(config: Config) -> Result<Self, HarvestError> {
        let fetcher = HttpFetcher::new(&config.user_agent)?;
        Ok(Self::new(
            config,
            Arc::new(MemoryCache::new()),
            Arc::new(fetcher),
        ))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn presets(&self) -> &[Preset] {
        &self.config.presets
    }

    /// Resolves a comma-separated name list against the registry
    ///
    /// Names are trimmed. Fails with every unknown name if any is unknown.
    pub fn resolve(&self, names: &str) -> Result<Vec<&Preset>, HarvestError> {
        let names = split_names(names);

        let unknown: Vec<String> = names
            .iter()
            .filter(|name| self.config.preset(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !unknown.is_empty() {
            return Err(HarvestError::UnknownPresets(unknown));
        }

        Ok(names
            .iter()
            .filter_map(|name| self.config.preset(name))
            .collect())
    }

    /// Returns the minimized crawl content of one preset
    ///
    /// Content is cached under the preset's cache key for the configured TTL.
    /// Empty content is an error and is never cached.
    pub async fn preset_content(&self, preset: &Preset) -> Result<String, HarvestError> {
        let key = cache_key(preset);

        if let Some(entry) = self.cache.get(&key) {
            tracing::debug!(
                "Using cached content for {} (stored {})",
                preset.title,
                entry.stored_at
            );
            return Ok(entry.content);
        }

        tracing::info!("Fetching fresh content for {}", preset.title);

        let config = preset.crawl_config(&self.config.crawler);
        let report = Coordinator::new(config, self.fetcher.clone())?.run().await;

        let content = match &preset.minimize {
            Some(options) => minimize(&report.content, options),
            None => report.content,
        };

        tracing::info!("Content length for {}: {}", preset.name, content.len());

        if content.is_empty() {
            tracing::warn!(
                "No content for {} ({} fetched, {} failed, {} filtered, stop: {:?})",
                preset.name,
                report.pages_fetched,
                report.failed_fetches,
                report.skipped_unprocessable,
                report.stop_reason
            );
            return Err(HarvestError::EmptyContent {
                preset: preset.name.clone(),
            });
        }

        self.cache.put(&key, content.clone(), self.config.cache.ttl());
        Ok(content)
    }

    /// Renders the combined document for a comma-separated preset list
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Preset blocks joined by `\n\n---\n\n`
    /// * `Err(HarvestError::UnknownPresets)` - At least one name is not registered
    /// * `Err(HarvestError)` - Any preset failed or came back empty
    pub async fn render(&self, names: &str) -> Result<String, HarvestError> {
        let presets = self.resolve(names)?;

        let blocks = try_join_all(presets.iter().map(|preset| async move {
            let content = self.preset_content(preset).await?;
            Ok::<_, HarvestError>(with_instructions(content, preset.prompt.as_deref()))
        }))
        .await?;

        Ok(join_presets(&blocks))
    }
}

/// Splits a comma-separated preset list, trimming each name
pub fn split_names(names: &str) -> Vec<&str> {
    names.split(',').map(str::trim).collect()
}
