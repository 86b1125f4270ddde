use crate::config::types::{Config, CrawlerConfig, Preset, UserAgentConfig};
use crate::url::parse_base_url;
use crate::ConfigError;
use std::collections::HashSet;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_presets(&config.presets)?;
    Ok(())
}

/// Validates crawl limits
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 {
        return Err(ConfigError::Validation(format!(
            "max-pages must be >= 1, got {}",
            config.max_pages
        )));
    }

    if config.deadline_ms < 1 {
        return Err(ConfigError::Validation(format!(
            "deadline-ms must be >= 1, got {}",
            config.deadline_ms
        )));
    }

    if config.request_timeout_ms < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-ms must be >= 1, got {}",
            config.request_timeout_ms
        )));
    }

    if config.max_links_per_page < 1 {
        return Err(ConfigError::Validation(format!(
            "max-links-per-page must be >= 1, got {}",
            config.max_links_per_page
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if let Some(contact_url) = &config.contact_url {
        url::Url::parse(contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    Ok(())
}

/// Validates the preset registry
fn validate_presets(presets: &[Preset]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for preset in presets {
        validate_preset_name(&preset.name)?;

        if !seen.insert(preset.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Duplicate preset name '{}'",
                preset.name
            )));
        }

        parse_base_url(&preset.base_url).map_err(|e| {
            ConfigError::InvalidUrl(format!(
                "Invalid base-url '{}' for preset '{}': {}",
                preset.base_url, preset.name, e
            ))
        })?;

        let pattern_lists = [
            ("url-patterns", &preset.url_patterns),
            ("include-url-patterns", &preset.include_url_patterns),
            ("focus-areas", &preset.focus_areas),
            ("exclude-areas", &preset.exclude_areas),
        ];

        for (field, values) in pattern_lists {
            if values.iter().any(|v| v.trim().is_empty() || v == "!") {
                return Err(ConfigError::InvalidPattern(format!(
                    "Preset '{}' has an empty entry in {}",
                    preset.name, field
                )));
            }
        }
    }

    Ok(())
}

/// Preset names travel in a comma-separated path segment
fn validate_preset_name(name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "Preset name cannot be empty".to_string(),
        ));
    }

    if name.contains(',') || name.contains('/') || name != name.trim() {
        return Err(ConfigError::Validation(format!(
            "Preset name '{}' cannot contain ',', '/' or surrounding whitespace",
            name
        )));
    }

    Ok(())
}
