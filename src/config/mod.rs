//! Configuration module for doc-harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files,
//! and holds the built-in preset registry used when a file declares none.
//!
//! # Example
//!
//! ```no_run
//! use doc_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("doc-harvest.toml")).unwrap();
//! println!("Crawler will fetch at most {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod presets;
mod types;
mod validation;

// Re-export types
pub use types::{
    CacheConfig, Config, CrawlerConfig, MinimizeOptions, Preset, ServerConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use presets::builtin_presets;
pub use validation::validate;
