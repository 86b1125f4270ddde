//! doc-harvest main entry point
//!
//! This is the command-line interface for the doc-harvest documentation aggregator.

use anyhow::Context;
use clap::{Parser, Subcommand};
use doc_harvest::config::{load_config_with_hash, Config};
use doc_harvest::server::serve;
use doc_harvest::DocsService;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// doc-harvest: documentation crawler for LLM context
///
/// doc-harvest crawls documentation sites described by named presets,
/// extracts their readable content and serves the combined text over HTTP.
#[derive(Parser, Debug)]
#[command(name = "doc-harvest")]
#[command(version)]
#[command(about = "Documentation crawler and aggregator for LLM context", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG", env = "DOC_HARVEST_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve documentation over HTTP
    Serve {
        /// Address to bind to (overrides the config file)
        #[arg(long, env = "DOC_HARVEST_BIND")]
        bind: Option<String>,
    },

    /// Crawl presets once and print the combined text to stdout
    Crawl {
        /// Comma-separated preset names (e.g. "pocketbase,pocketpages")
        presets: String,
    },

    /// Validate the configuration and list the preset registry
    Presets,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    match cli.command {
        Command::Serve { bind } => handle_serve(config, bind).await,
        Command::Crawl { presets } => handle_crawl(config, &presets).await,
        Command::Presets => {
            handle_presets(&config);
            Ok(())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// `RUST_LOG` takes precedence when set.
fn setup_logging(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        // Only show errors
        "error"
    } else {
        match verbose {
            0 => "doc_harvest=info,warn",
            1 => "doc_harvest=debug,tower_http=debug,info",
            2 => "doc_harvest=trace,debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the serve command: runs the HTTP server until Ctrl-C
async fn handle_serve(mut config: Config, bind: Option<String>) -> anyhow::Result<()> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    let bind = config.server.bind.clone();

    tracing::info!(
        "Serving {} presets (max {} pages, {}ms deadline per crawl)",
        config.presets.len(),
        config.crawler.max_pages,
        config.crawler.deadline_ms
    );

    let service = DocsService::from_config(config)?;

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown requested");
        }
        signal.cancel();
    });

    serve(service, &bind, shutdown)
        .await
        .with_context(|| format!("server on {} failed", bind))
}

/// Handles the crawl command: renders the presets once
async fn handle_crawl(config: Config, presets: &str) -> anyhow::Result<()> {
    let service = DocsService::from_config(config)?;

    match service.render(presets).await {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Handles the presets command: shows the effective configuration
fn handle_presets(config: &Config) {
    println!("=== doc-harvest Presets ===\n");

    println!("Crawler Configuration:");
    println!("  Max pages: {}", config.crawler.max_pages);
    println!("  Deadline: {}ms", config.crawler.deadline_ms);
    println!("  Request timeout: {}ms", config.crawler.request_timeout_ms);
    println!("  Max links per page: {}", config.crawler.max_links_per_page);
    println!("  Cache TTL: {}s", config.cache.ttl_secs);

    println!("\nUser Agent: {}", config.user_agent.header_value());

    println!("\nPresets ({}):", config.presets.len());
    for preset in &config.presets {
        println!("  - {} ({})", preset.name, preset.title);
        println!("    base: {}", preset.base_url);
        if !preset.url_patterns.is_empty() {
            println!("    patterns: {}", preset.url_patterns.join(", "));
        }
        if !preset.include_url_patterns.is_empty() {
            println!("    include: {}", preset.include_url_patterns.join(", "));
        }
        if !preset.focus_areas.is_empty() {
            println!("    focus: {}", preset.focus_areas.join(", "));
        }
        if !preset.exclude_areas.is_empty() {
            println!("    exclude: {}", preset.exclude_areas.join(", "));
        }
    }

    println!("\n✓ Configuration is valid");
}
