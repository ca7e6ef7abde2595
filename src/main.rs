//! bookbuddy CLI: interactive book recommendations.

use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use bookbuddy::config::Config;
use bookbuddy::engine::Engine;
use bookbuddy::fetch::{HttpFetcher, Scraper};
use bookbuddy::session::Session;

#[derive(Parser)]
#[command(name = "bookbuddy", version, about = "Find books similar to one you like")]
struct Cli {
    /// TOML config file. Built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Book cache file (overrides `cache.path`).
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Number of recommendations per query (overrides `query.top_k`).
    #[arg(long, short = 'k')]
    top_k: Option<usize>,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(cache) = cli.cache {
        config.cache.path = cache;
    }
    if let Some(top_k) = cli.top_k {
        config.query.top_k = top_k;
    }
    config.validate()?;

    let scraper = Scraper::new(
        HttpFetcher::new(&config.source.user_agent),
        config.source.clone(),
    );
    let engine = Engine::bootstrap(&config, &scraper)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(&engine, config.query.clone())
        .run(stdin.lock(), stdout.lock())
        .into_diagnostic()?;

    Ok(())
}
