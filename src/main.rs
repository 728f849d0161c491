//! Bookworm CLI - interactive browser for the Gutendex book catalog.

use anyhow::{Context, Result};
use bookworm::catalog::Catalog;
use bookworm::config::Config;
use bookworm::console::Console;
use bookworm::fetcher::HttpFetcher;
use bookworm::menu::Menu;
use clap::Parser;
use std::path::PathBuf;
use tokio::io::BufReader;

/// Interactive browser for the Gutendex book catalog.
#[derive(Parser, Debug)]
#[command(name = "bookworm")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Read configuration from this file instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog endpoint to query.
    #[arg(long)]
    base_url: Option<String>,

    /// Print fetch debug lines to stderr.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if args.debug {
        config.output.debug = true;
    }

    config.validate().context("Invalid configuration")?;

    let console = if config.output.color {
        Console::new()
    } else {
        Console::with_colors(false)
    };

    console.section("Bookworm - Gutendex Catalog Browser");

    let base_url = config.base_url()?;
    let fetcher = HttpFetcher::new(&config).context("Failed to create HTTP client")?;
    let catalog = Catalog::new(base_url, fetcher);
    if config.output.debug {
        console.step(&format!("Using catalog at {}", catalog.base_url()));
    }

    let stdin = BufReader::new(tokio::io::stdin());
    Menu::new(&catalog, &console, stdin)
        .run()
        .await
        .context("Failed to read from stdin")?;

    Ok(())
}
