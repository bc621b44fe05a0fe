// src/main.rs
// =============================================================================
// Entry point of the index-intruder CLI.
//
// What happens here:
// 1. Parse command-line arguments and set up logging
// 2. Validate URL, format and output path (no network yet)
// 3. Crawl the listing
// 4. Render the result and print it or write it to a file
// 5. Exit with 0 on success, 1 on any error
//
// Errors are all-or-nothing: if anything fatal happens during the crawl,
// nothing is printed or written except the error.
// =============================================================================

mod cli;
mod crawl;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use crawl::{CrawlConfig, SeedUrl};
use output::{Destination, OutputFormat};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.downcast_ref::<error::Error>().is_some_and(error::Error::is_transport) {
                eprintln!("If the crawl continued, the list would be incorrect.");
                eprintln!("Crawl terminated.");
            }
            1
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr; stdout is reserved for the result.
// RUST_LOG wins over --verbose when set.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,index_intruder=debug"
    } else {
        "warn,index_intruder=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    // Validate everything before the first request goes out
    let seed = SeedUrl::parse(&cli.url)?;
    let format: OutputFormat = cli.format.parse()?;
    let destination = Destination::from_arg(cli.output.as_deref())?;

    let config = CrawlConfig {
        seed,
        timeout: cli.timeout.map(Duration::from_secs),
    };

    let mut result = crawl::crawl_listing(&config).await?;

    if cli.strip_url {
        // strip what the user typed, not the normalized seed
        result.strip_seed(config.seed.raw());
    }

    tracing::info!(
        urls = result.urls().len(),
        pages = result.pages_fetched(),
        skipped = result.pages_skipped(),
        "rendering results"
    );

    let data = format.render(result.urls())?;
    destination.emit(&data)?;

    Ok(0)
}
