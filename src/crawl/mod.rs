// src/crawl/mod.rs
// =============================================================================
// This module maps a directory-listing site.
//
// Submodules (leaf first):
// - normalize: seed validation and href resolution
// - signature: fingerprint of the first page, checked on every later page
// - extract:   candidate links from one listing page
// - frontier:  pending directories + every URL seen so far
// - fetch:     the Fetch seam and the reqwest implementation
// - engine:    the loop that ties them together
// =============================================================================

mod engine;
mod extract;
mod fetch;
mod frontier;
mod normalize;
mod signature;

pub use normalize::SeedUrl;

use engine::{CrawlResult, CrawlSession};
use fetch::HttpFetcher;

use crate::error::Error;
use std::time::Duration;

// Settings for one crawl, already validated
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub seed: SeedUrl,
    pub timeout: Option<Duration>,
}

// Crawls a listing site over HTTP and returns every URL it links to
pub async fn crawl_listing(config: &CrawlConfig) -> Result<CrawlResult, Error> {
    let fetcher = HttpFetcher::new(config.timeout)?;
    CrawlSession::new(config.seed.clone(), fetcher).run().await
}
