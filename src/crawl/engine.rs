// src/crawl/engine.rs
// =============================================================================
// The crawl engine: walks every directory reachable from the seed.
//
// How it works:
// 1. The frontier starts with just the seed URL
// 2. Pop a directory URL and fetch it
// 3. Skip it if the body is empty or does not carry the file signature
// 4. Extract its links; record every new one, queue the new directories
// 5. Repeat until the frontier is empty
//
// One page at a time, no overlap between fetches. A fetch failure or a first
// page without a signature aborts the whole crawl and nothing is returned.
//
// Rust concepts:
// - Generics: CrawlSession<F: Fetch> works with any fetcher
// - State machine: CrawlState tracks Seeded -> Running -> Done/Failed
// - while let: loop until step() says the frontier is empty
// =============================================================================

use super::extract::extract_candidates;
use super::fetch::Fetch;
use super::frontier::Frontier;
use super::normalize::SeedUrl;
use super::signature::{SignatureValidator, Verdict};
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlState {
    Seeded,
    Running,
    Done,
    Failed,
}

// What happened to one fetched page. None of these stop the crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Links were extracted; counts are of URLs seen for the first time
    Mined { new_urls: usize, new_directories: usize },
    /// Zero-length body
    EmptyResponse,
    /// Body does not start with the established signature
    SignatureMismatch,
}

/// Everything one crawl discovered, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlResult {
    urls: Vec<String>,
    pages_fetched: usize,
    pages_skipped: usize,
}

impl CrawlResult {
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    pub fn pages_skipped(&self) -> usize {
        self.pages_skipped
    }

    // Removes the first occurrence of `seed` from every URL. Plain substring
    // removal, so it is not path-aware.
    pub fn strip_seed(&mut self, seed: &str) {
        if seed.is_empty() {
            return;
        }
        for url in &mut self.urls {
            *url = url.replacen(seed, "", 1);
        }
    }
}

// One crawl. Owns its frontier and signature, so several sessions can run in
// the same process without sharing anything.
pub struct CrawlSession<F> {
    fetcher: F,
    seed: SeedUrl,
    frontier: Frontier,
    validator: SignatureValidator,
    state: CrawlState,
    pages_fetched: usize,
    pages_skipped: usize,
}

impl<F: Fetch> CrawlSession<F> {
    pub fn new(seed: SeedUrl, fetcher: F) -> Self {
        let frontier = Frontier::seeded(seed.as_str());
        CrawlSession {
            fetcher,
            seed,
            frontier,
            validator: SignatureValidator::new(),
            state: CrawlState::Seeded,
            pages_fetched: 0,
            pages_skipped: 0,
        }
    }

    pub fn state(&self) -> CrawlState {
        self.state
    }

    pub fn signature(&self) -> Option<&str> {
        self.validator.signature()
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    // Processes one frontier entry.
    //
    // Returns:
    //   Ok(Some(outcome)) = a page was fetched (and maybe skipped)
    //   Ok(None)          = frontier empty, crawl is Done
    //   Err(e)            = fatal, crawl is Failed
    pub async fn step(&mut self) -> Result<Option<PageOutcome>, Error> {
        match self.state {
            CrawlState::Done | CrawlState::Failed => return Ok(None),
            CrawlState::Seeded => {
                tracing::info!(seed = self.seed.as_str(), "starting crawl");
                self.state = CrawlState::Running;
            }
            CrawlState::Running => {}
        }

        let url = match self.frontier.pop() {
            Some(url) => url,
            None => {
                self.state = CrawlState::Done;
                return Ok(None);
            }
        };

        match self.process(&url).await {
            Ok(outcome) => Ok(Some(outcome)),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "crawl aborted");
                self.state = CrawlState::Failed;
                Err(e)
            }
        }
    }

    async fn process(&mut self, url: &str) -> Result<PageOutcome, Error> {
        tracing::debug!(url, "fetching");
        let body = self.fetcher.fetch(url).await?;
        self.pages_fetched += 1;

        if body.is_empty() {
            tracing::debug!(url, "skipped: empty response");
            self.pages_skipped += 1;
            return Ok(PageOutcome::EmptyResponse);
        }

        match self.validator.validate(&body) {
            Verdict::Established | Verdict::Valid => {}
            Verdict::Mismatch => {
                tracing::debug!(url, "skipped: signature mismatch");
                self.pages_skipped += 1;
                return Ok(PageOutcome::SignatureMismatch);
            }
            Verdict::Missing => {
                return Err(Error::NoSignature {
                    url: url.to_string(),
                })
            }
        }

        let mut new_urls = 0;
        let mut new_directories = 0;

        for candidate in extract_candidates(&body, url) {
            let is_directory = candidate.is_directory;
            if self.frontier.admit(candidate) {
                new_urls += 1;
                if is_directory {
                    new_directories += 1;
                }
            }
        }

        tracing::debug!(url, new_urls, new_directories, "page mined");
        Ok(PageOutcome::Mined {
            new_urls,
            new_directories,
        })
    }

    /// Runs the crawl to completion. All or nothing: on any fatal error the
    /// discovered URLs are dropped.
    pub async fn run(mut self) -> Result<CrawlResult, Error> {
        while self.step().await?.is_some() {}

        tracing::info!(
            pages = self.pages_fetched,
            skipped = self.pages_skipped,
            urls = self.frontier.discovered_len(),
            "crawl finished"
        );

        Ok(CrawlResult {
            urls: self.frontier.into_discovered(),
            pages_fetched: self.pages_fetched,
            pages_skipped: self.pages_skipped,
        })
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why is the seed not in the result?
//    - The result lists what the listing pages link to
//    - The seed is the listing itself; only its children are recorded
//
// 2. Why does a first page without <!DOCTYPE> abort?
//    - Without a signature there is no way to tell later listing pages from
//      error or login pages, so the walk could wander anywhere
//
// 3. Why step() and run()?
//    - run() is what the CLI uses
//    - step() lets tests look at the frontier between pages
// -----------------------------------------------------------------------------
