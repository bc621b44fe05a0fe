// src/crawl/normalize.rs
// =============================================================================
// URL normalization.
//
// Listing pages link their children with plain relative hrefs ("sub/",
// "file.txt"), so a child URL is just the page URL with the href glued on.
// That only works if every page URL ends in '/', which is why the seed gets
// a trailing slash before the first fetch.
//
// No percent-decoding, no host rewriting, no slash collapsing: what the
// server wrote is what we record.
// =============================================================================

use crate::error::Error;
use url::Url;

/// The validated starting URL.
///
/// Keeps both the string the user typed (`raw`, used for --strip-url) and the
/// directory form every relative href is resolved against (`base`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedUrl {
    raw: String,
    base: String,
}

impl SeedUrl {
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let parsed = Url::parse(raw).map_err(|e| Error::InvalidSeedUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidSeedUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(SeedUrl {
            raw: raw.to_string(),
            base: ensure_trailing_slash(raw),
        })
    }

    /// The normalized directory URL the crawl starts from
    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// The seed exactly as supplied
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

// Callers must have rejected empty hrefs already.
pub fn resolve(page_url: &str, href: &str) -> String {
    format!("{}{}", page_url, href)
}
