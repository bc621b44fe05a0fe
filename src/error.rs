// src/error.rs
// =============================================================================
// Fatal errors.
//
// Every variant here ends the whole run: nothing is printed or written when
// one of these comes back, because a partial directory tree could be mistaken
// for a complete one.
//
// Page-level problems (empty body, signature mismatch) are NOT errors - they
// are routine and live in crawl::PageOutcome instead.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The seed URL could not be parsed or is not http/https
    #[error("Invalid URL '{url}': {reason} - example of a valid URL: http://example.com/")]
    InvalidSeedUrl { url: String, reason: String },

    /// The first page has no <!DOCTYPE ...> to fingerprint later pages with
    #[error("The URL {url} has no file signature that we can depend on")]
    NoSignature { url: String },

    /// Network, protocol or non-2xx HTTP failure on any fetch
    #[error("Request error for {url}: {message}")]
    Transport { url: String, message: String },

    /// The HTTP client itself could not be configured
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Unknown output format '{0}' - output formats can be: json, text (default)")]
    UnsupportedOutputFormat(String),

    #[error("Output file name cannot be satisfied: '{0}'")]
    InvalidOutputPath(String),

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("File write operation failed: {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True for failures that happened mid-walk, where continuing would have
    /// produced an incomplete listing.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }
}
