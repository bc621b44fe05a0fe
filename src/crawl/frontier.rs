// src/crawl/frontier.rs
// =============================================================================
// Work queue + visited set.
//
// - pending: directory URLs still to fetch (a Vec used as a stack, so the
//   walk goes depth-first)
// - discovered: every URL seen as a link target, file or directory, in the
//   order it was first seen
//
// A URL only reaches `pending` after `record` has returned true for it, so
// the number of fetches can never exceed the number of distinct URLs. That
// is what makes the walk terminate on cyclic listings.
// =============================================================================

use super::extract::Candidate;
use indexmap::IndexSet;

#[derive(Debug, Default)]
pub struct Frontier {
    pending: Vec<String>,
    discovered: IndexSet<String>,
}

impl Frontier {
    /// A frontier holding only the seed. The seed itself is not "discovered":
    /// it is the root of the listing, not a link found on it.
    pub fn seeded(seed: &str) -> Self {
        let mut frontier = Self::default();
        frontier.enqueue(seed.to_string());
        frontier
    }

    pub fn enqueue(&mut self, url: String) {
        self.pending.push(url);
    }

    pub fn pop(&mut self) -> Option<String> {
        self.pending.pop()
    }

    // Returns false (and changes nothing) if the URL was already seen
    pub fn record(&mut self, url: &str) -> bool {
        if self.discovered.contains(url) {
            return false;
        }
        self.discovered.insert(url.to_string())
    }

    /// Record a candidate and, if it is a directory seen for the first time,
    /// queue it. Returns true if the candidate was new.
    pub fn admit(&mut self, candidate: Candidate) -> bool {
        if !self.record(&candidate.url) {
            return false;
        }
        if candidate.is_directory {
            tracing::debug!(url = %candidate.url, "queued directory");
            self.enqueue(candidate.url);
        }
        true
    }

    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn discovered_len(&self) -> usize {
        self.discovered.len()
    }

    pub fn into_discovered(self) -> Vec<String> {
        self.discovered.into_iter().collect()
    }
}
