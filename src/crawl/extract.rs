// src/crawl/extract.rs
// =============================================================================
// This module pulls child links out of a directory-listing page.
//
// A listing page is mostly chrome around a list of entries:
// - a "Parent Directory" entry, flagged with <img alt="[PARENTDIR]">
// - column headers that re-sort the same directory (href="?C=N;O=D")
// - one anchor per file or subdirectory
//
// Only the last kind is a candidate. Following the parent entry would walk
// up and out of the crawl root, and sort links are the same page again.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM tree (html5ever underneath)
// - Lets us find elements with CSS selectors
// - Lets us walk ancestors/siblings of an element
//
// Rust concepts:
// - Lifetimes: ElementRef<'a> borrows from the parsed Html document
// - Iterator adaptors: filter_map, find, any
// =============================================================================

use super::normalize::resolve;
use scraper::{ElementRef, Html, Selector};

/// One link found on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Absolute URL (page URL + href)
    pub url: String,
    /// The href ended with '/'
    pub is_directory: bool,
}

// Extracts candidate links from a listing page, in document order
//
// Parameters:
//   html: the page body
//   page_url: the URL the page was fetched from (ends with '/')
//
// Returns: Vec<Candidate>; the same URL may appear more than once, the
//          frontier takes care of duplicates
//
// Example:
//   html = "<a href='sub/'>sub/</a><a href='file.txt'>file.txt</a>"
//   page_url = "http://x.test/a/"
//   result = [("http://x.test/a/sub/", dir), ("http://x.test/a/file.txt", file)]
pub fn extract_candidates(html: &str, page_url: &str) -> Vec<Candidate> {
    let document = Html::parse_document(html);

    // Both selectors are constants, so parsing them cannot fail at runtime
    let anchors = Selector::parse("a").expect("anchor selector is valid");
    let markers =
        Selector::parse(r#"img[alt="[PARENTDIR]"]"#).expect("parent marker selector is valid");

    // Entries (rows, list items or single anchors) that belong to a
    // parent-directory marker
    let excluded: Vec<ElementRef<'_>> = document
        .select(&markers)
        .filter_map(parent_entry)
        .collect();

    let mut candidates = Vec::new();

    for anchor in document.select(&anchors) {
        if is_inside(anchor, &excluded) {
            continue;
        }

        let href = match anchor.value().attr("href") {
            Some(href) if !href.is_empty() => href,
            _ => continue,
        };

        // "?C=M;O=A" column sort links re-list the same directory
        if href.starts_with('?') {
            continue;
        }

        candidates.push(Candidate {
            url: resolve(page_url, href),
            is_directory: href.ends_with('/'),
        });
    }

    candidates
}

// Finds the listing entry a parent-directory icon belongs to.
//
// Table listings:  <tr><td><img alt="[PARENTDIR]"></td><td><a ...>...</tr>
// List listings:   <li><img alt="[PARENTDIR]"> <a ...></li>
// <pre> listings:  <img alt="[PARENTDIR]"> <a href="/">Parent Directory</a>
//
// The first two remove the whole row/item; in <pre> there is no element
// wrapping just one entry, so the anchor right after the icon is the entry.
fn parent_entry(marker: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let row = marker
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| matches!(el.value().name(), "tr" | "li"));

    if row.is_some() {
        return row;
    }

    marker
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
}

fn is_inside(anchor: ElementRef<'_>, excluded: &[ElementRef<'_>]) -> bool {
    excluded.contains(&anchor)
        || anchor
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|el| excluded.contains(&el))
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why not remove the parent row from the DOM?
//    - scraper's Html is read-only once parsed
//    - Instead we remember which elements are "parent entries" and skip any
//      anchor that is one of them or sits inside one
//
// 2. Why plain string concatenation instead of Url::join?
//    - Listing hrefs are already relative to the page
//    - Url::join would percent-encode and normalize, so the recorded URL
//      would no longer be what the server wrote
// -----------------------------------------------------------------------------
