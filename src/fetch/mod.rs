//! Catalog acquisition: listing page, per-book detail pages.
//!
//! Two seams keep the network out of the rest of the pipeline:
//!
//! - [`PageFetcher`]: raw `GET url -> body`. [`HttpFetcher`] is the `ureq`
//!   implementation; tests substitute canned pages.
//! - [`BookSource`]: whole-catalog `fetch_books()`. [`Scraper`] implements it
//!   on top of a `PageFetcher`; tests substitute canned records.

pub mod http;
pub mod parse;
pub mod scrape;

pub use http::HttpFetcher;
pub use parse::{ListingEntry, parse_description, parse_listing};
pub use scrape::{DESCRIPTION_UNAVAILABLE, Scraper};

use crate::error::FetchResult;
use crate::model::BookRecord;

/// Retrieves the body of a page.
///
/// Implementations must be shareable across the detail-page worker pool.
pub trait PageFetcher: Send + Sync {
    fn get(&self, url: &str) -> FetchResult<String>;
}

/// Produces the full set of book records for a run.
pub trait BookSource {
    fn fetch_books(&self) -> FetchResult<Vec<BookRecord>>;
}

impl BookSource for Vec<BookRecord> {
    fn fetch_books(&self) -> FetchResult<Vec<BookRecord>> {
        Ok(self.clone())
    }
}
