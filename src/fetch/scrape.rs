//! Listing + detail scraping as a [`BookSource`].
//!
//! The listing fetch is fatal on failure. Detail pages are fetched on a
//! dedicated `rayon` pool of `workers` threads and joined before returning;
//! a failed or unparseable detail page degrades to
//! [`DESCRIPTION_UNAVAILABLE`] for that book only.

use rayon::prelude::*;

use crate::config::SourceConfig;
use crate::error::{FetchError, FetchResult};
use crate::fetch::parse::{ListingEntry, parse_description, parse_listing};
use crate::fetch::{BookSource, PageFetcher};
use crate::model::BookRecord;

/// Placeholder stored when a book's description cannot be retrieved.
pub const DESCRIPTION_UNAVAILABLE: &str = "Description unavailable";

pub struct Scraper<F> {
    fetcher: F,
    config: SourceConfig,
}

impl<F: PageFetcher> Scraper<F> {
    pub fn new(fetcher: F, config: SourceConfig) -> Self {
        Self { fetcher, config }
    }

    fn fetch_description(&self, entry: &ListingEntry) -> String {
        let html = match self.fetcher.get(&entry.link) {
            Ok(html) => html,
            Err(e) => {
                tracing::debug!(
                    title = %entry.title,
                    link = %entry.link,
                    error = %e,
                    "description fetch failed"
                );
                return DESCRIPTION_UNAVAILABLE.to_string();
            }
        };
        match parse_description(&html) {
            Some(text) => text,
            None => {
                tracing::debug!(title = %entry.title, link = %entry.link, "no description node");
                DESCRIPTION_UNAVAILABLE.to_string()
            }
        }
    }
}

impl<F: PageFetcher> BookSource for Scraper<F> {
    fn fetch_books(&self) -> FetchResult<Vec<BookRecord>> {
        let url = &self.config.listing_url;
        tracing::info!(url = %url, "fetching book listing");

        let listing = self.fetcher.get(url)?;
        let entries = parse_listing(&listing, &self.config.base_url, self.config.max_books);
        tracing::info!(
            books = entries.len(),
            workers = self.config.workers,
            "fetching descriptions"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .build()
            .map_err(|e| FetchError::WorkerPool {
                workers: self.config.workers,
                message: e.to_string(),
            })?;

        let descriptions: Vec<String> = pool.install(|| {
            entries
                .par_iter()
                .map(|entry| self.fetch_description(entry))
                .collect()
        });

        let unavailable = descriptions
            .iter()
            .filter(|d| d.as_str() == DESCRIPTION_UNAVAILABLE)
            .count();
        tracing::info!(
            books = entries.len(),
            unavailable,
            "scraped book catalog"
        );

        Ok(entries
            .into_iter()
            .zip(descriptions)
            .map(|(entry, description)| BookRecord {
                title: entry.title,
                authors: entry.authors,
                description,
            })
            .collect())
    }
}
