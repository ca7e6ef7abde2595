//! Fixed-selector extraction from Goodreads-style HTML, using `scraper`.
//!
//! - Listing: `.bookTitle` anchors give title + link, `.authorName` gives
//!   authors, paired by position.
//! - Detail: the description is the second `<span>` under `#description`.

use scraper::{Html, Selector};

/// A book as it appears on the listing page, before its detail page is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    pub authors: String,
    /// Absolute detail-page URL (`base_url` + `href`).
    pub link: String,
}

/// Extract up to `limit` entries from a listing page.
///
/// Titles drive the result: a title with no author at the same position gets
/// an empty author, and surplus authors are ignored.
pub fn parse_listing(html: &str, base_url: &str, limit: usize) -> Vec<ListingEntry> {
    let document = Html::parse_document(html);

    let authors: Vec<String> = match Selector::parse(".authorName") {
        Ok(sel) => document
            .select(&sel)
            .take(limit)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect(),
        Err(_) => Vec::new(),
    };

    let Ok(title_sel) = Selector::parse(".bookTitle") else {
        return Vec::new();
    };

    document
        .select(&title_sel)
        .take(limit)
        .enumerate()
        .map(|(i, el)| {
            let href = el.value().attr("href").unwrap_or("");
            ListingEntry {
                title: el.text().collect::<String>().trim().to_string(),
                authors: authors.get(i).cloned().unwrap_or_default(),
                link: format!("{base_url}{href}"),
            }
        })
        .collect()
}

/// Extract the description from a detail page, if the expected node exists.
pub fn parse_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let sel = Selector::parse("#description span:nth-of-type(2)").ok()?;
    document
        .select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}
