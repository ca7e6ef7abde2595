//! Core data types shared by the pipeline stages.

use serde::{Deserialize, Serialize};

/// One catalog entry, as scraped or as read back from the cache.
///
/// Missing cells deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookRecord {
    pub title: String,
    pub authors: String,
    pub description: String,
}

impl BookRecord {
    pub fn new(
        title: impl Into<String>,
        authors: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            authors: authors.into(),
            description: description.into(),
        }
    }
}

/// A ranked answer to a title query.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// 1-based position in the result list.
    pub rank: usize,
    pub title: String,
    pub authors: String,
    /// Cosine similarity to the queried book, in `[0, 1]`.
    pub score: f64,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.rank, self.title)
    }
}
