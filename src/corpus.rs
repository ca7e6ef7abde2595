//! Text normalization: records in, indexable corpus out.

use crate::error::{CorpusError, CorpusResult};
use crate::model::BookRecord;

/// A record plus the combined text the index is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub record: BookRecord,
    /// `title authors description`, space-joined.
    pub text: String,
}

/// Ordered, non-empty set of books with non-blank text.
#[derive(Debug, Clone)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Combine each record's fields into `text` and drop rows whose text is
    /// blank. Fails if nothing survives.
    pub fn from_records(records: Vec<BookRecord>) -> CorpusResult<Self> {
        let total = records.len();
        let entries: Vec<CorpusEntry> = records
            .into_iter()
            .filter_map(|record| {
                let text = format!("{} {} {}", record.title, record.authors, record.description);
                (!text.trim().is_empty()).then_some(CorpusEntry { record, text })
            })
            .collect();

        if entries.is_empty() {
            return Err(CorpusError::Empty { discarded: total });
        }

        let dropped = total - entries.len();
        if dropped > 0 {
            tracing::info!(dropped, "discarded records with empty text");
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; construction rejects empty corpora.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CorpusEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Position of the first entry whose title matches exactly.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.record.title == title)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }
}
