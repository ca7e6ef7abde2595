//! Engine facade: the context object a session queries.
//!
//! The `Engine` owns the corpus and its similarity index for the lifetime of
//! a run. Nothing is global, so several engines over different corpora can
//! live in one process.

use crate::cache::CacheStore;
use crate::config::{Config, IndexConfig};
use crate::corpus::Corpus;
use crate::error::{QueryError, QueryResult, StartupResult};
use crate::fetch::BookSource;
use crate::index::SimilarityIndex;
use crate::model::{BookRecord, Recommendation};

pub struct Engine {
    corpus: Corpus,
    index: SimilarityIndex,
}

impl Engine {
    /// Load the catalog from cache, or fetch and cache it, then build the
    /// index.
    ///
    /// A present cache file is trusted as-is and `source` is never called.
    pub fn bootstrap(config: &Config, source: &dyn BookSource) -> StartupResult<Self> {
        let store = CacheStore::new(&config.cache.path);
        let records = if store.exists() {
            store.load()?
        } else {
            tracing::info!(path = %store.path().display(), "no book cache, fetching catalog");
            let records = source.fetch_books()?;
            store.save(&records)?;
            records
        };
        Self::from_records(records, &config.index)
    }

    /// Build directly from records, bypassing cache and network.
    pub fn from_records(records: Vec<BookRecord>, config: &IndexConfig) -> StartupResult<Self> {
        let corpus = Corpus::from_records(records)?;
        let index = SimilarityIndex::build(&corpus, config);
        tracing::info!(books = corpus.len(), "engine ready");
        Ok(Self { corpus, index })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }

    /// Up to `top_k` books most similar to the exact title `title`.
    ///
    /// The queried book never appears in its own results, and neither does
    /// any other entry carrying the same title.
    pub fn recommend(&self, title: &str, top_k: usize) -> QueryResult<Vec<Recommendation>> {
        let position = self
            .corpus
            .position_of(title)
            .ok_or_else(|| QueryError::TitleNotFound {
                title: title.to_string(),
            })?;

        let recommendations = self
            .index
            .similarities(position)
            .into_iter()
            .filter_map(|(other, score)| {
                let entry = self.corpus.get(other)?;
                (entry.record.title != title).then_some((entry, score))
            })
            .take(top_k)
            .enumerate()
            .map(|(i, (entry, score))| Recommendation {
                rank: i + 1,
                title: entry.record.title.clone(),
                authors: entry.record.authors.clone(),
                score,
            })
            .collect();

        Ok(recommendations)
    }
}
