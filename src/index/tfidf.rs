//! TF-IDF vectorization over a fixed document set.
//!
//! - term frequency: raw token count per document
//! - idf: smoothed, `ln((1 + n) / (1 + df)) + 1`
//! - each document vector is L2-normalized, so a dot product is a cosine
//!
//! The vocabulary keeps the `max_features` terms with the highest total
//! count across the corpus (ties broken alphabetically) and is then indexed
//! in alphabetical order.

use std::collections::{BTreeMap, HashMap};

use crate::index::tokenize::tokenize;

/// Sparse vector as `(term_id, weight)` pairs sorted by `term_id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f64)>,
}

impl SparseVector {
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product by merging the two sorted term lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ta, wa) = self.entries[i];
            let (tb, wb) = other.entries[j];
            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Vectorizer settings.
#[derive(Debug, Clone, Copy)]
pub struct TfIdfVectorizer {
    pub max_features: usize,
}

/// Result of fitting a vectorizer: vocabulary, idf weights and one
/// normalized vector per input document, in input order.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    vectors: Vec<SparseVector>,
}

impl TfIdfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    pub fn fit_transform<'a>(&self, documents: impl IntoIterator<Item = &'a str>) -> TfIdfModel {
        let tokenized: Vec<Vec<String>> = documents.into_iter().map(tokenize).collect();
        let n_docs = tokenized.len();

        // Corpus-wide counts and document frequencies.
        let mut total: HashMap<&str, usize> = HashMap::new();
        let mut df: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let mut seen: Vec<&str> = Vec::with_capacity(tokens.len());
            for token in tokens {
                *total.entry(token.as_str()).or_insert(0) += 1;
                seen.push(token.as_str());
            }
            seen.sort_unstable();
            seen.dedup();
            for token in seen {
                *df.entry(token).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = total.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut vocabulary: Vec<String> = ranked.iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort();

        let term_ids: HashMap<&str, u32> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i as u32))
            .collect();

        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|t| {
                let df = df.get(t.as_str()).copied().unwrap_or(0) as f64;
                ((1.0 + n_docs as f64) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vectors = tokenized
            .iter()
            .map(|tokens| {
                let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
                for token in tokens {
                    if let Some(&id) = term_ids.get(token.as_str()) {
                        *counts.entry(id).or_insert(0) += 1;
                    }
                }
                let mut entries: Vec<(u32, f64)> = counts
                    .into_iter()
                    .map(|(id, count)| (id, count as f64 * idf[id as usize]))
                    .collect();
                let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for (_, w) in &mut entries {
                        *w /= norm;
                    }
                }
                SparseVector { entries }
            })
            .collect();

        TfIdfModel {
            vocabulary,
            idf,
            vectors,
        }
    }
}

impl TfIdfModel {
    /// Terms in index order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
            .map(|i| self.idf[i])
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }
}
