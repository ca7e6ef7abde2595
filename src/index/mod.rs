//! Text similarity index over a [`Corpus`].
//!
//! Building is all-or-nothing: the corpus text is vectorized with TF-IDF
//! and every pair is scored up front. There is no incremental update; a
//! changed corpus means a new index.

pub mod similarity;
pub mod tfidf;
pub mod tokenize;

pub use similarity::SimilarityMatrix;
pub use tfidf::{SparseVector, TfIdfModel, TfIdfVectorizer};

use crate::config::IndexConfig;
use crate::corpus::Corpus;

pub struct SimilarityIndex {
    model: TfIdfModel,
    matrix: SimilarityMatrix,
}

impl SimilarityIndex {
    pub fn build(corpus: &Corpus, config: &IndexConfig) -> Self {
        let model = TfIdfVectorizer::new(config.max_features).fit_transform(corpus.texts());
        let matrix = SimilarityMatrix::from_vectors(model.vectors());
        tracing::info!(
            documents = matrix.size(),
            vocabulary = model.vocabulary().len(),
            "built similarity index"
        );
        Self { model, matrix }
    }

    pub fn model(&self) -> &TfIdfModel {
        &self.model
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Every other document paired with its score, best first.
    ///
    /// The sort is stable, so equal scores stay in corpus order. Returns an
    /// empty list for an out-of-range index.
    pub fn similarities(&self, index: usize) -> Vec<(usize, f64)> {
        let Some(row) = self.matrix.row(index) else {
            return Vec::new();
        };
        let mut scores: Vec<(usize, f64)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|&(other, _)| other != index)
            .collect();
        scores.sort_by(|a, b| b.1.total_cmp(&a.1));
        scores
    }
}
