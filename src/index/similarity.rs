//! Dense all-pairs cosine similarity.

use crate::index::tfidf::SparseVector;

/// Square, symmetric matrix of cosine similarities in `[0, 1]`.
///
/// The diagonal is fixed at 1.0, including for documents that share no
/// vocabulary with anything (an empty vector).
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute every pair from L2-normalized vectors.
    pub fn from_vectors(vectors: &[SparseVector]) -> Self {
        let size = vectors.len();
        let mut values = vec![0.0; size * size];
        for i in 0..size {
            values[i * size + i] = 1.0;
            for j in (i + 1)..size {
                let score = vectors[i].dot(&vectors[j]).clamp(0.0, 1.0);
                values[i * size + j] = score;
                values[j * size + i] = score;
            }
        }
        Self { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Panics if either index is out of range.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "index ({i}, {j}) out of range");
        self.values[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.size).then(|| &self.values[i * self.size..(i + 1) * self.size])
    }
}
