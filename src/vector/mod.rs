//! Vector Module
//!
//! Vector math and the word embedding table.

mod embedding_store;
mod similarity;

pub use embedding_store::{EmbeddingStore, LoadReport, DEFAULT_DIMENSION};
pub use similarity::{cosine_similarity, dot_product, normalize_vector, normalized, VectorOps};
