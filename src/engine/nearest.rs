//! Nearest Neighbour Search
//!
//! Exact linear scan over the table, keeping the best `k` candidates in a
//! bounded min-heap: O(N·D) similarity work, O(N log K) heap work.

use hashbrown::HashSet;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::QueryError;
use crate::vector::{dot_product, EmbeddingStore};

/// A ranked result
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub word: String,
    /// Cosine similarity to the query
    pub score: f64,
}

/// Heap entry ordered by score only
#[derive(Debug)]
struct Scored<'a> {
    score: f64,
    word: &'a str,
}

impl PartialEq for Scored<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scored<'_> {}

impl PartialOrd for Scored<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scored<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.total_cmp(&other.score)
    }
}

/// Find the `k` entries most similar to `query`, skipping `exclude`.
///
/// `query` is expected to be L2-normalized so the dot product is the cosine
/// similarity. Results are ordered from highest to lowest score; fewer than
/// `k` are returned when the table has fewer eligible words.
pub fn nearest(
    store: &EmbeddingStore,
    query: &[f64],
    k: usize,
    exclude: &HashSet<String>,
) -> Result<Vec<Neighbor>, QueryError> {
    if query.len() != store.dimension() {
        return Err(QueryError::DimensionMismatch {
            expected: store.dimension(),
            actual: query.len(),
        });
    }
    if k == 0 {
        return Ok(Vec::new());
    }

    // Min-heap: the root is the weakest of the current top k
    // Capacity is bounded by the table, not by the caller's k
    let capacity = k.min(store.len()).saturating_add(1);
    let mut heap: BinaryHeap<Reverse<Scored<'_>>> = BinaryHeap::with_capacity(capacity);

    for (word, vector) in store.entries() {
        if exclude.contains(word) {
            continue;
        }

        let score = dot_product(query, vector);

        if heap.len() < k {
            heap.push(Reverse(Scored { score, word }));
        } else if let Some(Reverse(min)) = heap.peek() {
            if score > min.score {
                heap.pop();
                heap.push(Reverse(Scored { score, word }));
            }
        }
    }

    // Ascending order of Reverse<_> is descending score
    Ok(heap
        .into_sorted_vec()
        .into_iter()
        .map(|Reverse(s)| Neighbor {
            word: s.word.to_string(),
            score: s.score,
        })
        .collect())
}
