//! Analogy Engine
//!
//! Evaluates word arithmetic against a borrowed [`EmbeddingStore`] and ranks
//! the table by similarity to the result.

use hashbrown::HashSet;
use tracing::debug;

use super::expression::Expression;
use super::nearest::{nearest, Neighbor};
use crate::error::QueryError;
use crate::vector::{normalize_vector, EmbeddingStore};

/// Outcome of a full analogy query
#[derive(Debug, Clone, PartialEq)]
pub struct Analogy {
    /// The parsed input
    pub expression: Expression,
    /// Best matches, highest score first
    pub neighbors: Vec<Neighbor>,
}

impl Analogy {
    /// Just the ranked words
    pub fn words(&self) -> Vec<&str> {
        self.neighbors.iter().map(|n| n.word.as_str()).collect()
    }
}

/// Query engine over a read-only embedding table
#[derive(Debug, Clone, Copy)]
pub struct AnalogyEngine<'a> {
    store: &'a EmbeddingStore,
}

impl<'a> AnalogyEngine<'a> {
    pub fn new(store: &'a EmbeddingStore) -> Self {
        Self { store }
    }

    /// Parse and evaluate `expr` into a normalized query vector
    pub fn evaluate(&self, expr: &str) -> Result<Vec<f64>, QueryError> {
        self.evaluate_expression(&Expression::parse(expr))
    }

    /// Sum the signed term vectors and L2-normalize the result.
    ///
    /// Fails on the first term missing from the table, or when the
    /// expression has no terms at all.
    pub fn evaluate_expression(&self, expr: &Expression) -> Result<Vec<f64>, QueryError> {
        if expr.is_empty() {
            return Err(QueryError::EmptyExpression);
        }

        let mut acc = vec![0.0f64; self.store.dimension()];
        for term in expr.terms() {
            let vector = self
                .store
                .lookup(&term.word)
                .ok_or_else(|| QueryError::UnknownWord(term.word.clone()))?;
            let factor = term.sign.factor();
            for (a, v) in acc.iter_mut().zip(vector) {
                *a += factor * v;
            }
        }

        normalize_vector(&mut acc);
        Ok(acc)
    }

    /// Top `k` words by cosine similarity to `query`, skipping `exclude`
    pub fn nearest(
        &self,
        query: &[f64],
        k: usize,
        exclude: &HashSet<String>,
    ) -> Result<Vec<Neighbor>, QueryError> {
        nearest(self.store, query, k, exclude)
    }

    /// Evaluate `expr` and return its `k` nearest words, excluding the
    /// expression's own words
    pub fn query(&self, expr: &str, k: usize) -> Result<Analogy, QueryError> {
        let expression = Expression::parse(expr);
        let vector = self.evaluate_expression(&expression)?;
        let exclude: HashSet<String> = expression.words().map(str::to_string).collect();

        let neighbors = self.nearest(&vector, k, &exclude)?;
        debug!(
            expression = %expression,
            k,
            results = neighbors.len(),
            "Query evaluated"
        );

        Ok(Analogy {
            expression,
            neighbors,
        })
    }
}
