//! Analogy Engine Module
//!
//! Word-arithmetic parsing, query evaluation and exact top-K search.

mod analogy;
mod expression;
mod nearest;
mod token;

pub use analogy::{Analogy, AnalogyEngine};
pub use expression::{Expression, Sign, Term};
pub use nearest::{nearest, Neighbor};
pub use token::normalize_token;
