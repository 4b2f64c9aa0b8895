//! Analogia - Word-Vector Analogy Engine
//!
//! Loads word embeddings from a text table, evaluates word arithmetic such as
//! `king - man + woman`, and ranks the vocabulary by cosine similarity to the
//! result with an exact bounded top-K scan.

pub mod engine;
pub mod error;
pub mod metrics;
pub mod protocol;
pub mod server;
pub mod vector;

pub use engine::{Analogy, AnalogyEngine, Expression, Neighbor};
pub use error::{LoadError, ProtocolError, QueryError};
pub use metrics::Metrics;
pub use protocol::{QueryCodec, Request, Response};
pub use server::{Config, Server};
pub use vector::{EmbeddingStore, DEFAULT_DIMENSION};
