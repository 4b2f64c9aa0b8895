//! Connection Handler
//!
//! Reads request lines and answers them against the shared table.

use crate::engine::AnalogyEngine;
use crate::error::ProtocolError;
use crate::metrics::{Metrics, OUTCOME_OK};
use crate::protocol::{QueryCodec, Request, Response};
use crate::vector::EmbeddingStore;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::Framed;
use tracing::debug;

/// Connection handler
#[derive(Clone)]
pub struct Handler {
    store: Arc<EmbeddingStore>,
    metrics: Arc<Metrics>,
    top_k: usize,
}

impl Handler {
    /// Create a new handler
    pub fn new(store: Arc<EmbeddingStore>, metrics: Arc<Metrics>, top_k: usize) -> Self {
        Self {
            store,
            metrics,
            top_k,
        }
    }

    /// Run the handler for a connection
    pub async fn run<T>(self, mut framed: Framed<T, QueryCodec>) -> Result<(), ProtocolError>
    where
        T: AsyncRead + AsyncWrite + Unpin,
    {
        while let Some(result) = framed.next().await {
            let line = result?;
            if line.trim().is_empty() {
                continue;
            }

            let response = match Request::parse(&line) {
                Ok(request) => {
                    // Full-table scans stay off the reactor threads
                    let handler = self.clone();
                    tokio::task::spawn_blocking(move || handler.execute(request))
                        .await
                        .unwrap_or_else(|e| Response::Error(format!("Worker error: {}", e)))
                }
                Err(e) => Response::Error(e.to_string()),
            };

            framed.send(response).await?;
        }

        Ok(())
    }

    /// Execute a request and return response
    pub fn execute(&self, request: Request) -> Response {
        match request {
            Request::Ping => Response::Pong,
            Request::Stats => Response::Text(self.metrics.summary()),
            Request::Dim => Response::Integer(self.store.dimension() as u64),
            Request::Size => Response::Integer(self.store.len() as u64),

            Request::Query { k, expression } => {
                let start = Instant::now();
                let k = k.unwrap_or(self.top_k);
                let engine = AnalogyEngine::new(&self.store);

                let (outcome, response) = match engine.query(&expression, k) {
                    Ok(analogy) => (OUTCOME_OK, Response::Neighbors(analogy.neighbors)),
                    Err(e) => (e.kind(), Response::Error(e.to_string())),
                };

                let elapsed = start.elapsed();
                self.metrics.record_query(outcome, elapsed);
                debug!(expression = %expression, outcome, latency = ?elapsed, "Query executed");
                response
            }
        }
    }
}
