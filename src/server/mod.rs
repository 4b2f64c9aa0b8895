//! Server Module
//!
//! TCP query server. The embedding table is loaded once and shared read-only
//! by every connection.

mod config;
mod handler;

pub use config::{Config, DEFAULT_TOP_K};
pub use handler::Handler;

use crate::metrics::Metrics;
use crate::protocol::QueryCodec;
use crate::vector::EmbeddingStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::codec::Framed;
use tracing::{error, info};

/// Analogy query server
pub struct Server {
    config: Config,
    store: Arc<EmbeddingStore>,
    metrics: Arc<Metrics>,
}

impl Server {
    /// Create a new server over an already loaded table
    pub fn new(config: Config, store: EmbeddingStore) -> Self {
        Self {
            config,
            store: Arc::new(store),
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Bind the configured address
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind(self.config.addr()).await
    }

    /// Bind and serve forever
    pub async fn run(self) -> std::io::Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }

    /// Accept connections on an existing listener
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        info!(
            "Analogia server listening on {} ({} words, dim {})",
            listener.local_addr()?,
            self.store.len(),
            self.store.dimension()
        );

        loop {
            match listener.accept().await {
                Ok((socket, peer_addr)) => {
                    info!("New connection from {}", peer_addr);

                    let handler =
                        Handler::new(self.store.clone(), self.metrics.clone(), self.config.top_k);
                    let codec = QueryCodec::new(self.config.max_line_length);

                    tokio::spawn(async move {
                        let framed = Framed::new(socket, codec);

                        if let Err(e) = handler.run(framed).await {
                            error!("Connection error from {}: {}", peer_addr, e);
                        }

                        info!("Connection closed: {}", peer_addr);
                    });
                }
                Err(e) => {
                    error!("Accept error: {}", e);
                }
            }
        }
    }

    /// Get metrics reference
    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }
}
