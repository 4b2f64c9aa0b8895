//! Analogia Server Binary
//!
//! Loads an embedding table and serves analogy queries over TCP.

use analogia::server::{Config, DEFAULT_TOP_K};
use analogia::{EmbeddingStore, Server, DEFAULT_DIMENSION};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Analogia Server - word-vector analogy queries over TCP
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Embedding table (`word c1 .. cD` per line)
    #[arg(short, long)]
    vectors: PathBuf,

    /// Vector dimension of the table
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
    dim: usize,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port number
    #[arg(short, long, default_value_t = 6390)]
    port: u16,

    /// Results per QUERY when no count is given
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Longest accepted request line in bytes
    #[arg(long, default_value_t = analogia::protocol::DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("analogia=info".parse()?))
        .init();

    let args = Args::parse();

    let config = Config::default()
        .with_bind(&args.bind)
        .with_port(args.port)
        .with_top_k(args.top_k)
        .with_max_line_length(args.max_line_length);

    let vectors = args.vectors.clone();
    let dim = args.dim;
    let store = tokio::task::spawn_blocking(move || EmbeddingStore::open(vectors, dim)).await??;

    info!(
        "Starting analogia server on {} with {} words",
        config.addr(),
        store.len()
    );

    Server::new(config, store).run().await?;

    Ok(())
}
