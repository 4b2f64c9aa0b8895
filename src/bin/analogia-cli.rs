//! Analogia CLI
//!
//! Interactive shell: loads a table and answers word arithmetic queries.

use analogia::metrics::OUTCOME_OK;
use analogia::server::DEFAULT_TOP_K;
use analogia::{AnalogyEngine, EmbeddingStore, Metrics, DEFAULT_DIMENSION};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

/// Analogia CLI - Linguistic Vector Engine
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Embedding table (`word c1 .. cD` per line)
    #[arg(short, long)]
    vectors: PathBuf,

    /// Vector dimension of the table
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
    dim: usize,

    /// Number of nearest words to print
    #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("analogia=info".parse()?))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    println!("Loading embeddings...");
    let store = EmbeddingStore::open(&args.vectors, args.dim)?;
    let report = store.load_report();
    println!(
        "Read {} lines from {}",
        report.stored,
        args.vectors.display()
    );
    println!("Loaded {} words.", store.len());
    println!("LVE - Linguistic Vector Engine");
    println!("Type expressions like: king - man + woman");
    println!("Type 'exit' to quit.");

    let engine = AnalogyEngine::new(&store);
    let metrics = Metrics::new();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        if line.eq_ignore_ascii_case("help") {
            print_help(args.top_k);
            continue;
        }

        if line.eq_ignore_ascii_case("stats") {
            println!("{}", metrics.summary());
            continue;
        }

        let start = Instant::now();
        match engine.query(line, args.top_k) {
            Ok(analogy) => {
                metrics.record_query(OUTCOME_OK, start.elapsed());
                println!("Nearest words: [{}]", analogy.words().join(", "));
            }
            Err(e) => {
                metrics.record_query(e.kind(), start.elapsed());
                println!("Error: {}", e);
            }
        }
    }

    Ok(())
}

fn print_help(top_k: usize) {
    println!(
        r#"
Enter word arithmetic; the {top_k} closest words are printed.

  king - man + woman   - analogy query
  paris                - neighbours of a single word
  stats                - query counts and latency
  help                 - Show this help
  exit / quit          - Exit the CLI

Operators must stand alone between words ("king - man", not "king -man").
"#
    );
}
