//! Embedding Store
//!
//! Word -> unit vector table, loaded once from a whitespace-delimited text
//! source and read-only afterwards.

use hashbrown::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use super::similarity::normalize_vector;
use crate::error::LoadError;

/// Default embedding dimension
pub const DEFAULT_DIMENSION: usize = 300;

/// Counters gathered while loading a source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines read from the source
    pub lines: usize,
    /// Entries stored (including overwrites)
    pub stored: usize,
    /// Lines with fewer than `1 + D` fields
    pub skipped: usize,
    /// Entries that replaced an earlier occurrence of the same word
    pub overwritten: usize,
}

/// Immutable word embedding table
#[derive(Debug, Clone)]
pub struct EmbeddingStore {
    /// Lowercase word -> L2-normalized vector
    embeddings: HashMap<String, Vec<f64>>,
    /// Fixed vector dimension
    dimension: usize,
    report: LoadReport,
}

impl EmbeddingStore {
    /// Load embeddings from a file on disk
    pub fn open<P: AsRef<Path>>(path: P, dimension: usize) -> Result<Self, LoadError> {
        let path = path.as_ref();
        info!(path = %path.display(), dimension, "Loading embeddings");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), dimension)
    }

    /// Load embeddings from any buffered text source
    ///
    /// Each line is `word c1 .. cD`. Lines with fewer than `1 + D` fields are
    /// skipped; fields past `D` are ignored. A component that does not parse
    /// as a finite number (`nan`, `inf`, overflowing literals) fails the
    /// whole load.
    pub fn from_reader<R: BufRead>(reader: R, dimension: usize) -> Result<Self, LoadError> {
        if dimension == 0 {
            return Err(LoadError::InvalidDimension(dimension));
        }

        let mut embeddings = HashMap::new();
        let mut report = LoadReport::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            report.lines += 1;

            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                report.skipped += 1;
                continue;
            };
            let components: Vec<&str> = fields.take(dimension).collect();
            if components.len() < dimension {
                report.skipped += 1;
                continue;
            }

            let mut vector = Vec::with_capacity(dimension);
            for (field, raw) in components.iter().enumerate() {
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| LoadError::InvalidComponent {
                        line: idx + 1,
                        field: field + 1,
                        value: (*raw).to_string(),
                    })?;
                vector.push(value);
            }
            normalize_vector(&mut vector);

            if embeddings.insert(word.to_lowercase(), vector).is_some() {
                report.overwritten += 1;
            }
            report.stored += 1;
        }

        info!(
            lines = report.lines,
            words = embeddings.len(),
            skipped = report.skipped,
            "Embeddings loaded"
        );
        if report.overwritten > 0 {
            debug!(overwritten = report.overwritten, "Duplicate words replaced");
        }

        Ok(Self {
            embeddings,
            dimension,
            report,
        })
    }

    /// Get embedding dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Look up a word's vector; `word` must already be lowercase
    pub fn lookup(&self, word: &str) -> Option<&[f64]> {
        self.embeddings.get(word).map(Vec::as_slice)
    }

    /// Check if a word exists
    pub fn contains(&self, word: &str) -> bool {
        self.embeddings.contains_key(word)
    }

    /// Get number of stored embeddings
    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }

    /// Iterate over every (word, vector) pair, in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.embeddings
            .iter()
            .map(|(word, vector)| (word.as_str(), vector.as_slice()))
    }

    /// Counters from the load that built this store
    pub fn load_report(&self) -> LoadReport {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::similarity::{cosine_similarity, dot_product, VectorOps};
    use std::io::{Cursor, Write};

    fn load(text: &str, dim: usize) -> EmbeddingStore {
        EmbeddingStore::from_reader(Cursor::new(text), dim).unwrap()
    }

    #[test]
    fn test_load_normalizes() {
        let store = load("a 3 4 0\nb 1 1 1\n", 3);
        assert_eq!(store.len(), 2);

        let a = store.lookup("a").unwrap();
        assert!((a[0] - 0.6).abs() < 1e-12);
        assert!((a[1] - 0.8).abs() < 1e-12);

        for (_, v) in store.entries() {
            assert!((v.magnitude() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_vector_kept() {
        let store = load("zero 0 0 0\n", 3);
        assert_eq!(store.lookup("zero").unwrap(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_short_line_skipped() {
        let mut text = String::from("good");
        for i in 0..300 {
            text.push_str(&format!(" {}", i as f64 * 0.01));
        }
        text.push_str("\nbad 1.0\n");

        let store = load(&text, DEFAULT_DIMENSION);
        assert_eq!(store.len(), 1);
        assert!(store.contains("good"));
        assert_eq!(store.load_report().skipped, 1);
    }

    #[test]
    fn test_header_and_blank_lines_skipped() {
        let store = load("2 3\n\nx 1 0 0\n   \ny\t0\t1\t0\n", 3);
        assert_eq!(store.len(), 2);
        assert_eq!(store.load_report().lines, 5);
        assert_eq!(store.load_report().skipped, 3);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let store = load("x 0 2 0 99 99\n", 3);
        assert_eq!(store.lookup("x").unwrap(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_lowercase_and_last_write_wins() {
        let store = load("King 1 0\nking 0 1\n", 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("king").unwrap(), &[0.0, 1.0]);
        assert!(store.lookup("King").is_none());
        assert_eq!(store.load_report().overwritten, 1);
    }

    #[test]
    fn test_invalid_component_fails() {
        let err = EmbeddingStore::from_reader(Cursor::new("a 1 0\nb 1 oops\n"), 2).unwrap_err();
        match err {
            LoadError::InvalidComponent { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, 2);
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_component_fails() {
        for bad in ["nan", "inf", "-inf", "1e400"] {
            let text = format!("a 1 0\nb 1 {bad}\n");
            let err = EmbeddingStore::from_reader(Cursor::new(text), 2).unwrap_err();
            match err {
                LoadError::InvalidComponent { line, field, value } => {
                    assert_eq!((line, field), (2, 2));
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = EmbeddingStore::from_reader(Cursor::new("a 1\n"), 0).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDimension(0)));
    }

    #[test]
    fn test_dot_equals_cosine() {
        let store = load("a 0.2 -1.5 3.0\nb 4.0 0.1 -0.7\n", 3);
        let a = store.lookup("a").unwrap();
        let b = store.lookup("b").unwrap();
        assert!((dot_product(a, b) - cosine_similarity(a, b)).abs() < 1e-9);
    }

    #[test]
    fn test_entries_restartable() {
        let store = load("a 1 0\nb 0 1\nc 1 1\n", 2);
        let first: usize = store.entries().count();
        let second: usize = store.entries().count();
        assert_eq!(first, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_open_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha 1 0 0").unwrap();
        writeln!(file, "beta 0 1 0").unwrap();
        file.flush().unwrap();

        let store = EmbeddingStore::open(file.path(), 3).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.dimension(), 3);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EmbeddingStore::open(dir.path().join("missing.txt"), 3).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
