//! Server Configuration

use crate::protocol::DEFAULT_MAX_LINE_LENGTH;

/// Default number of results per query
pub const DEFAULT_TOP_K: usize = 5;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub bind: String,

    /// Port number
    pub port: u16,

    /// Results returned by `QUERY` when no count is given
    pub top_k: usize,

    /// Longest accepted request line in bytes
    pub max_line_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 6390,
            top_k: DEFAULT_TOP_K,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl Config {
    /// Create a new config with custom port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Create a new config with custom bind address
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Set the default result count
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the request line limit
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    /// `bind:port` address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = Config::default()
            .with_bind("0.0.0.0")
            .with_port(7000)
            .with_top_k(10)
            .with_max_line_length(128);

        assert_eq!(config.addr(), "0.0.0.0:7000");
        assert_eq!(config.top_k, 10);
        assert_eq!(config.max_line_length, 128);
    }
}
