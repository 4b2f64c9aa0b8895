//! Request Parsing
//!
//! One request per line: `VERB [args]`, verb case-insensitive.

use crate::error::ProtocolError;

/// Parsed request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Health check
    Ping,

    /// Query metrics summary
    Stats,

    /// Table dimension
    Dim,

    /// Number of words in the table
    Size,

    /// Nearest words to an expression; `k` falls back to the server default
    Query { k: Option<usize>, expression: String },
}

impl Request {
    /// Parse a request from a single line (without the terminator)
    pub fn parse(line: &str) -> Result<Self, ProtocolError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        if verb.is_empty() {
            return Err(ProtocolError::Malformed("Empty request".into()));
        }

        match verb.to_ascii_uppercase().as_str() {
            "PING" => Ok(Request::Ping),
            "STATS" => Ok(Request::Stats),
            "DIM" => Ok(Request::Dim),
            "SIZE" => Ok(Request::Size),

            "QUERY" => {
                if rest.is_empty() {
                    return Err(ProtocolError::Malformed(
                        "QUERY requires an expression: QUERY <expression>".into(),
                    ));
                }
                Ok(Request::Query {
                    k: None,
                    expression: rest.to_string(),
                })
            }

            "TOPK" => {
                let (k, expression) = match rest.split_once(char::is_whitespace) {
                    Some((k, expr)) => (k, expr.trim()),
                    None => (rest, ""),
                };
                if k.is_empty() || expression.is_empty() {
                    return Err(ProtocolError::Malformed(
                        "TOPK requires a count and an expression: TOPK <k> <expression>".into(),
                    ));
                }
                let k = k
                    .parse::<usize>()
                    .map_err(|_| ProtocolError::Malformed(format!("Invalid count: {}", k)))?;
                Ok(Request::Query {
                    k: Some(k),
                    expression: expression.to_string(),
                })
            }

            _ => Err(ProtocolError::Malformed(format!(
                "Unknown command: {}",
                verb
            ))),
        }
    }
}
