//! Response types
//!
//! Each response is rendered as a single text line.

use std::fmt;

use crate::engine::Neighbor;

/// Response to a request
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Pong response (for PING)
    Pong,

    /// Free-form success payload
    Text(String),

    /// Integer value
    Integer(u64),

    /// Ranked query results
    Neighbors(Vec<Neighbor>),

    /// Error response
    Error(String),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Pong => write!(f, "PONG"),
            Response::Text(text) => write!(f, "OK {}", text),
            Response::Integer(n) => write!(f, "OK {}", n),
            Response::Neighbors(items) => {
                write!(f, "OK")?;
                for n in items {
                    write!(f, " {}:{:.6}", n.word, n.score)?;
                }
                Ok(())
            }
            // Newlines would break framing
            Response::Error(msg) => write!(f, "ERR {}", msg.replace(['\r', '\n'], " ")),
        }
    }
}
