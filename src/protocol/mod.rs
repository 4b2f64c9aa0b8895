//! Query Protocol
//!
//! Newline-framed text protocol for the query server: one request line in,
//! one response line out.

mod codec;
mod request;
mod response;

pub use codec::{QueryCodec, DEFAULT_MAX_LINE_LENGTH};
pub use request::Request;
pub use response::Response;
