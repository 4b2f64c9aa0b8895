//! Line Codec for Tokio
//!
//! Implements Encoder and Decoder traits for newline-framed text I/O.

use bytes::{BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

use super::response::Response;
use crate::error::ProtocolError;

/// Default maximum request line length in bytes
pub const DEFAULT_MAX_LINE_LENGTH: usize = 8 * 1024;

/// Tokio codec: decodes request lines, encodes responses
#[derive(Debug, Clone)]
pub struct QueryCodec {
    max_line_length: usize,
    /// Bytes already searched for a terminator
    scanned: usize,
}

impl Default for QueryCodec {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH)
    }
}

impl QueryCodec {
    pub fn new(max_line_length: usize) -> Self {
        Self {
            max_line_length,
            scanned: 0,
        }
    }

    fn finish_line(&self, mut raw: BytesMut) -> Result<String, ProtocolError> {
        if raw.last() == Some(&b'\n') {
            raw.truncate(raw.len() - 1);
        }
        if raw.last() == Some(&b'\r') {
            raw.truncate(raw.len() - 1);
        }
        if raw.len() > self.max_line_length {
            return Err(ProtocolError::LineTooLong {
                limit: self.max_line_length,
            });
        }
        String::from_utf8(raw.to_vec()).map_err(|_| ProtocolError::InvalidUtf8)
    }
}

impl Decoder for QueryCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let start = self.scanned.min(src.len());
        let newline = src[start..].iter().position(|b| *b == b'\n');

        match newline {
            Some(offset) => {
                let end = start + offset + 1;
                self.scanned = 0;
                let raw = src.split_to(end);
                self.finish_line(raw).map(Some)
            }
            None => {
                // Allow room for a trailing "\r\n"
                if src.len() > self.max_line_length + 2 {
                    return Err(ProtocolError::LineTooLong {
                        limit: self.max_line_length,
                    });
                }
                self.scanned = src.len();
                Ok(None)
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        self.scanned = 0;
        if src.is_empty() {
            return Ok(None);
        }
        let raw = src.split_to(src.len());
        self.finish_line(raw).map(Some)
    }
}

impl Encoder<Response> for QueryCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: Response, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let line = item.to_string();
        dst.reserve(line.len() + 1);
        dst.put_slice(line.as_bytes());
        dst.put_u8(b'\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lines() {
        let mut codec = QueryCodec::default();
        let mut buf = BytesMut::from(&b"PING\r\nQUERY king\n"[..]);

        assert_eq!(codec.decode(&mut buf).unwrap().as_deref(), Some("PING"));
        assert_eq!(
            codec.decode(&mut buf).unwrap().as_deref(),
            Some("QUERY king")
        );
        assert!(codec.decode(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_partial_decode() {
        let mut codec = QueryCodec::default();
        let mut buf = BytesMut::from(&b"QUERY ki"[..]);
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.extend_from_slice(b"ng - man\n");
        assert_eq!(
            codec.decode(&mut buf).unwrap().as_deref(),
            Some("QUERY king - man")
        );
    }

    #[test]
    fn test_decode_eof_without_newline() {
        let mut codec = QueryCodec::default();
        let mut buf = BytesMut::from(&b"STATS"[..]);
        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert_eq!(codec.decode_eof(&mut buf).unwrap().as_deref(), Some("STATS"));
        assert!(codec.decode_eof(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_line_too_long() {
        let mut codec = QueryCodec::new(8);
        let mut buf = BytesMut::from(&b"QUERY a very long expression"[..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(ProtocolError::LineTooLong { limit: 8 })
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut codec = QueryCodec::default();
        let mut buf = BytesMut::from(&b"QUERY \xff\xfe\n"[..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(ProtocolError::InvalidUtf8)
        ));
    }

    #[test]
    fn test_encode() {
        let mut codec = QueryCodec::default();
        let mut buf = BytesMut::new();
        codec.encode(Response::Pong, &mut buf).unwrap();
        codec.encode(Response::Integer(3), &mut buf).unwrap();
        assert_eq!(&buf[..], b"PONG\nOK 3\n");
    }
}
