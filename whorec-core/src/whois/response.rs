use std::fmt;

use crate::error::Result;
use crate::record::Record;

/// A raw registry reply paired with the domain it was requested for.
///
/// Produced by whatever transport performed the query; the parsers only
/// read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    query: String,
    body: String,
}

impl Response {
    pub fn new(query: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            body: body.into(),
        }
    }

    /// Builds a response from bytes read off the wire.
    ///
    /// Registries are not consistent about encoding, so invalid UTF-8 is
    /// decoded as Latin-1 instead of being rejected.
    pub fn from_bytes(query: impl Into<String>, bytes: &[u8]) -> Self {
        let body = match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => bytes.iter().map(|&c| c as char).collect(),
        };
        Self::new(query, body)
    }

    /// The domain exactly as it was requested.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Extracts a [`Record`] using the strategy registered for the query's suffix.
    pub fn parse(&self) -> Result<Option<Record>> {
        super::dispatch::parse(self)
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}
