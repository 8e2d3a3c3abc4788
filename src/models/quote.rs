use std::fmt;

use serde::Serialize;

/// A single quote extracted from a source document.
///
/// Records are immutable once built; parsers decide how much cleanup
/// (trimming, quote stripping) happens before construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QuoteRecord {
    body: String,
    author: String,
}

impl QuoteRecord {
    #[must_use]
    pub fn new(body: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            author: author.into(),
        }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for QuoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.body, self.author)
    }
}
