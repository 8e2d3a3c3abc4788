use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::ingest::{Dispatcher, QuoteFormat};
use crate::models::QuoteRecord;

/// Quotes parsed from one file, with the detected format.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    pub path: String,
    pub format: Option<QuoteFormat>,
    pub count: usize,
    pub quotes: Vec<QuoteRecord>,
}

/// Parse `path` through the dispatcher and wrap the result for output.
pub fn parse_file(dispatcher: &Dispatcher, path: &Path) -> Result<ParseOutput> {
    let quotes = dispatcher.parse(path)?;
    Ok(ParseOutput {
        path: path.to_string_lossy().into(),
        format: dispatcher.format_for(path),
        count: quotes.len(),
        quotes,
    })
}

/// Whether a path can be parsed, without reading it.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutput {
    pub path: String,
    pub ingestible: bool,
}

#[must_use]
pub fn check_file(dispatcher: &Dispatcher, path: &Path) -> CheckOutput {
    CheckOutput {
        path: path.to_string_lossy().into(),
        ingestible: dispatcher.can_ingest(path),
    }
}
