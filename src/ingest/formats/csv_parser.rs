use std::path::Path;

use crate::error::{QuoteError, Result};
use crate::ingest::formats::QuoteParser;
use crate::models::QuoteRecord;

const BODY_COLUMN: &str = "body";
const AUTHOR_COLUMN: &str = "author";

/// Parser for CSV files with `body` and `author` header columns.
///
/// Cell values are used exactly as read; no trimming.
pub struct CsvParser;

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract quotes from CSV bytes. `origin` is used in error messages.
    pub fn parse_bytes(&self, bytes: &[u8], origin: &str) -> Result<Vec<QuoteRecord>> {
        let bytes = strip_bom(bytes);

        // Short rows yield empty cells instead of failing the whole file
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| csv_error(origin, e))?
            .clone();
        let body_idx = column_index(&headers, BODY_COLUMN, origin)?;
        let author_idx = column_index(&headers, AUTHOR_COLUMN, origin)?;

        let mut quotes = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| csv_error(origin, e))?;
            let body = record.get(body_idx).unwrap_or_default();
            let author = record.get(author_idx).unwrap_or_default();
            quotes.push(QuoteRecord::new(body, author));
        }
        Ok(quotes)
    }
}

impl QuoteParser for CsvParser {
    fn format(&self) -> &'static str {
        "csv"
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let bytes = std::fs::read(path).map_err(|e| QuoteError::from_source_io(path, e))?;
        self.parse_bytes(&bytes, &path.to_string_lossy())
    }
}

fn column_index(headers: &csv::StringRecord, column: &str, origin: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| QuoteError::Schema {
            path: origin.into(),
            column: column.into(),
        })
}

fn csv_error(origin: &str, err: csv::Error) -> QuoteError {
    let detail = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => QuoteError::Io(io),
        _ => QuoteError::Parse {
            path: origin.into(),
            detail,
        },
    }
}

/// Strip UTF-8 BOM if present
fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes)
}
