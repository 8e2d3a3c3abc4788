use std::path::Path;

use crate::error::{QuoteError, Result};
use crate::ingest::formats::{split_on_dash, QuoteParser};
use crate::models::QuoteRecord;

/// Line-oriented parser for `<body> - <author>` text files.
pub struct PlaintextParser;

impl Default for PlaintextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaintextParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract quotes from already-loaded text. Lines without a dash are skipped.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    #[must_use]
    pub fn parse_text(&self, source: &str) -> Vec<QuoteRecord> {
        let mut quotes = Vec::new();
        let mut skipped = 0usize;

        let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
        for line in normalized.lines() {
            match split_on_dash(line) {
                Some((body, author)) => quotes.push(QuoteRecord::new(body.trim(), author.trim())),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, kept = quotes.len(), "skipped lines without a dash");
        }
        quotes
    }
}

impl QuoteParser for PlaintextParser {
    fn format(&self) -> &'static str {
        "txt"
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let source =
            std::fs::read_to_string(path).map_err(|e| QuoteError::from_source_io(path, e))?;
        Ok(self.parse_text(&source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parser() -> PlaintextParser {
        PlaintextParser::new()
    }

    #[test]
    fn parse_skips_lines_without_dash() {
        let quotes = parser().parse_text("Be the change. - Gandhi\nno dash here\n");
        assert_eq!(quotes, vec![QuoteRecord::new("Be the change.", "Gandhi")]);
    }

    #[test]
    fn parse_keeps_file_order() {
        let quotes = parser().parse_text("First - A\nSecond - B\nThird - C");
        let authors: Vec<&str> = quotes.iter().map(QuoteRecord::author).collect();
        assert_eq!(authors, vec!["A", "B", "C"]);
    }

    #[test]
    fn parse_truncates_author_at_second_dash() {
        let quotes = parser().parse_text("To be - or not - Shakespeare\n");
        assert_eq!(quotes, vec![QuoteRecord::new("To be", "or not")]);
    }

    #[test]
    fn parse_handles_crlf() {
        let quotes = parser().parse_text("Stay hungry - Jobs\r\nStay foolish - Jobs\r\n");
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[1].author(), "Jobs");
    }

    #[test]
    fn parse_handles_lone_cr() {
        let quotes = parser().parse_text("A - B\rC - D\r");
        assert_eq!(quotes, vec![QuoteRecord::new("A", "B"), QuoteRecord::new("C", "D")]);
    }

    #[test]
    fn parse_lone_cr_file_from_disk() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(b"Carpe diem - Horace\rno dash\rKnow thyself - Socrates\r").unwrap();
        let quotes = parser().parse(tmp.path()).unwrap();
        assert_eq!(
            quotes,
            vec![
                QuoteRecord::new("Carpe diem", "Horace"),
                QuoteRecord::new("Know thyself", "Socrates"),
            ]
        );
    }

    #[test]
    fn parse_keeps_empty_fields() {
        let quotes = parser().parse_text(" - \n");
        assert_eq!(quotes, vec![QuoteRecord::new("", "")]);
    }

    #[test]
    fn parse_empty_source() {
        assert!(parser().parse_text("").is_empty());
    }

    #[test]
    fn parse_file_from_disk() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "Carpe diem - Horace\nplain line\n").unwrap();
        let quotes = parser().parse(tmp.path()).unwrap();
        assert_eq!(quotes, vec![QuoteRecord::new("Carpe diem", "Horace")]);
    }

    #[test]
    fn parse_missing_file() {
        let err = parser().parse(Path::new("/nonexistent/quotes.txt")).unwrap_err();
        assert!(matches!(err, QuoteError::FileNotFound { .. }));
    }

    #[test]
    fn parse_invalid_utf8_is_io_error() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(&[0xff, 0xfe, b'-', 0xff]).unwrap();
        let err = parser().parse(tmp.path()).unwrap_err();
        assert!(matches!(err, QuoteError::Io(_)));
    }

    #[test]
    fn format_returns_txt() {
        assert_eq!(parser().format(), "txt");
    }
}
