pub mod csv_parser;
pub mod docx;
pub mod pdf;
pub mod plaintext;

use std::path::Path;

use crate::error::Result;
use crate::models::QuoteRecord;

/// Trait for per-format quote parsers.
pub trait QuoteParser: Send + Sync {
    /// Format identifier (the file extension it handles).
    fn format(&self) -> &'static str;

    /// Read the file at `path` and extract quotes in source order.
    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>>;
}

/// Split a `<body> - <author>` line into its raw body and author parts.
///
/// Splits on every `-`: the author is the text between the first and the
/// second dash, so `"a - b - c"` yields `("a ", " b ")`. Returns `None` when
/// the line has no dash.
pub(crate) fn split_on_dash(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split('-');
    let body = parts.next()?;
    let author = parts.next()?;
    Some((body, author))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_simple_line() {
        assert_eq!(split_on_dash("Be the change. - Gandhi"), Some(("Be the change. ", " Gandhi")));
    }

    #[test]
    fn split_without_dash() {
        assert_eq!(split_on_dash("no dash here"), None);
    }

    #[test]
    fn split_truncates_at_second_dash() {
        assert_eq!(
            split_on_dash("Well-being matters - Anon"),
            Some(("Well", "being matters "))
        );
    }

    #[test]
    fn split_trailing_dash_gives_empty_author() {
        assert_eq!(split_on_dash("dangling -"), Some(("dangling ", "")));
    }
}
