use std::collections::HashMap;
use std::path::Path;

use crate::config::Settings;
use crate::error::{QuoteError, Result};
use crate::ingest::format::QuoteFormat;
use crate::ingest::formats::{
    csv_parser::CsvParser, docx::DocxParser, pdf::PdfParser, plaintext::PlaintextParser,
    QuoteParser,
};
use crate::models::QuoteRecord;

/// Routes files to the appropriate quote parser based on extension.
///
/// The parser table is fixed at construction; parsing keeps no state
/// between calls.
pub struct Dispatcher {
    parsers: HashMap<QuoteFormat, Box<dyn QuoteParser>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    #[must_use]
    pub fn with_settings(settings: &Settings) -> Self {
        let mut parsers: HashMap<QuoteFormat, Box<dyn QuoteParser>> = HashMap::new();
        parsers.insert(QuoteFormat::Txt, Box::new(PlaintextParser::new()));
        parsers.insert(QuoteFormat::Csv, Box::new(CsvParser::new()));
        parsers.insert(QuoteFormat::Docx, Box::new(DocxParser::new()));
        parsers.insert(
            QuoteFormat::Pdf,
            Box::new(PdfParser::with_settings(settings.pdf.clone())),
        );

        Self { parsers }
    }

    /// Detect the format of `path` from its extension.
    #[must_use]
    pub fn format_for(&self, path: &Path) -> Option<QuoteFormat> {
        QuoteFormat::from_path(path).filter(|f| self.parsers.contains_key(f))
    }

    /// Check whether `path` has an extension this dispatcher can parse.
    #[must_use]
    pub fn can_ingest(&self, path: impl AsRef<Path>) -> bool {
        self.format_for(path.as_ref()).is_some()
    }

    /// Parse quotes from `path` with the parser matching its extension.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<Vec<QuoteRecord>> {
        let path = path.as_ref();
        let Some(parser) = self
            .format_for(path)
            .and_then(|format| self.parsers.get(&format))
        else {
            return Err(QuoteError::UnsupportedFormat {
                path: path.to_string_lossy().into(),
            });
        };

        let quotes = parser.parse(path)?;
        tracing::debug!(
            path = %path.display(),
            format = parser.format(),
            quotes = quotes.len(),
            "parsed quotes"
        );
        Ok(quotes)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
