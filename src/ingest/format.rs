use std::fmt;
use std::path::Path;

use serde::Serialize;

/// The closed set of document formats quotes can be ingested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteFormat {
    Txt,
    Csv,
    Docx,
    Pdf,
}

impl QuoteFormat {
    pub const ALL: [QuoteFormat; 4] = [
        QuoteFormat::Csv,
        QuoteFormat::Docx,
        QuoteFormat::Pdf,
        QuoteFormat::Txt,
    ];

    /// Match a bare extension (no dot), ignoring ASCII case.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(QuoteFormat::Txt),
            "csv" => Some(QuoteFormat::Csv),
            "docx" => Some(QuoteFormat::Docx),
            "pdf" => Some(QuoteFormat::Pdf),
            _ => None,
        }
    }

    /// Detect the format from the text after the last `.` of the file name.
    /// Names without a dot have no extension; non-UTF-8 names are matched lossily.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            QuoteFormat::Txt => "txt",
            QuoteFormat::Csv => "csv",
            QuoteFormat::Docx => "docx",
            QuoteFormat::Pdf => "pdf",
        }
    }

    /// How records are located in this format.
    #[must_use]
    pub fn parser_kind(self) -> &'static str {
        match self {
            QuoteFormat::Txt => "line",
            QuoteFormat::Csv => "table",
            QuoteFormat::Docx => "document",
            QuoteFormat::Pdf => "external",
        }
    }
}

impl fmt::Display for QuoteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
