//! Supported format listing for the CLI.

use serde::Serialize;

use crate::ingest::QuoteFormat;

/// Result of listing supported extensions.
#[derive(Debug, Clone, Serialize)]
pub struct SupportedResult {
    /// The list of supported extensions.
    pub extensions: Vec<ExtensionInfo>,
}

/// Information about a supported extension.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionInfo {
    /// The file extension (e.g., ".csv").
    pub ext: String,
    /// The format name (e.g., "csv").
    pub format: QuoteFormat,
    /// How quotes are located (line, table, document, external).
    pub parser: String,
}

/// List all supported file extensions with their parser kind.
#[must_use]
pub fn list_supported() -> SupportedResult {
    let mut infos: Vec<ExtensionInfo> = QuoteFormat::ALL
        .iter()
        .map(|&format| ExtensionInfo {
            ext: format!(".{}", format.extension()),
            format,
            parser: format.parser_kind().to_string(),
        })
        .collect();

    infos.sort_by(|a, b| a.ext.cmp(&b.ext));

    SupportedResult { extensions: infos }
}
