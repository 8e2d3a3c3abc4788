use std::path::Path;

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::error::{QuoteError, Result};
use crate::ingest::formats::{split_on_dash, QuoteParser};
use crate::models::QuoteRecord;

/// Paragraph-based parser for Word documents with `"<body>" - <author>` lines.
pub struct DocxParser;

impl Default for DocxParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extract quotes from DOCX bytes. `origin` is used in error messages.
    pub fn parse_bytes(&self, bytes: &[u8], origin: &str) -> Result<Vec<QuoteRecord>> {
        let docx = docx_rs::read_docx(bytes).map_err(|e| QuoteError::DocumentFormat {
            path: origin.into(),
            detail: format!("DOCX parse error: {e}"),
        })?;

        let mut quotes = Vec::new();
        let mut skipped = 0usize;

        // Body-level paragraphs only; table cells are not quote lines
        for child in &docx.document.children {
            let DocumentChild::Paragraph(paragraph) = child else {
                continue;
            };
            let text = paragraph_text(paragraph);
            match split_on_dash(&text) {
                Some((body, author)) => quotes.push(QuoteRecord::new(clean(body), clean(author))),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            tracing::debug!(skipped, kept = quotes.len(), "skipped paragraphs without a dash");
        }
        Ok(quotes)
    }
}

impl QuoteParser for DocxParser {
    fn format(&self) -> &'static str {
        "docx"
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        let bytes = std::fs::read(path).map_err(|e| QuoteError::from_source_io(path, e))?;
        self.parse_bytes(&bytes, &path.to_string_lossy())
    }
}

/// Remove literal double quotes, then surrounding whitespace.
fn clean(part: &str) -> String {
    part.replace('"', "").trim().to_string()
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    collect_text(&paragraph.children, &mut text);
    text
}

fn collect_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_text(&link.children, out),
            _ => {}
        }
    }
}
