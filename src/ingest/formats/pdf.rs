use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use crate::config::PdfSettings;
use crate::error::{QuoteError, Result};
use crate::ingest::formats::plaintext::PlaintextParser;
use crate::ingest::formats::QuoteParser;
use crate::models::QuoteRecord;

/// Name of the converted text file inside the per-call scratch directory.
const CONVERTED_FILE: &str = "converted.txt";

/// PDF parser that converts to text with an external tool (`pdftotext` by
/// default), then reads quotes line by line.
pub struct PdfParser {
    settings: PdfSettings,
}

impl Default for PdfParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfParser {
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(PdfSettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: PdfSettings) -> Self {
        Self { settings }
    }

    /// Create a uniquely named scratch directory, removed when dropped.
    fn scratch_dir(&self) -> Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("quotes-pdf-");
        let dir = match &self.settings.scratch_dir {
            Some(root) => builder.tempdir_in(root)?,
            None => builder.tempdir()?,
        };
        Ok(dir)
    }

    /// Run `<program> [extra_args] -layout <input> <output>`.
    fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        let program = &self.settings.program;
        let result = Command::new(program)
            .args(&self.settings.extra_args)
            .arg("-layout")
            .arg(input)
            .arg(output)
            .output();

        let out = match result {
            Ok(out) => out,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(QuoteError::ExternalTool {
                    tool: program.clone(),
                    detail: "not installed or not on PATH".into(),
                });
            }
            Err(e) => {
                return Err(QuoteError::ExternalTool {
                    tool: program.clone(),
                    detail: format!("failed to start: {e}"),
                });
            }
        };

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            tracing::warn!(tool = %program, status = %out.status, "{}", stderr.trim());
            return Err(QuoteError::ExternalTool {
                tool: program.clone(),
                detail: format!("{}: {}", out.status, stderr.trim()),
            });
        }
        Ok(())
    }
}

impl QuoteParser for PdfParser {
    fn format(&self) -> &'static str {
        "pdf"
    }

    fn parse(&self, path: &Path) -> Result<Vec<QuoteRecord>> {
        std::fs::metadata(path).map_err(|e| QuoteError::from_source_io(path, e))?;

        let scratch = self.scratch_dir()?;
        let converted = scratch.path().join(CONVERTED_FILE);
        self.convert(path, &converted)?;

        let quotes = match PlaintextParser::new().parse(&converted) {
            Err(QuoteError::FileNotFound { .. }) => {
                return Err(QuoteError::ExternalTool {
                    tool: self.settings.program.clone(),
                    detail: "exited successfully but wrote no output".into(),
                });
            }
            other => other?,
        };

        tracing::debug!(path = %path.display(), quotes = quotes.len(), "converted pdf");
        // Early returns above rely on drop; here removal errors are reported
        scratch.close()?;
        Ok(quotes)
    }
}
