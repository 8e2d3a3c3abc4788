use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{QuoteError, Result};

/// Default PDF-to-text converter (poppler-utils).
const DEFAULT_PDF_PROGRAM: &str = "pdftotext";

/// User settings, optionally loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// PDF conversion configuration.
    pub pdf: PdfSettings,
}

/// Settings for the external PDF-to-text converter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PdfSettings {
    /// Converter executable, looked up on `PATH` when not absolute.
    pub program: String,
    /// Extra arguments placed before `-layout <input> <output>`.
    pub extra_args: Vec<String>,
    /// Directory under which per-call scratch directories are created
    /// (system temp dir when unset).
    pub scratch_dir: Option<PathBuf>,
}

impl Default for PdfSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_PDF_PROGRAM.into(),
            extra_args: Vec::new(),
            scratch_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| QuoteError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| QuoteError::Config(format!("invalid {}: {e}", path.display())))
    }

    /// Load from `path` when given, otherwise return defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
