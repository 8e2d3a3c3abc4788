use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("file not found: {path}")]
    FileNotFound { path: String },

    #[error("missing column `{column}` in {path}")]
    Schema { path: String, column: String },

    #[error("parse error in {path}: {detail}")]
    Parse { path: String, detail: String },

    #[error("invalid document {path}: {detail}")]
    DocumentFormat { path: String, detail: String },

    #[error("external tool `{tool}` failed: {detail}")]
    ExternalTool { tool: String, detail: String },

    #[error("unsupported format: {path} (expected one of csv, docx, pdf, txt)")]
    UnsupportedFormat { path: String },

    #[error("config error: {0}")]
    Config(String),
}

impl QuoteError {
    /// Map an error from opening or reading a source file, keeping
    /// missing files distinct from other I/O failures.
    pub(crate) fn from_source_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            QuoteError::FileNotFound {
                path: path.to_string_lossy().into(),
            }
        } else {
            QuoteError::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
