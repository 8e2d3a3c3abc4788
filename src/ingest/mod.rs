pub mod dispatcher;
pub mod format;
pub mod formats;

use std::path::Path;

use crate::error::Result;
use crate::models::QuoteRecord;

pub use dispatcher::Dispatcher;
pub use format::QuoteFormat;
pub use formats::QuoteParser;

/// Parse quotes from `path` with default settings.
pub fn parse(path: impl AsRef<Path>) -> Result<Vec<QuoteRecord>> {
    Dispatcher::new().parse(path)
}

/// Check whether `path` has a supported extension.
#[must_use]
pub fn can_ingest(path: impl AsRef<Path>) -> bool {
    QuoteFormat::from_path(path.as_ref()).is_some()
}
