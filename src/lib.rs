// Pedantic lint configuration for the crate.
// - missing_errors_doc: Error handling is self-evident from Result types
// - missing_panics_doc: Panics are rare and documented inline
// - module_name_repetitions: Parser types are named after their module
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod operations;

pub use config::Settings;
pub use error::{QuoteError, Result};
pub use ingest::{can_ingest, parse, Dispatcher, QuoteFormat};
pub use models::QuoteRecord;
