//! Shared operations behind the CLI commands.

pub mod parse;
pub mod supported;

pub use parse::{check_file, parse_file, CheckOutput, ParseOutput};
pub use supported::{list_supported, ExtensionInfo, SupportedResult};
