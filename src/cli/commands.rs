use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "quotes",
    version,
    about = "Extract quotes from text, CSV, DOCX and PDF files",
    after_help = "Text and PDF lines use the form 'body - author'. CSV files need \
                  'body' and 'author' header columns. PDF conversion requires \
                  pdftotext (poppler-utils) unless another converter is configured."
)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse quotes from a file and print them as JSON
    Parse {
        /// File to parse (.txt, .csv, .docx or .pdf)
        path: PathBuf,
        /// TOML settings file (PDF converter options)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Report whether a file's extension is supported, without reading it
    Check {
        /// File path to check
        path: PathBuf,
    },

    /// List all supported file extensions and their parser types.
    Supported,
}
