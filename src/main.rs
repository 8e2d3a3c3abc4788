// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quote_engine::cli::commands::{Cli, Command};
use quote_engine::cli::output;
use quote_engine::config::Settings;
use quote_engine::ingest::Dispatcher;
use quote_engine::operations;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

/// Log to stderr; stdout carries the JSON result.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::fmt::Display>> {
    match cli.command {
        Command::Parse { path, config } => cmd_parse(&path, config.as_deref()),
        Command::Check { path } => cmd_check(&path),
        Command::Supported => cmd_supported(),
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn cmd_parse(path: &Path, config: Option<&Path>) -> CmdResult {
    let settings = Settings::load_or_default(config).map_err(map_err)?;
    let dispatcher = Dispatcher::with_settings(&settings);
    let result = operations::parse_file(&dispatcher, path).map_err(map_err)?;
    tracing::info!(path = %path.display(), count = result.count, "parsed");
    println!("{}", output::format_json(&result));
    Ok(())
}

fn cmd_check(path: &Path) -> CmdResult {
    let result = operations::check_file(&Dispatcher::new(), path);
    println!("{}", output::format_json(&result));
    Ok(())
}

fn cmd_supported() -> CmdResult {
    let result = operations::list_supported();
    println!("{}", output::format_json(&result));
    Ok(())
}
