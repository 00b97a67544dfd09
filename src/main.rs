// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdfsplit::cli::commands::Cli;
use pdfsplit::cli::output;
use pdfsplit::ingest::PdfTextExtractor;
use pdfsplit::runner;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(failures) if failures > 0 => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr; stdout carries the run result. `RUST_LOG` overrides
/// the `info` default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

/// Returns the number of PDFs that failed under `--keep-going`.
fn run(cli: &Cli) -> pdfsplit::error::Result<usize> {
    let config = cli.to_config();
    let summary = runner::run_split(&config, &PdfTextExtractor::new())?;

    if cli.json {
        println!("{}", output::format_json(&summary));
    } else {
        println!("{}", output::DONE);
    }
    Ok(summary.failures())
}
