//! CLI entry point for digit sequence image generation

use clap::Parser;
use digitseq::io::cli::{Cli, SequenceRunner};
use digitseq::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

// Allow print for the final summary and error reporting
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();

    let fallback = if cli.verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();

    let quiet = cli.quiet;
    let mut runner = SequenceRunner::new(cli);
    match runner.run() {
        Ok(written) => {
            if !quiet {
                println!("Created {} digit sequence image(s)", written.len());
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
