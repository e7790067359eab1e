//! fast-minmax command-line interface
//!
//! Reads a numeric column from a CSV file and writes the maximum and minimum
//! of every sliding window. See `fast-minmax --help`.

use std::process::ExitCode;

use clap::Parser;
use fast_minmax_cli::args::Args;
use fast_minmax_cli::{commands, setup_logging};

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose, args.quiet);

    match commands::run(&args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(command = args.command.name(), "command failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
