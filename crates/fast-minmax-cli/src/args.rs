//! CLI argument parsing module.
//!
//! The CLI follows the pattern: `fast-minmax <command> <input.csv> <width> [options]`
//!
//! # Examples
//!
//! ```bash
//! # Max/min of every 5-sample window of the first numeric column
//! fast-minmax filter frames.csv 5
//!
//! # Pick the algorithm and the column, write to a file
//! fast-minmax filter frames.csv 31 --variant divide-conquer -c magnitude -o out.csv
//!
//! # One centred window per sample, edges repeated
//! fast-minmax filter frames.csv 7 --clamp
//!
//! # Cross-check every algorithm against the brute-force reference
//! fast-minmax verify frames.csv 64
//!
//! # List the algorithms
//! fast-minmax variants
//! ```

use clap::{ArgAction, Parser, Subcommand};
use fast_minmax::Variant;

/// fast-minmax: sliding-window max/min filters for CSV columns
#[derive(Parser, Debug)]
#[command(name = "fast-minmax")]
#[command(author, version, about = "Sliding-window maximum and minimum filters")]
#[command(long_about = "fast-minmax computes the maximum and minimum of every window \
    of consecutive samples in a CSV column. Six interchangeable algorithms are \
    available; `verify` runs them all and checks that they agree.")]
pub struct Args {
    /// The command to run
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute sliding-window max and min of one column
    #[command(about = "Compute sliding-window max and min of one column")]
    Filter {
        /// Input CSV file
        input: String,

        /// Window width in samples
        #[arg(allow_negative_numbers = true)]
        width: i64,

        /// Algorithm to use
        #[arg(long, default_value_t = Variant::default())]
        variant: Variant,

        /// Column to filter (first numeric column if not specified)
        #[arg(short, long)]
        column: Option<String>,

        /// Centre one window on every sample, repeating the edge samples
        /// (requires an odd width)
        #[arg(long)]
        clamp: bool,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run every algorithm and check them against the brute-force reference
    #[command(about = "Check every algorithm against the brute-force reference")]
    Verify {
        /// Input CSV file
        input: String,

        /// Window width in samples
        #[arg(allow_negative_numbers = true)]
        width: i64,

        /// Column to filter (first numeric column if not specified)
        #[arg(short, long)]
        column: Option<String>,
    },

    /// List the available algorithms
    #[command(about = "List the available algorithms and their width limits")]
    Variants,
}

impl Command {
    /// Returns the command name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Filter { .. } => "filter",
            Command::Verify { .. } => "verify",
            Command::Variants => "variants",
        }
    }
}
