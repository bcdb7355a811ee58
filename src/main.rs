//! parse-lcov CLI
//!
//! Command-line interface for summarizing lcov tracefiles as a table.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --report report.info
//! cargo run -- -r report.info
//! ```
//!
//! The program reads the tracefile, folds its records into coverage rows,
//! and prints a summary table to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use parse_lcov::cli;
use parse_lcov::report;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Generate the coverage summary table to stdout
    let mut output = std::io::stdout();
    if let Err(e) = report::generate_report(&args.report, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
