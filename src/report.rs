//! Report generation orchestration
//!
//! Coordinates the complete pipeline: stream tracefile lines through the
//! record accumulator, then hand the finalized rows to the table renderer.
//! Processing is single-threaded and synchronous, front to back, with no
//! lookahead beyond the current line.

use crate::core::RecordAccumulator;
use crate::io::line_reader::LineReader;
use crate::io::table::render_coverage_table;
use crate::types::ReportError;
use std::io::Write;
use std::path::Path;

/// Generate a coverage summary table from a tracefile
///
/// This function orchestrates the complete pipeline:
/// 1. Opens the tracefile for streaming line iteration
/// 2. Folds each line through the [`RecordAccumulator`]
/// 3. Renders the collected rows as a table, titled with the report path
///
/// The report path arrives as an explicit parameter; there is no
/// process-wide configuration state.
///
/// # Arguments
///
/// * `report_path` - Path to the lcov tracefile
/// * `output` - Writer receiving the rendered table
///
/// # Errors
///
/// Returns an error if the tracefile cannot be opened or read, or if the
/// output cannot be written. Parsing itself never fails: malformed lines
/// degrade per the accumulator's documented leniency, and a truncated
/// trailing record is dropped without a diagnostic.
pub fn generate_report(report_path: &Path, output: &mut dyn Write) -> Result<(), ReportError> {
    let reader = LineReader::new(report_path)?;

    let mut accumulator = RecordAccumulator::new();
    let mut rows = Vec::new();
    for line in reader {
        let line = line?;
        if let Some(row) = accumulator.accept(&line) {
            rows.push(row);
        }
    }

    render_coverage_table(&report_path.display().to_string(), &rows, output)
}
