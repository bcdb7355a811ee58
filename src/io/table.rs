//! Table output for coverage rows
//!
//! Renders the ordered sequence of finalized rows as a human-readable
//! table, titled with the report path. All formatting decisions about the
//! row CONTENT (percentages, sentinels) are made upstream by the core;
//! this module only lays the fields out.

use crate::types::{CoverageRow, ReportError};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::io::Write;

/// Column headers, in output order
const HEADERS: [&str; 11] = [
    "Test Name",
    "Source File",
    "Lines Hit",
    "Line Count",
    "Lines Covered",
    "Functions Hit",
    "Function Count",
    "Functions Covered",
    "Branches Hit",
    "Branch Count",
    "Branches Covered",
];

/// Render coverage rows as a table to the given writer
///
/// Writes the title (the report path) followed by an 11-column table with
/// one row per finalized record, in input order. An empty row sequence
/// renders the title and the header row only.
///
/// # Errors
///
/// Returns [`ReportError::Write`] if the output cannot be written.
pub fn render_coverage_table(
    title: &str,
    rows: &[CoverageRow],
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    // Content arrangement stays at the default so cells are never wrapped
    // to the terminal width; the table is as wide as its widest row.
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(HEADERS.to_vec());

    for row in rows {
        table.add_row(vec![
            row.test_name.clone(),
            row.source_file.clone(),
            row.lines_hit.to_string(),
            row.line_count.to_string(),
            row.lines_covered.clone(),
            row.functions_hit.to_string(),
            row.function_count.to_string(),
            row.functions_covered.clone(),
            row.branches_hit.to_string(),
            row.branch_count.to_string(),
            row.branches_covered.clone(),
        ]);
    }

    writeln!(output, "{title}").map_err(|e| ReportError::write(&e))?;
    writeln!(output, "{table}").map_err(|e| ReportError::write(&e))?;
    Ok(())
}
