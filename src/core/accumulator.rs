//! Record accumulator for lcov tracefiles
//!
//! This module provides the RecordAccumulator, the one component with
//! non-trivial logic: it folds an ordered sequence of tracefile lines into
//! an in-progress [`Record`], emitting a finalized [`CoverageRow`] each time
//! an `end_of_record` terminator is seen.
//!
//! # Contract
//!
//! The fold is total. For any finite sequence of text lines it produces a
//! (possibly empty) sequence of rows without raising:
//!
//! - Unrecognized codes are no-ops.
//! - Malformed numeric values degrade to zero under the best-effort parse
//!   (see [`parse_count`]).
//! - Consecutive `end_of_record` lines each emit an all-default row.
//! - A trailing record with no `end_of_record` at end of input is silently
//!   dropped - never emitted. This mirrors the upstream tracefile contract:
//!   a block only exists once its terminator is seen.
//!
//! # State
//!
//! The only state carried between lines is the current in-progress Record,
//! owned exclusively by the fold. There is no parse mode and no lookahead;
//! every line is processed identically.

use crate::core::tag::{classify, Tag};
use crate::types::{CoverageRow, HitCount, Record};

/// Best-effort numeric parse for tracefile count values
///
/// Count fields that do not parse as an unsigned integer are SET to zero;
/// no error is surfaced. This leniency is deliberate and documented: a
/// malformed `LF:abc` yields a line count of 0 (and therefore a `"-"`
/// coverage cell) rather than failing the whole report. The value is taken
/// verbatim, so padding whitespace also fails the parse and degrades to
/// zero.
pub fn parse_count(value: &str) -> HitCount {
    value.parse().unwrap_or(0)
}

/// Format a coverage percentage, guarding division by zero
///
/// Returns the sentinel `"-"` when `count` is zero. Otherwise the ratio is
/// scaled to a percentage, rounded to a whole number, and rendered with two
/// decimal places (`"50.00 %"`). Rendering a rounded whole with two decimals
/// is the established output contract; keep it.
pub fn coverage_display(hit: HitCount, count: HitCount) -> String {
    if count == 0 {
        return "-".to_string();
    }
    let percent = ((hit as f64 / count as f64) * 100.0).round();
    format!("{percent:.2} %")
}

/// Folds tracefile lines into coverage rows
///
/// Feed lines in order through [`accept`](RecordAccumulator::accept); each
/// `end_of_record` yields one row. The accumulator resets itself after every
/// emitted row, so a single instance can process any number of blocks.
///
/// # Examples
///
/// ```
/// use parse_lcov::core::RecordAccumulator;
///
/// let mut accumulator = RecordAccumulator::new();
/// assert!(accumulator.accept("TN:unit").is_none());
/// assert!(accumulator.accept("LF:10").is_none());
/// assert!(accumulator.accept("LH:5").is_none());
///
/// let row = accumulator.accept("end_of_record").unwrap();
/// assert_eq!(row.test_name, "unit");
/// assert_eq!(row.lines_covered, "50.00 %");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordAccumulator {
    current: Record,
}

impl RecordAccumulator {
    /// Create an accumulator with an empty in-progress record
    pub fn new() -> Self {
        RecordAccumulator {
            current: Record::default(),
        }
    }

    /// Fold one line into the in-progress record
    ///
    /// Returns `Some(CoverageRow)` when the line is `end_of_record`,
    /// finalizing the current record and resetting to an empty one.
    /// All other lines return `None`.
    pub fn accept(&mut self, line: &str) -> Option<CoverageRow> {
        match classify(line) {
            Tag::TestName(value) => {
                self.current.test_name = value.to_string();
                None
            }
            Tag::SourceFile(value) => {
                self.current.source_file = value.to_string();
                None
            }
            Tag::LinesFound(value) => {
                self.current.line_count = parse_count(value);
                None
            }
            Tag::LinesHit(value) => {
                self.current.lines_hit = parse_count(value);
                None
            }
            Tag::FunctionsFound(value) => {
                self.current.function_count = parse_count(value);
                None
            }
            Tag::FunctionsHit(value) => {
                self.current.functions_hit = parse_count(value);
                None
            }
            Tag::BranchesFound(value) => {
                self.current.branch_count = parse_count(value);
                None
            }
            Tag::BranchesHit(value) => {
                self.current.branches_hit = parse_count(value);
                None
            }
            Tag::EndOfRecord => {
                let record = std::mem::take(&mut self.current);
                Some(finalize(record))
            }
            Tag::Unrecognized => None,
        }
    }
}

/// Finalize a completed record into an output row
///
/// Computes the three coverage percentages and moves the accumulated fields
/// into the immutable row handed to the renderer.
fn finalize(record: Record) -> CoverageRow {
    let lines_covered = coverage_display(record.lines_hit, record.line_count);
    let functions_covered = coverage_display(record.functions_hit, record.function_count);
    let branches_covered = coverage_display(record.branches_hit, record.branch_count);

    CoverageRow {
        test_name: record.test_name,
        source_file: record.source_file,
        lines_hit: record.lines_hit,
        line_count: record.line_count,
        lines_covered,
        functions_hit: record.functions_hit,
        function_count: record.function_count,
        functions_covered,
        branches_hit: record.branches_hit,
        branch_count: record.branch_count,
        branches_covered,
    }
}

/// Fold an ordered sequence of lines into coverage rows
///
/// One pass, front to back. A trailing record missing its `end_of_record`
/// is dropped.
///
/// # Examples
///
/// ```
/// use parse_lcov::core::summarize;
///
/// let rows = summarize(["TN:t", "SF:f", "LF:4", "LH:4", "end_of_record"]);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].lines_covered, "100.00 %");
/// ```
pub fn summarize<I, S>(lines: I) -> Vec<CoverageRow>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut accumulator = RecordAccumulator::new();
    lines
        .into_iter()
        .filter_map(|line| accumulator.accept(line.as_ref()))
        .collect()
}
