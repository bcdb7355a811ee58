//! Output row type for the lcov report parser
//!
//! A `CoverageRow` is the immutable, derived view of a finalized
//! [`Record`](crate::types::Record): the raw hit/count pairs plus the three
//! computed coverage percentages handed to the table renderer.

use super::record::HitCount;

/// One finalized row of the coverage summary table
///
/// The three `*_covered` fields hold either a formatted percentage in the
/// form `"NN.NN %"` or the sentinel `"-"` when the corresponding count is
/// zero (division-by-zero guard).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRow {
    /// Test name from the `TN` tag
    pub test_name: String,

    /// Source file path from the `SF` tag
    pub source_file: String,

    /// Lines hit
    pub lines_hit: HitCount,

    /// Instrumented line count
    pub line_count: HitCount,

    /// Line coverage percentage, or `"-"` when no lines were instrumented
    pub lines_covered: String,

    /// Functions hit
    pub functions_hit: HitCount,

    /// Instrumented function count
    pub function_count: HitCount,

    /// Function coverage percentage, or `"-"` when no functions were instrumented
    pub functions_covered: String,

    /// Branches hit
    pub branches_hit: HitCount,

    /// Instrumented branch count
    pub branch_count: HitCount,

    /// Branch coverage percentage, or `"-"` when no branches were instrumented
    pub branches_covered: String,
}
