//! Coverage record types for the lcov report parser
//!
//! This module defines the per-block accumulation state built up while
//! walking a tracefile. One `Record` corresponds to one `TN`/`SF` ...
//! `end_of_record` block.

/// Count of lines, functions, or branches in a record
///
/// Tracefile counts are non-negative; a value that does not parse as an
/// unsigned integer (including a negative number) degrades to zero under
/// the best-effort parsing policy.
pub type HitCount = u64;

/// In-progress coverage record for a single tracefile block
///
/// Created empty at parser start and after each emitted row, mutated
/// field-by-field as matching tag lines are encountered, and finalized into
/// a [`CoverageRow`](crate::types::CoverageRow) when `end_of_record` is seen.
/// The record is owned exclusively by the parsing loop; it never escapes
/// until finalized.
///
/// Fields default to zero counts and empty names until their tag is
/// observed. Tags may arrive in any order within a block. `*_hit` is not
/// required to be <= its `*_count`; malformed input passes through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Test name, set by the `TN` tag
    pub test_name: String,

    /// Source file path, set by the `SF` tag
    pub source_file: String,

    /// Lines hit, set by the `LH` tag
    pub lines_hit: HitCount,

    /// Instrumented line count, set by the `LF` tag
    pub line_count: HitCount,

    /// Functions hit, set by the `FNH` tag
    pub functions_hit: HitCount,

    /// Instrumented function count, set by the `FNF` tag
    pub function_count: HitCount,

    /// Branches hit, set by the `BRH` tag
    pub branches_hit: HitCount,

    /// Instrumented branch count, set by the `BRF` tag
    pub branch_count: HitCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = Record::default();

        assert_eq!(record.test_name, "");
        assert_eq!(record.source_file, "");
        assert_eq!(record.lines_hit, 0);
        assert_eq!(record.line_count, 0);
        assert_eq!(record.functions_hit, 0);
        assert_eq!(record.function_count, 0);
        assert_eq!(record.branches_hit, 0);
        assert_eq!(record.branch_count, 0);
    }
}
