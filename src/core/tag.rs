//! Tracefile line classification
//!
//! Each tracefile line is split on the FIRST colon into a code and a value.
//! The value is everything after that first colon, further colons included,
//! so source file paths like `C:\src\main.c` survive intact. A line with no
//! colon classifies with the whole line as the code and an empty value;
//! that is how the bare `end_of_record` terminator comes through, and how
//! any other bare token falls into [`Tag::Unrecognized`].
//!
//! Classification never fails. Codes outside the recognized set are
//! [`Tag::Unrecognized`] and the accumulator treats them as no-ops.

/// A classified tracefile line
///
/// Value-carrying variants borrow the raw value substring verbatim,
/// including any leading or trailing whitespace. Numeric interpretation is
/// deferred to the accumulator's best-effort parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    /// `TN` - test name
    TestName(&'a str),

    /// `SF` - source file path
    SourceFile(&'a str),

    /// `LF` - instrumented line count
    LinesFound(&'a str),

    /// `LH` - lines hit
    LinesHit(&'a str),

    /// `FNF` - instrumented function count
    FunctionsFound(&'a str),

    /// `FNH` - functions hit
    FunctionsHit(&'a str),

    /// `BRF` - instrumented branch count
    BranchesFound(&'a str),

    /// `BRH` - branches hit
    BranchesHit(&'a str),

    /// `end_of_record` - finalize the current record
    EndOfRecord,

    /// Any other code (including tracefile tags this tool does not
    /// summarize, such as `DA`, `FN`, or `FNDA`)
    Unrecognized,
}

/// Classify a single tracefile line
///
/// Splits on the first colon; the remainder of the line is the value.
/// Lines without a colon are treated as a bare code with an empty value.
pub fn classify(line: &str) -> Tag<'_> {
    let (code, value) = match line.split_once(':') {
        Some((code, value)) => (code, value),
        None => (line, ""),
    };

    match code {
        "TN" => Tag::TestName(value),
        "SF" => Tag::SourceFile(value),
        "LF" => Tag::LinesFound(value),
        "LH" => Tag::LinesHit(value),
        "FNF" => Tag::FunctionsFound(value),
        "FNH" => Tag::FunctionsHit(value),
        "BRF" => Tag::BranchesFound(value),
        "BRH" => Tag::BranchesHit(value),
        "end_of_record" => Tag::EndOfRecord,
        _ => Tag::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::test_name("TN:unit", Tag::TestName("unit"))]
    #[case::source_file("SF:src/main.c", Tag::SourceFile("src/main.c"))]
    #[case::lines_found("LF:10", Tag::LinesFound("10"))]
    #[case::lines_hit("LH:5", Tag::LinesHit("5"))]
    #[case::functions_found("FNF:2", Tag::FunctionsFound("2"))]
    #[case::functions_hit("FNH:2", Tag::FunctionsHit("2"))]
    #[case::branches_found("BRF:4", Tag::BranchesFound("4"))]
    #[case::branches_hit("BRH:3", Tag::BranchesHit("3"))]
    #[case::end_of_record("end_of_record", Tag::EndOfRecord)]
    fn test_classify_recognized_tags(#[case] line: &str, #[case] expected: Tag) {
        assert_eq!(classify(line), expected);
    }

    #[rstest]
    #[case::instrumentation_tag("DA:1,1")]
    #[case::function_tag("FN:1,main")]
    #[case::unknown_tag("XX:foo")]
    #[case::bare_token("garbage")]
    #[case::empty_line("")]
    #[case::lowercase_code("tn:unit")]
    fn test_classify_unrecognized_lines(#[case] line: &str) {
        assert_eq!(classify(line), Tag::Unrecognized);
    }

    #[test]
    fn test_value_is_everything_after_first_colon() {
        // Windows-style paths contain colons; only the first one delimits
        assert_eq!(
            classify(r"SF:C:\src\main.c"),
            Tag::SourceFile(r"C:\src\main.c")
        );
    }

    #[test]
    fn test_value_whitespace_is_preserved() {
        assert_eq!(classify("TN: unit "), Tag::TestName(" unit "));
    }

    #[test]
    fn test_empty_value_after_colon() {
        assert_eq!(classify("TN:"), Tag::TestName(""));
    }
}
