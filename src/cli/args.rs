use clap::Parser;
use std::path::PathBuf;

/// Parse an lcov report into a human readable format
#[derive(Parser, Debug)]
#[command(name = "parse-lcov")]
#[command(about = "Parses an lcov report into a human readable format", long_about = None)]
pub struct CliArgs {
    /// Path to the lcov tracefile to summarize
    #[arg(
        short = 'r',
        long = "report",
        value_name = "REPORT",
        help = "Path to the lcov report file"
    )]
    pub report: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::short_flag(&["parse-lcov", "-r", "report.info"])]
    #[case::long_flag(&["parse-lcov", "--report", "report.info"])]
    fn test_report_flag_parsing(#[case] args: &[&str]) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.report, Path::new("report.info"));
    }

    // The report flag is required
    #[rstest]
    #[case::no_args(&["parse-lcov"])]
    #[case::flag_without_value(&["parse-lcov", "-r"])]
    #[case::unknown_flag(&["parse-lcov", "--format", "csv", "-r", "report.info"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
