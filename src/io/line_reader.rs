//! Streaming line reader with iterator interface
//!
//! Provides a streaming iterator over the lines of a tracefile. The reader
//! yields lines one at a time without loading the entire file into memory;
//! memory usage is O(1) per line, not O(file_size).
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, permission denied) are returned from
//!   `new()` before any parsing starts.
//! - Read errors mid-stream are yielded as Err variants in the iterator;
//!   the caller treats them as fatal.
//! - The file is closed when the reader is dropped. A close failure after a
//!   fully consumed read is non-fatal: the report content has already been
//!   turned into rows.

use crate::types::ReportError;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Streaming reader over the lines of a tracefile
///
/// Implements the Iterator trait, yielding `Result<String, ReportError>`
/// for each line:
///
/// ```no_run
/// use parse_lcov::io::LineReader;
/// use std::path::Path;
///
/// let reader = LineReader::new(Path::new("report.info")).unwrap();
/// for line in reader {
///     match line {
///         Ok(line) => println!("{line}"),
///         Err(e) => eprintln!("Error: {e}"),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct LineReader {
    lines: Lines<BufReader<File>>,
    path: String,
}

impl LineReader {
    /// Open a tracefile for streaming line iteration
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Open`] if the file cannot be opened.
    pub fn new(path: &Path) -> Result<Self, ReportError> {
        let file = File::open(path).map_err(|e| ReportError::open(path, &e))?;

        Ok(LineReader {
            lines: BufReader::new(file).lines(),
            path: path.display().to_string(),
        })
    }
}

impl Iterator for LineReader {
    type Item = Result<String, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(line.map_err(|e| ReportError::read(&self.path, &e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary tracefile for testing
    fn create_temp_tracefile(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_new_opens_existing_file() {
        let file = create_temp_tracefile("TN:t\nend_of_record\n");

        assert!(LineReader::new(file.path()).is_ok());
    }

    #[test]
    fn test_new_reports_missing_file() {
        let result = LineReader::new(Path::new("does/not/exist.info"));

        match result {
            Err(ReportError::Open { path, .. }) => {
                assert!(path.contains("exist.info"));
            }
            other => panic!("Expected Open error, got {:?}", other),
        }
    }

    #[test]
    fn test_yields_lines_in_order() {
        let file = create_temp_tracefile("TN:t\nSF:f\nend_of_record\n");
        let reader = LineReader::new(file.path()).unwrap();

        let lines: Vec<String> = reader.map(Result::unwrap).collect();
        assert_eq!(lines, vec!["TN:t", "SF:f", "end_of_record"]);
    }

    #[test]
    fn test_empty_file_yields_no_lines() {
        let file = create_temp_tracefile("");
        let reader = LineReader::new(file.path()).unwrap();

        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn test_missing_trailing_newline() {
        let file = create_temp_tracefile("TN:t\nend_of_record");
        let reader = LineReader::new(file.path()).unwrap();

        let lines: Vec<String> = reader.map(Result::unwrap).collect();
        assert_eq!(lines, vec!["TN:t", "end_of_record"]);
    }
}
