//! Error types for the lcov report parser
//!
//! This module defines all error types that can occur while generating a
//! report. Errors are designed to be descriptive and user-friendly for CLI
//! output.
//!
//! # Error Categories
//!
//! All errors live at the I/O boundary. The core parser is total: for any
//! finite sequence of text lines it produces a (possibly empty) sequence of
//! rows without raising. Malformed numeric fields degrade to zero,
//! unrecognized tags are ignored, and an unterminated trailing record is
//! dropped (see [`crate::core::accumulator`]).
//!
//! - **Open errors**: the tracefile cannot be opened - fatal, reported
//!   before the parser ever runs.
//! - **Read errors**: the tracefile cannot be read mid-stream - fatal.
//! - **Write errors**: the rendered table cannot be written to output -
//!   fatal.
//!
//! Failure to close the tracefile after a fully consumed read is non-fatal
//! by design: the report has already been consumed into rows, so the close
//! (which happens when the reader is dropped) carries no error surface.

use thiserror::Error;

/// Main error type for the report generator
///
/// Each variant includes the relevant path or message context to help
/// diagnose the issue from the CLI diagnostic alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The tracefile could not be opened
    ///
    /// This is a fatal error that prevents parsing from starting.
    #[error("Could not open report '{path}': {message}")]
    Open {
        /// The path that could not be opened
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// An I/O error occurred while reading the tracefile
    ///
    /// This is a fatal error; rows emitted before the failure are discarded.
    #[error("Could not read report '{path}': {message}")]
    Read {
        /// The path being read
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },

    /// The rendered table could not be written to the output
    #[error("Could not write report output: {message}")]
    Write {
        /// Description of the underlying I/O error
        message: String,
    },
}

impl ReportError {
    /// Create an Open error from a path and I/O error
    pub fn open(path: &std::path::Path, err: &std::io::Error) -> Self {
        ReportError::Open {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Create a Read error from a path and I/O error
    pub fn read(path: &str, err: &std::io::Error) -> Self {
        ReportError::Read {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    /// Create a Write error from an I/O error
    pub fn write(err: &std::io::Error) -> Self {
        ReportError::Write {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_open_error_display_includes_path() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = ReportError::open(Path::new("missing.info"), &io_err);

        let message = err.to_string();
        assert!(message.contains("missing.info"));
        assert!(message.contains("no such file"));
    }

    #[test]
    fn test_write_error_display() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe");
        let err = ReportError::write(&io_err);

        assert!(err.to_string().contains("broken pipe"));
    }
}
