//! parse-lcov Library
//! # Overview
//!
//! This library converts an lcov tracefile into a tabular, human-readable
//! coverage summary.
//!
//! # Architecture
//!
//! The system is organized into several components:
//!
//! - [`types`] - Core data types (Record, CoverageRow, ReportError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - The record accumulator, the only component with
//!   non-trivial logic:
//!   - [`core::tag`] - Tracefile line classification
//!   - [`core::accumulator`] - Partial-record accumulation and percentage
//!     computation
//! - [`io`] - Thin collaborators: streaming file reading and table output
//! - [`report`] - Orchestration of the read/accumulate/render pipeline
//!
//! # Tracefile Format
//!
//! An lcov tracefile is a sequence of `CODE:value` lines grouped into
//! blocks delimited by the bare `end_of_record` token. The accumulator
//! recognizes the summary tags (`TN`, `SF`, `LF`, `LH`, `FNF`, `FNH`,
//! `BRF`, `BRH`) and ignores everything else, including the per-line
//! instrumentation tags (`DA`, `FN`, `FNDA`, ...).
//!
//! # Failure Semantics
//!
//! The parser itself is total - garbage input degrades to zeros and
//! no-ops, and a trailing record missing its terminator is dropped. Errors
//! only arise at the I/O boundary: opening, reading, and writing.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod report;
pub mod types;

pub use self::core::{coverage_display, summarize, RecordAccumulator};
pub use report::generate_report;
pub use types::{CoverageRow, HitCount, Record, ReportError};
