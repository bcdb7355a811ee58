//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: The in-progress coverage record accumulated per tracefile block
//! - `row`: The finalized output row handed to the table renderer
//! - `error`: Error types for the report generator

pub mod error;
pub mod record;
pub mod row;

pub use error::ReportError;
pub use record::{HitCount, Record};
pub use row::CoverageRow;
