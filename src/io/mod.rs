//! I/O module
//!
//! Handles tracefile reading and table output.
//!
//! # Components
//!
//! - `line_reader` - Streaming line reader over the tracefile with an
//!   iterator interface
//! - `table` - Renders finalized coverage rows as a human-readable table

pub mod line_reader;
pub mod table;

pub use line_reader::LineReader;
pub use table::render_coverage_table;
