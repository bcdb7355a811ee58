// Core module
// The record accumulator and the tag classification it folds over

pub mod accumulator;
pub mod tag;

pub use accumulator::{coverage_display, summarize, RecordAccumulator};
pub use tag::{classify, Tag};
