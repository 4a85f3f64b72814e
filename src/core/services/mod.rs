//! Business logic services
//!
//! Pure transformations over cells and tasks. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`detector`] - Flag cells the student changed
//! - [`segmenter`] - Split cells into numbered tasks
//! - [`merger`] - Collapse runs of changed cells
//! - [`pipeline`] - The three stages wired together

pub mod detector;
pub mod merger;
pub mod pipeline;
pub mod segmenter;

pub use detector::{MatchScope, mark_changed};
pub use merger::{DEFAULT_MARKER, is_merged, merge_runs, split_merged};
pub use pipeline::Pipeline;
pub use segmenter::{
    HeaderPatternError, PreamblePolicy, SegmentError, SegmentOptions, TaskHeader, header_numbers,
    segment,
};
