//! nbreview - highlights what students changed in assignment notebooks
//!
//! This library compares a blank assignment notebook with a student's copy,
//! flags the cells the student wrote, groups the notebook into numbered tasks
//! by their markdown headers, and merges consecutive changed cells into single
//! blocks for review.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod discovery;
pub mod notebook;
pub mod output;

pub use crate::core::models::{Cell, CellType, Task};
pub use crate::core::services::Pipeline;
