//! Domain models for nbreview
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Cell`] - One notebook cell and its changed flag
//! - [`CellType`] - Code or markdown
//! - [`Task`] - The cells of one numbered assignment

mod cell;
mod cell_type;
mod task;

pub use cell::Cell;
pub use cell_type::CellType;
pub use task::Task;
