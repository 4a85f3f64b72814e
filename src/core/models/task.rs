//! Task model
//!
//! A task is the group of cells that belongs to one numbered assignment,
//! starting at its header cell.

use serde::{Deserialize, Serialize};

use super::Cell;

/// One numbered assignment and its cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 1-based task number
    pub number: usize,

    /// Cells in notebook order
    pub cells: Vec<Cell>,
}

impl Task {
    /// Create an empty task
    #[must_use]
    pub const fn new(number: usize) -> Self {
        Self {
            number,
            cells: Vec::new(),
        }
    }

    /// Whether no cells were assigned to this task
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells flagged as changed
    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_changed).count()
    }
}
