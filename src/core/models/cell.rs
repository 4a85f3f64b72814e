//! Cell model
//!
//! A cell is one unit of notebook content. Cells are created fresh for every
//! notebook that is read; nothing ties a cell in one notebook to a cell in
//! another except identical text.

use serde::{Deserialize, Serialize};

use super::CellType;

/// A single notebook cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Whether the student changed this cell (or it is a merged block)
    pub is_changed: bool,

    /// Code or markdown
    pub cell_type: CellType,

    /// Raw source text
    pub text: String,
}

impl Cell {
    /// Create an unflagged cell, as produced by extraction
    #[must_use]
    pub fn new(cell_type: CellType, text: impl Into<String>) -> Self {
        Self {
            is_changed: false,
            cell_type,
            text: text.into(),
        }
    }

    /// Create an unflagged code cell
    #[must_use]
    pub fn code(text: impl Into<String>) -> Self {
        Self::new(CellType::Code, text)
    }

    /// Create an unflagged markdown cell
    #[must_use]
    pub fn markdown(text: impl Into<String>) -> Self {
        Self::new(CellType::Markdown, text)
    }

    /// Return this cell with the changed flag set
    #[must_use]
    pub fn flagged(mut self) -> Self {
        self.is_changed = true;
        self
    }

    /// Whether this is a markdown cell
    #[must_use]
    pub fn is_markdown(&self) -> bool {
        self.cell_type == CellType::Markdown
    }
}
