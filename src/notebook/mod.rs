//! Notebook reader - extracts cells from `.ipynb` files
//!
//! Understands the nbformat v4 JSON layout. Only code and markdown cells are
//! kept, and markdown cells carrying images or other embedded payloads are
//! dropped since they cannot be reviewed as text.

mod format;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::Cell;

use format::{RawCell, RawNotebook};

/// The only nbformat major version understood
pub const SUPPORTED_NBFORMAT: u32 = 4;

/// Errors reading a notebook
///
/// These only concern a single file; other notebooks can still be processed.
#[derive(Debug, Error)]
pub enum NotebookError {
    /// File could not be read
    #[error("cannot read notebook {path}: {source}")]
    Io {
        /// Notebook path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not a notebook document
    #[error("invalid notebook {path}: {source}")]
    Json {
        /// Notebook path
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// Notebook uses an unsupported format version
    #[error("unsupported notebook format {found} in {path} (expected {expected})", expected = SUPPORTED_NBFORMAT)]
    UnsupportedVersion {
        /// Notebook path
        path: PathBuf,
        /// Declared `nbformat`
        found: u32,
    },
}

/// Read the reviewable cells of a notebook file, in notebook order
pub fn read_cells(path: &Path) -> Result<Vec<Cell>, NotebookError> {
    let content = fs::read_to_string(path).map_err(|source| NotebookError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cells = parse_cells_at(&content, path)?;
    log::debug!("Extracted {} cell(s) from {}", cells.len(), path.display());
    Ok(cells)
}

/// Parse the reviewable cells of a notebook document
pub fn parse_cells(json: &str) -> Result<Vec<Cell>, NotebookError> {
    parse_cells_at(json, Path::new("<memory>"))
}

fn parse_cells_at(json: &str, path: &Path) -> Result<Vec<Cell>, NotebookError> {
    let notebook: RawNotebook = serde_json::from_str(json).map_err(|source| NotebookError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    if notebook.nbformat != SUPPORTED_NBFORMAT {
        return Err(NotebookError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: notebook.nbformat,
        });
    }

    Ok(notebook.cells.into_iter().filter_map(into_cell).collect())
}

fn into_cell(raw: RawCell) -> Option<Cell> {
    let has_attachments = raw.attachments.is_some();
    let text = raw.source.into_text();
    match raw.cell_type.as_str() {
        "code" => Some(Cell::code(text)),
        "markdown" if has_attachments || text.contains("base64") => None,
        "markdown" => Some(Cell::markdown(text)),
        _ => None,
    }
}
