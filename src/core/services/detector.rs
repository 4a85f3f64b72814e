//! Change detector - flags cells the student wrote
//!
//! A submitted cell counts as changed when its text appears nowhere in the
//! blank notebook. There is no line-level diffing: a cell is either an exact
//! copy of some original cell or it is the student's.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::models::{Cell, CellType};

/// What an original cell must share with a submitted cell to count as a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchScope {
    /// Text alone; identical text of any type suppresses the flag
    #[default]
    AnyType,
    /// Text and cell type
    SameType,
}

/// Flag every submitted cell whose text is missing from the original notebook
///
/// Position is ignored: text that moved or gained new neighbours is still
/// considered unchanged. Cells already flagged on input stay flagged.
#[must_use]
pub fn mark_changed(original: &[Cell], modified: Vec<Cell>, scope: MatchScope) -> Vec<Cell> {
    match scope {
        MatchScope::AnyType => {
            let known: HashSet<&str> = original.iter().map(|c| c.text.as_str()).collect();
            modified
                .into_iter()
                .map(|cell| flag_unless(cell, |c| known.contains(c.text.as_str())))
                .collect()
        },
        MatchScope::SameType => {
            let known: HashSet<(CellType, &str)> =
                original.iter().map(|c| (c.cell_type, c.text.as_str())).collect();
            modified
                .into_iter()
                .map(|cell| flag_unless(cell, |c| known.contains(&(c.cell_type, c.text.as_str()))))
                .collect()
        },
    }
}

fn flag_unless(cell: Cell, is_known: impl Fn(&Cell) -> bool) -> Cell {
    if is_known(&cell) { cell } else { cell.flagged() }
}
