//! Run merger - collapses consecutive changed cells into review blocks
//!
//! Within a task, a run of changed cells of the same type becomes a single
//! cell whose text starts with a marker line, so a reviewer sees one block
//! per stretch of student work instead of many small cells.

use crate::core::models::{Cell, CellType, Task};

/// Marker placed on the first line of every merged block by default
pub const DEFAULT_MARKER: &str = "[ИЗМЕНЕНО СТУДЕНТОМ].";

/// Accumulator state while walking a task
#[derive(Debug)]
enum Run {
    Idle,
    Accumulating {
        cell_type: CellType,
        texts: Vec<String>,
    },
}

impl Run {
    /// Emit the accumulated block, if any, and go back to idle
    fn flush(&mut self, marker: &str, out: &mut Vec<Cell>) {
        if let Self::Accumulating { cell_type, texts } = std::mem::replace(self, Self::Idle) {
            out.push(merged_cell(cell_type, &texts, marker));
        }
    }
}

/// Merge runs of changed cells in every task
///
/// Unchanged cells pass through untouched. A merged block takes the place of
/// the first cell of its run, and two cells of different types never share a
/// block.
#[must_use]
pub fn merge_runs(tasks: Vec<Task>, marker: &str) -> Vec<Task> {
    tasks
        .into_iter()
        .map(|task| Task {
            number: task.number,
            cells: merge_task(task.cells, marker),
        })
        .collect()
}

fn merge_task(cells: Vec<Cell>, marker: &str) -> Vec<Cell> {
    let mut out = Vec::with_capacity(cells.len());
    let mut run = Run::Idle;

    for cell in cells {
        if !cell.is_changed {
            run.flush(marker, &mut out);
            out.push(cell);
            continue;
        }

        match &mut run {
            Run::Accumulating { cell_type, texts } if *cell_type == cell.cell_type => {
                texts.push(cell.text);
            },
            _ => {
                run.flush(marker, &mut out);
                run = Run::Accumulating {
                    cell_type: cell.cell_type,
                    texts: vec![cell.text],
                };
            },
        }
    }

    run.flush(marker, &mut out);
    out
}

fn merged_cell(cell_type: CellType, texts: &[String], marker: &str) -> Cell {
    Cell {
        is_changed: true,
        cell_type,
        text: format!("{marker}\n{}", texts.join("\n")),
    }
}

/// Whether a cell text is a merged block produced with `marker`
#[must_use]
pub fn is_merged(text: &str, marker: &str) -> bool {
    text.strip_prefix(marker).is_some_and(|rest| rest.starts_with('\n'))
}

/// Split a merged block back into its lines
///
/// Returns `None` when `text` is not a merged block. When none of the merged
/// cells contained a newline, the result is exactly the original texts.
#[must_use]
pub fn split_merged<'a>(text: &'a str, marker: &str) -> Option<Vec<&'a str>> {
    let body = text.strip_prefix(marker)?.strip_prefix('\n')?;
    Some(body.split('\n').collect())
}
