//! Property-based tests for the review stages
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use nbreview::core::services::{
    MatchScope, PreamblePolicy, SegmentOptions, TaskHeader, mark_changed, merge_runs, segment,
    split_merged,
};
use nbreview::{Cell, CellType, Task};
use proptest::prelude::*;

const MARKER: &str = "<<changed>>";

fn cell_type() -> impl Strategy<Value = CellType> {
    prop_oneof![Just(CellType::Code), Just(CellType::Markdown)]
}

/// Single-line cells so merged blocks can be split back apart
fn cell() -> impl Strategy<Value = Cell> {
    (any::<bool>(), cell_type(), "[a-d]{1,3}").prop_map(|(changed, cell_type, text)| Cell {
        is_changed: changed,
        cell_type,
        text,
    })
}

fn unflagged_cell() -> impl Strategy<Value = Cell> {
    (cell_type(), "[a-d]{1,2}").prop_map(|(cell_type, text)| Cell::new(cell_type, text))
}

/// Undo merging: every merged block becomes one cell per line again
fn unmerge(cells: &[Cell]) -> Vec<Cell> {
    let mut out = Vec::new();
    for cell in cells {
        match split_merged(&cell.text, MARKER) {
            Some(parts) if cell.is_changed => {
                out.extend(parts.into_iter().map(|text| Cell::new(cell.cell_type, text).flagged()));
            },
            _ => out.push(cell.clone()),
        }
    }
    out
}

proptest! {
    /// A cell is flagged exactly when its text is absent from the original
    #[test]
    fn detector_flags_exactly_new_text(
        original in prop::collection::vec(unflagged_cell(), 0..8),
        modified in prop::collection::vec(unflagged_cell(), 0..12),
    ) {
        let known: HashSet<String> = original.iter().map(|c| c.text.clone()).collect();
        let marked = mark_changed(&original, modified.clone(), MatchScope::AnyType);

        prop_assert_eq!(marked.len(), modified.len());
        for (before, after) in modified.iter().zip(&marked) {
            prop_assert_eq!(&before.text, &after.text);
            prop_assert_eq!(after.is_changed, !known.contains(&after.text));
        }
    }

    /// Same-type matching never flags fewer cells than any-type matching
    #[test]
    fn same_type_is_stricter(
        original in prop::collection::vec(unflagged_cell(), 0..8),
        modified in prop::collection::vec(unflagged_cell(), 0..12),
    ) {
        let loose = mark_changed(&original, modified.clone(), MatchScope::AnyType);
        let strict = mark_changed(&original, modified, MatchScope::SameType);

        for (l, s) in loose.iter().zip(&strict) {
            prop_assert!(!l.is_changed || s.is_changed);
        }
    }

    /// Splitting merged blocks restores the input cells in order, with types intact
    #[test]
    fn merge_is_reversible(cells in prop::collection::vec(cell(), 0..20)) {
        let merged = merge_runs(vec![Task { number: 1, cells: cells.clone() }], MARKER);
        prop_assert_eq!(merged.len(), 1);
        prop_assert_eq!(unmerge(&merged[0].cells), cells);
    }

    /// Adjacent output blocks are never two changed blocks of the same type
    #[test]
    fn merge_leaves_no_mergeable_neighbours(cells in prop::collection::vec(cell(), 0..20)) {
        let merged = merge_runs(vec![Task { number: 1, cells }], MARKER);
        for pair in merged[0].cells.windows(2) {
            prop_assert!(
                !(pair[0].is_changed && pair[1].is_changed && pair[0].cell_type == pair[1].cell_type)
            );
        }
    }

    /// Segmentation yields exactly the configured number of tasks
    #[test]
    fn segment_returns_expected_count(
        expected in 1usize..6,
        headers in prop::collection::vec(1usize..6, 0..6),
    ) {
        let cells: Vec<Cell> = headers
            .iter()
            .filter(|&&n| n <= expected)
            .flat_map(|n| [Cell::markdown(format!("## Задача {n}")), Cell::code("x")])
            .collect();
        let total = cells.len();

        let options = SegmentOptions {
            expected_task_count: NonZeroUsize::new(expected).unwrap(),
            header: TaskHeader::default(),
            preamble: PreamblePolicy::Discard,
        };
        let tasks = segment(cells, &options).unwrap();

        prop_assert_eq!(tasks.len(), expected);
        prop_assert_eq!(tasks.iter().map(|t| t.cells.len()).sum::<usize>(), total);
    }

    /// Any header above the configured count is an error
    #[test]
    fn segment_rejects_out_of_range(expected in 1usize..6, extra in 1usize..100) {
        let options = SegmentOptions {
            expected_task_count: NonZeroUsize::new(expected).unwrap(),
            header: TaskHeader::default(),
            preamble: PreamblePolicy::Discard,
        };
        let cells = vec![Cell::markdown(format!("## Задача {}", expected + extra))];
        prop_assert!(segment(cells, &options).is_err());
    }
}
