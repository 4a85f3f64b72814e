//! Tests for task segmentation

use std::num::NonZeroUsize;

use nbreview::Cell;
use nbreview::core::services::{PreamblePolicy, SegmentError, SegmentOptions, TaskHeader, segment};

fn options(expected: usize, preamble: PreamblePolicy) -> SegmentOptions {
    SegmentOptions {
        expected_task_count: NonZeroUsize::new(expected).unwrap(),
        header: TaskHeader::default(),
        preamble,
    }
}

#[test]
fn test_two_tasks_scenario() {
    let cells = vec![
        Cell::markdown("## Задача 1"),
        Cell::code("a"),
        Cell::markdown("## Задача 2"),
        Cell::code("b"),
    ];

    let tasks = segment(cells, &options(2, PreamblePolicy::Discard)).unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].cells, vec![Cell::markdown("## Задача 1"), Cell::code("a")]);
    assert_eq!(tasks[1].cells, vec![Cell::markdown("## Задача 2"), Cell::code("b")]);
}

#[test]
fn test_always_returns_expected_count() {
    for expected in 1..=5 {
        let tasks = segment(vec![Cell::code("stray")], &options(expected, PreamblePolicy::Discard))
            .unwrap();
        assert_eq!(tasks.len(), expected);
        assert!(tasks.iter().all(nbreview::Task::is_empty));
        let numbers: Vec<usize> = tasks.iter().map(|t| t.number).collect();
        assert_eq!(numbers, (1..=expected).collect::<Vec<_>>());
    }
}

#[test]
fn test_header_with_description_text() {
    let cells = vec![Cell::markdown("## Задача 1. Сумма\n\nПосчитайте сумму чисел."), Cell::code("s = 1 + 2")];

    let tasks = segment(cells, &options(1, PreamblePolicy::Discard)).unwrap();
    assert_eq!(tasks[0].cells.len(), 2);
}

#[test]
fn test_level_three_header_still_matches() {
    // The pattern is not anchored, so "###" contains "##"
    let cells = vec![Cell::markdown("### Задача 1"), Cell::code("a")];

    let tasks = segment(cells, &options(1, PreamblePolicy::Discard)).unwrap();
    assert_eq!(tasks[0].cells.len(), 2);
}

#[test]
fn test_out_of_range_is_not_clamped() {
    let cells = vec![Cell::markdown("## Задача 1"), Cell::code("a"), Cell::markdown("## Задача 5")];

    let err = segment(cells, &options(3, PreamblePolicy::Discard)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "task header declares task 5, but only 3 task(s) are expected"
    );
    assert!(matches!(err, SegmentError::TaskOutOfRange { expected: 3, .. }));
}

#[test]
fn test_preamble_policies() {
    let cells = || vec![Cell::markdown("# Intro"), Cell::markdown("## Задача 1"), Cell::code("a")];

    let discarded = segment(cells(), &options(1, PreamblePolicy::Discard)).unwrap();
    assert_eq!(discarded[0].cells.len(), 2);

    let attached = segment(cells(), &options(1, PreamblePolicy::AttachToFirst)).unwrap();
    assert_eq!(attached[0].cells.len(), 3);
    assert_eq!(attached[0].cells[0].text, "# Intro");
}

#[test]
fn test_preamble_attached_without_any_header() {
    let tasks =
        segment(vec![Cell::code("a")], &options(2, PreamblePolicy::AttachToFirst)).unwrap();
    assert_eq!(tasks[0].cells, vec![Cell::code("a")]);
    assert!(tasks[1].is_empty());
}

#[test]
fn test_repeated_header_reopens_task() {
    let cells = vec![
        Cell::markdown("## Задача 1"),
        Cell::code("a"),
        Cell::markdown("## Задача 2"),
        Cell::code("b"),
        Cell::markdown("## Задача 1 (продолжение)"),
        Cell::code("c"),
    ];

    let tasks = segment(cells, &options(2, PreamblePolicy::Discard)).unwrap();
    let first: Vec<&str> = tasks[0].cells.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(first, vec!["## Задача 1", "a", "## Задача 1 (продолжение)", "c"]);
}
