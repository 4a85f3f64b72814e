//! Task segmenter - splits a notebook into numbered tasks
//!
//! Tasks are delimited by markdown header cells such as `## Задача 2`. Every
//! cell after a header belongs to that task until the next header appears.

use std::num::NonZeroUsize;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{Cell, Task};

/// Errors raised while segmenting a notebook
///
/// All of these point at a mistake in how the notebook was authored, so they
/// abort the whole run rather than a single submission.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// A header names a task outside `1..=expected`
    #[error("task header declares task {number}, but only {expected} task(s) are expected")]
    TaskOutOfRange {
        /// The number as written in the header
        number: String,
        /// Configured task count
        expected: usize,
    },

    /// A header matched but its captured number is not a decimal integer
    #[error("task header captured '{0}', which is not a task number")]
    InvalidTaskNumber(String),
}

/// Invalid header pattern
#[derive(Debug, Error)]
pub enum HeaderPatternError {
    /// Pattern is not a valid regular expression
    #[error("invalid task header pattern: {0}")]
    Regex(#[from] regex::Error),

    /// Pattern has no capture group for the task number
    #[error("task header pattern '{0}' has no capture group for the task number")]
    MissingCapture(String),
}

/// What to do with cells that appear before the first task header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreamblePolicy {
    /// Drop them
    #[default]
    Discard,
    /// Put them in front of task 1
    AttachToFirst,
}

/// Compiled task header matcher
///
/// The task number is taken from the capture group named `number` when the
/// pattern has one, otherwise from the first capture group.
#[derive(Debug, Clone)]
pub struct TaskHeader {
    regex: Regex,
}

impl TaskHeader {
    /// Header pattern used when none is configured
    ///
    /// Digits are ASCII only: the regex `\d` class also matches other scripts'
    /// digits, which do not parse as a task number.
    pub const DEFAULT_PATTERN: &'static str = r"##\s*[Зз]адача\s*([0-9]+)";

    /// Compile a header pattern
    pub fn new(pattern: &str) -> Result<Self, HeaderPatternError> {
        let regex = Regex::new(pattern)?;
        if regex.captures_len() < 2 {
            return Err(HeaderPatternError::MissingCapture(pattern.to_string()));
        }
        Ok(Self { regex })
    }

    /// The pattern this header was compiled from
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Raw task number announced by a cell, if it is a header
    ///
    /// Only markdown cells can be headers, and only the first match in the
    /// text counts.
    #[must_use]
    pub fn captured_number<'a>(&self, cell: &'a Cell) -> Option<&'a str> {
        if !cell.is_markdown() {
            return None;
        }
        let caps = self.regex.captures(&cell.text)?;
        caps.name("number").or_else(|| caps.get(1)).map(|m| m.as_str().trim())
    }
}

impl Default for TaskHeader {
    fn default() -> Self {
        Self {
            regex: Regex::new(Self::DEFAULT_PATTERN).expect("default header pattern is valid"),
        }
    }
}

/// Parameters for [`segment`]
#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Exact number of tasks to produce
    pub expected_task_count: NonZeroUsize,
    /// Header matcher
    pub header: TaskHeader,
    /// Handling of cells before the first header
    pub preamble: PreamblePolicy,
}

/// Split cells into exactly `expected_task_count` tasks
///
/// A header cell becomes the first cell of its task. Tasks without a header
/// come back empty. A header may reopen an earlier task, in which case the
/// following cells are appended to it.
pub fn segment(cells: Vec<Cell>, options: &SegmentOptions) -> Result<Vec<Task>, SegmentError> {
    let expected = options.expected_task_count.get();
    let mut tasks: Vec<Task> = (1..=expected).map(Task::new).collect();
    let mut preamble = Vec::new();
    let mut current: Option<usize> = None;

    for cell in cells {
        if let Some(raw) = options.header.captured_number(&cell) {
            let index = task_index(raw, expected)?;
            current = Some(index);
            tasks[index].cells.push(cell);
            continue;
        }

        match current {
            Some(index) => tasks[index].cells.push(cell),
            None => preamble.push(cell),
        }
    }

    match options.preamble {
        PreamblePolicy::Discard => {
            if !preamble.is_empty() {
                log::debug!("Dropped {} cell(s) before the first task header", preamble.len());
            }
        },
        PreamblePolicy::AttachToFirst => {
            preamble.append(&mut tasks[0].cells);
            tasks[0].cells = preamble;
        },
    }

    Ok(tasks)
}

/// Task numbers announced by header cells, in notebook order
///
/// Headers whose captured text is not a number are skipped.
#[must_use]
pub fn header_numbers(cells: &[Cell], header: &TaskHeader) -> Vec<usize> {
    cells
        .iter()
        .filter_map(|c| header.captured_number(c))
        .filter_map(|raw| raw.parse().ok())
        .collect()
}

fn task_index(raw: &str, expected: usize) -> Result<usize, SegmentError> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(SegmentError::InvalidTaskNumber(raw.to_string()));
    }

    let out_of_range = || SegmentError::TaskOutOfRange {
        number: raw.to_string(),
        expected,
    };

    let number: usize = raw.parse().map_err(|_| out_of_range())?;
    if (1..=expected).contains(&number) {
        Ok(number - 1)
    } else {
        Err(out_of_range())
    }
}
