//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CellType, Task};
use crate::core::services::is_merged;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of reviewing a batch of submissions
#[derive(Debug, Default, Serialize)]
pub struct ReviewSummary {
    /// Notebooks that were reviewed
    pub reviews: Vec<ReviewReport>,
    /// Notebooks that could not be read
    pub failures: Vec<FailedNotebook>,
}

/// Review of a single submission
#[derive(Debug, Serialize)]
pub struct ReviewReport {
    /// Submission path
    pub notebook: String,
    /// Tasks in order
    pub tasks: Vec<TaskReport>,
}

/// One task of a reviewed submission
#[derive(Debug, Serialize)]
pub struct TaskReport {
    /// 1-based task number
    pub number: usize,
    /// Cells in order
    pub cells: Vec<CellReport>,
}

/// One cell of a task
#[derive(Debug, Serialize)]
pub struct CellReport {
    /// Code or markdown
    pub cell_type: CellType,
    /// Whether the student changed it
    pub changed: bool,
    /// Whether it is a merged block of several changed cells
    pub merged: bool,
    /// Cell text
    pub text: String,
}

/// A submission that could not be read
#[derive(Debug, Serialize)]
pub struct FailedNotebook {
    /// Submission path
    pub notebook: String,
    /// Why it failed
    pub error: String,
}

/// Result of checking a blank notebook's task headers
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Notebook path
    pub notebook: String,
    /// Configured task count
    pub expected_tasks: usize,
    /// Task numbers announced by headers, in notebook order
    pub headers: Vec<usize>,
    /// Task numbers with no header
    pub missing: Vec<usize>,
    /// Number of cells assigned to each task
    pub cells_per_task: Vec<usize>,
}

impl ReviewReport {
    /// Build a report from merged tasks
    ///
    /// With `changed_only`, unchanged cells are left out.
    #[must_use]
    pub fn new(notebook: &Path, tasks: &[Task], marker: &str, changed_only: bool) -> Self {
        let tasks = tasks
            .iter()
            .map(|task| TaskReport {
                number: task.number,
                cells: task
                    .cells
                    .iter()
                    .filter(|c| !changed_only || c.is_changed)
                    .map(|c| CellReport {
                        cell_type: c.cell_type,
                        changed: c.is_changed,
                        merged: c.is_changed && is_merged(&c.text, marker),
                        text: c.text.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            notebook: notebook.display().to_string(),
            tasks,
        }
    }

    fn render_human(&self) {
        println!("{}", format!("=== {} ===", self.notebook).bold());
        for task in &self.tasks {
            println!("\n\n{}\n", format!("Задание {}:", task.number).bold());
            if task.cells.is_empty() {
                println!("{}", "(no cells)".dimmed());
            }
            for cell in &task.cells {
                println!("{}\n", cell.text);
            }
        }
        println!();
    }
}

impl ReviewSummary {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.reviews.is_empty() && self.failures.is_empty() {
            println!("No notebooks to review.");
            return;
        }

        for review in &self.reviews {
            review.render_human();
        }

        if !self.failures.is_empty() {
            println!("{}", "Could not read:".red().bold());
            for failure in &self.failures {
                println!("  {}: {}", failure.notebook, failure.error);
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl CheckReport {
    /// Whether every task has a header
    #[must_use]
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Checking {} ({} task(s) expected)...\n", self.notebook, self.expected_tasks);

        for (i, count) in self.cells_per_task.iter().enumerate() {
            let number = i + 1;
            if self.missing.contains(&number) {
                println!("  Task {number}: {}", "no header".red());
            } else {
                println!("  Task {number}: {count} cell(s)");
            }
        }

        let mut seen = Vec::new();
        for number in &self.headers {
            if seen.contains(number) {
                println!("\n{} task {number} has more than one header", "Warning:".yellow());
            } else {
                seen.push(*number);
            }
        }

        if self.passed() {
            println!("\nAll tasks have headers.");
        } else {
            println!("\nMISSING: {} task header(s)", self.missing.len());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
