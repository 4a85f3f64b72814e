//! Review submissions against the blank notebook

use std::path::{Path, PathBuf};

use anyhow::Context;
use nbreview::Pipeline;
use nbreview::discovery::expand_submissions;
use nbreview::notebook;
use nbreview::output::{FailedNotebook, OutputMode, ReviewReport, ReviewSummary};

use super::{display, load_config};
use crate::cli::app::ConfigArgs;

/// Review every submission and print the changed cells task by task
///
/// A submission that is missing or cannot be read is reported and skipped. A
/// task header out of range stops the whole run, since it means the notebooks
/// do not match the configured task count.
pub fn review(
    original: &Path,
    submissions: &[PathBuf],
    changed_only: bool,
    config_args: &ConfigArgs,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = load_config(config_args)?;
    let pipeline = Pipeline::new(&config)?;

    let original_cells = notebook::read_cells(original)
        .with_context(|| format!("cannot load blank notebook {}", display(original)))?;

    let expanded = expand_submissions(submissions, Some(original));
    if expanded.notebooks.is_empty() && expanded.failures.is_empty() {
        log::warn!("No submissions found");
    }

    let mut summary = ReviewSummary::default();
    for err in &expanded.failures {
        let notebook = err.path().map_or_else(|| "<unknown>".to_string(), display);
        log::warn!("Skipping {notebook}: {err}");
        summary.failures.push(FailedNotebook {
            notebook,
            error: err.to_string(),
        });
    }

    for path in &expanded.notebooks {
        log::info!("Reviewing {}", display(path));

        let cells = match notebook::read_cells(path) {
            Ok(cells) => cells,
            Err(err) => {
                log::warn!("Skipping {}: {err}", display(path));
                summary.failures.push(FailedNotebook {
                    notebook: display(path),
                    error: err.to_string(),
                });
                continue;
            },
        };

        let tasks = pipeline
            .review(&original_cells, cells)
            .with_context(|| format!("cannot split {} into tasks", display(path)))?;

        summary.reviews.push(ReviewReport::new(path, &tasks, pipeline.marker(), changed_only));
    }

    summary.render(mode);

    if !summary.failures.is_empty() {
        anyhow::bail!("{} notebook(s) could not be read", summary.failures.len());
    }
    Ok(())
}
