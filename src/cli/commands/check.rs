//! Check a notebook's task headers

use std::path::Path;

use anyhow::Context;
use nbreview::Pipeline;
use nbreview::core::services::{header_numbers, segment};
use nbreview::notebook;
use nbreview::output::{CheckReport, OutputMode};

use super::{display, load_config};
use crate::cli::app::ConfigArgs;

/// Verify that every task has a header and none is out of range
pub fn check(path: &Path, config_args: &ConfigArgs, mode: OutputMode) -> anyhow::Result<()> {
    let config = load_config(config_args)?;
    let pipeline = Pipeline::new(&config)?;
    let options = pipeline.segment_options();

    let cells = notebook::read_cells(path)?;
    let headers = header_numbers(&cells, &options.header);
    let tasks = segment(cells, options)
        .with_context(|| format!("cannot split {} into tasks", display(path)))?;

    let report = CheckReport {
        notebook: display(path),
        expected_tasks: config.expected_tasks,
        missing: tasks.iter().map(|t| t.number).filter(|n| !headers.contains(n)).collect(),
        cells_per_task: tasks.iter().map(|t| t.cells.len()).collect(),
        headers,
    };

    report.render(mode);

    if !report.passed() {
        anyhow::bail!("{} task(s) have no header", report.missing.len());
    }
    Ok(())
}
