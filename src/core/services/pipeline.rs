//! Review pipeline - detector, segmenter and merger in sequence
//!
//! Each call to [`Pipeline::review`] is independent; the pipeline only holds
//! its configuration.

use crate::config::{ConfigError, ReviewConfig};
use crate::core::models::{Cell, Task};

use super::detector::{MatchScope, mark_changed};
use super::merger::merge_runs;
use super::segmenter::{SegmentError, SegmentOptions, TaskHeader, segment};

/// A configured review pipeline
#[derive(Debug, Clone)]
pub struct Pipeline {
    segment: SegmentOptions,
    match_scope: MatchScope,
    marker: String,
}

impl Pipeline {
    /// Build a pipeline from a validated configuration
    pub fn new(config: &ReviewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let header = TaskHeader::new(&config.header_pattern)?;
        log::debug!("Task header pattern: {}", header.pattern());
        Ok(Self {
            segment: SegmentOptions {
                expected_task_count: config.task_count()?,
                header,
                preamble: config.preamble,
            },
            match_scope: config.match_scope,
            marker: config.marker.clone(),
        })
    }

    /// Segmentation settings
    #[must_use]
    pub const fn segment_options(&self) -> &SegmentOptions {
        &self.segment
    }

    /// Marker used for merged blocks
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Compare a submission against the blank notebook and group it by task
    pub fn review(&self, original: &[Cell], submission: Vec<Cell>) -> Result<Vec<Task>, SegmentError> {
        let marked = mark_changed(original, submission, self.match_scope);
        log::debug!(
            "Flagged {} of {} cell(s) as changed",
            marked.iter().filter(|c| c.is_changed).count(),
            marked.len()
        );

        let tasks = segment(marked, &self.segment)?;
        log::debug!(
            "Segmented into {} task(s), {} empty",
            tasks.len(),
            tasks.iter().filter(|t| t.is_empty()).count()
        );

        let merged = merge_runs(tasks, &self.marker);
        log::debug!(
            "Merged into {} changed block(s)",
            merged.iter().map(Task::changed_count).sum::<usize>()
        );
        Ok(merged)
    }
}
