//! Review configuration
//!
//! Parameters for the review pipeline. Defaults match the standard course
//! notebooks; a project can override them with a `.nbreview.toml` file:
//!
//! ```toml
//! expected_tasks = 4
//! marker = "[CHANGED BY STUDENT]."
//! header_pattern = '##\s*Task\s*(\d+)'
//! preamble = "attach_to_first"
//! match_scope = "same_type"
//! ```

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::{
    DEFAULT_MARKER, HeaderPatternError, MatchScope, PreamblePolicy, TaskHeader,
};

/// Project configuration filename
pub const CONFIG_FILE: &str = ".nbreview.toml";

/// Errors in the review configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// Task count is zero
    #[error("expected_tasks must be at least 1")]
    NoTasks,

    /// Marker is empty
    #[error("marker must not be empty")]
    EmptyMarker,

    /// Marker spans several lines
    #[error("marker must be a single line")]
    MultilineMarker,

    /// Header pattern is unusable
    #[error(transparent)]
    HeaderPattern(#[from] HeaderPatternError),
}

/// Review pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Number of tasks every notebook is split into
    pub expected_tasks: usize,

    /// First line of every merged block
    pub marker: String,

    /// Regex recognising task headers
    pub header_pattern: String,

    /// Handling of cells before the first header
    pub preamble: PreamblePolicy,

    /// How submitted cells are matched against the blank notebook
    pub match_scope: MatchScope,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            expected_tasks: 3,
            marker: DEFAULT_MARKER.to_string(),
            header_pattern: TaskHeader::DEFAULT_PATTERN.to_string(),
            preamble: PreamblePolicy::default(),
            match_scope: MatchScope::default(),
        }
    }
}

impl ReviewConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `.nbreview.toml` from `dir` if present, defaults otherwise
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            log::debug!("Loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check that the configuration can drive a pipeline
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.task_count()?;
        if self.marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if self.marker.contains('\n') {
            return Err(ConfigError::MultilineMarker);
        }
        TaskHeader::new(&self.header_pattern)?;
        Ok(())
    }

    /// Task count as a non-zero value
    pub fn task_count(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.expected_tasks).ok_or(ConfigError::NoTasks)
    }
}
