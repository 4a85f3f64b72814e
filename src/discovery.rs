//! Submission discovery
//!
//! Expands the paths given on the command line into notebook files. A file is
//! taken as-is; a directory contributes the `.ipynb` files directly inside it.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Notebook file extension
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Errors that can occur while expanding submission paths
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Path does not exist
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// Error walking a directory
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl DiscoveryError {
    /// The path this error is about, if known
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound(path) => Some(path.as_path()),
            Self::WalkDir(err) => err.path(),
        }
    }
}

/// Submission paths after expansion
#[derive(Debug, Default)]
pub struct Submissions {
    /// Notebooks to review, in argument order
    pub notebooks: Vec<PathBuf>,
    /// Paths that could not be expanded; each one only affects itself
    pub failures: Vec<DiscoveryError>,
}

/// Expand submission arguments into notebook paths
///
/// Paths that refer to the same file as `exclude` (the blank notebook) are
/// left out, so a directory holding both the blank and the submissions can be
/// passed directly. A missing path or an unreadable directory entry is
/// recorded in `failures` and expansion carries on with the rest.
#[must_use]
pub fn expand_submissions(inputs: &[PathBuf], exclude: Option<&Path>) -> Submissions {
    let excluded = exclude.and_then(|p| p.canonicalize().ok());
    let mut out = Submissions::default();

    for input in inputs {
        if input.is_dir() {
            collect_dir(input, &mut out);
        } else if input.exists() {
            out.notebooks.push(input.clone());
        } else {
            out.failures.push(DiscoveryError::NotFound(input.clone()));
        }
    }

    if let Some(excluded) = excluded {
        out.notebooks.retain(|p| !p.canonicalize().is_ok_and(|c| c == excluded));
    }
    out
}

/// Notebooks directly inside `dir`, sorted by path
///
/// Hidden files (such as `.ipynb_checkpoints` copies) are skipped.
fn collect_dir(dir: &Path, out: &mut Submissions) {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                out.failures.push(err.into());
                continue;
            },
        };
        if !entry.file_type().is_file() || is_hidden(&entry) {
            continue;
        }
        if is_notebook(entry.path()) {
            found.push(entry.into_path());
        }
    }

    found.sort();
    out.notebooks.extend(found);
}

fn is_notebook(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(NOTEBOOK_EXTENSION)
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
