//! Command implementations

mod check;
mod review;

pub use check::check;
pub use review::review;

use std::path::Path;

use anyhow::Context;
use nbreview::config::ReviewConfig;

use super::app::ConfigArgs;

/// Resolve the review configuration from file and command-line overrides
fn load_config(args: &ConfigArgs) -> anyhow::Result<ReviewConfig> {
    let mut config = match &args.config {
        Some(path) => ReviewConfig::load(path)?,
        None => {
            let cwd = std::env::current_dir().context("cannot determine current directory")?;
            ReviewConfig::discover(&cwd)?
        },
    };

    if let Some(tasks) = args.tasks {
        config.expected_tasks = tasks;
    }
    if let Some(marker) = &args.marker {
        config.marker.clone_from(marker);
    }

    config.validate()?;
    log::debug!("Using config: {config:?}");
    Ok(config)
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
