//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use nbreview::output::OutputMode;

/// nbreview - Review student changes in assignment notebooks
#[derive(Parser, Debug)]
#[command(
    name = "nbreview",
    version,
    about = "Review student changes in assignment notebooks",
    long_about = "Compare a blank assignment notebook with completed copies.\n\n\
                  Cells the student wrote are flagged, grouped by task header \
                  (\"## Задача N\"), and consecutive changes are merged into \
                  marked blocks for review."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Review submissions against the blank notebook
    Review {
        /// The blank assignment notebook
        original: PathBuf,

        /// Completed notebooks, or directories containing them
        #[arg(required = true)]
        submissions: Vec<PathBuf>,

        /// Show only cells the student changed
        #[arg(long)]
        changed_only: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Check that a notebook has a header for every task
    Check {
        /// Notebook to check
        notebook: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Show version
    Version,
}

/// Options that override the review configuration
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Config file (defaults to .nbreview.toml in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of tasks in the notebook
    #[arg(short, long)]
    pub tasks: Option<usize>,

    /// Marker placed on merged blocks
    #[arg(short, long)]
    pub marker: Option<String>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Review {
            original,
            submissions,
            changed_only,
            config,
        }) => commands::review(&original, &submissions, changed_only, &config, output_mode),
        Some(Command::Check { notebook, config }) => {
            commands::check(&notebook, &config, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("nbreview v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("nbreview v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'nbreview --help' for usage");
                println!("Run 'nbreview review <blank.ipynb> <submissions>' to get started");
            }
            Ok(())
        },
    }
}
