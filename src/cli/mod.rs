//! Command-line parsing for the trial runner.
//!
//! Parsing stays separate from the pipeline: every parameter flag is
//! optional, and `domain::TrialConfig::default()` remains the single source
//! of default values (see `app::trial_config_from_args`).

use std::path::PathBuf;

use clap::Parser;
use clap::builder::TypedValueParser as _;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "decay",
    version,
    about = "Run one exponential-decay trial: plot the curve and record it"
)]
pub struct Cli {
    /// Amplitude A of the decay term (default 10).
    #[arg(long)]
    pub a: Option<f64>,

    /// Decay rate tau (default 0.5).
    #[arg(long)]
    pub tau: Option<f64>,

    /// Vertical offset B (default 3).
    #[arg(long)]
    pub b: Option<f64>,

    /// Number of samples over [0, 1] (default 100).
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Root directory for run outputs; empty means the current directory.
    // Clap's built-in PathBuf parser rejects empty values, so parse via
    // OsString to keep "" as a valid (default) root.
    #[arg(
        long,
        default_value = "",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub root: PathBuf,
}
