//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the trial configuration (defaults + overrides)
//! - wires up the file-backed recorder
//! - runs the trial pipeline
//! - prints the run summary

use clap::Parser;

use crate::cli::Cli;
use crate::domain::TrialConfig;
use crate::error::AppError;
use crate::recorder::{FileRecorder, RunRecorder};

pub mod pipeline;

/// Entry point for the `decay` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = trial_config_from_args(&cli);
    config.validate()?;

    // The recorder supplies the run id; the resolver names the directory
    // after it. The pipeline re-resolves the same id, which is idempotent.
    let run_id = FileRecorder::fresh_run_id();
    let run_dir = crate::io::outdir::resolve_run_dir(&cli.root, &run_id)?;
    let mut recorder = FileRecorder::create(run_id, &run_dir)?;

    let output = pipeline::run_trial(&config, &cli.root, &mut recorder)?;
    recorder.finish(&config)?;

    println!(
        "{}",
        crate::report::format_run_summary(recorder.run_id(), &config, &output)
    );

    Ok(())
}

/// Build the trial configuration from defaults plus CLI overrides.
pub fn trial_config_from_args(cli: &Cli) -> TrialConfig {
    let defaults = TrialConfig::default();
    TrialConfig {
        a: cli.a.unwrap_or(defaults.a),
        tau: cli.tau.unwrap_or(defaults.tau),
        b: cli.b.unwrap_or(defaults.b),
        samples: cli.samples.unwrap_or(defaults.samples),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_without_overrides_give_defaults() {
        let cli = Cli::parse_from(["decay"]);
        assert_eq!(trial_config_from_args(&cli), TrialConfig::default());
    }

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let cli = Cli::parse_from(["decay", "--tau", "1.5"]);
        let config = trial_config_from_args(&cli);
        assert_eq!(config.tau, 1.5);
        assert_eq!(config.a, 10.0);
        assert_eq!(config.samples, 100);
    }
}
