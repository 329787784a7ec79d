//! The trial pipeline shared by the CLI front-end and tests.
//!
//! One function owns the whole workflow:
//! validate config -> resolve run dir -> generate curve -> render plot ->
//! attach artifact -> log scalars
//!
//! The order is part of the contract: filesystem effects (directory, plot,
//! artifact) all happen before the first scalar is logged, so a filesystem
//! failure never leaves a partially logged metric series behind.

use std::path::{Path, PathBuf};

use crate::domain::{METRIC_NAME, PLOT_FILE_NAME, SampleSeries, TrialConfig};
use crate::error::AppError;
use crate::recorder::RunRecorder;

/// All computed outputs of a single trial run.
#[derive(Debug, Clone)]
pub struct TrialOutput {
    pub run_dir: PathBuf,
    pub plot_path: PathBuf,
    pub series: SampleSeries,
}

/// Execute one trial against `recorder` and return the computed outputs.
pub fn run_trial(
    config: &TrialConfig,
    root: &Path,
    recorder: &mut dyn RunRecorder,
) -> Result<TrialOutput, AppError> {
    // 1) Fail fast on configurations the pipeline cannot run.
    config.validate()?;

    // 2) Resolve (and create) this run's private output directory.
    let run_dir = crate::io::outdir::resolve_run_dir(root, recorder.run_id())?;

    // 3) Sample the curve.
    let series = crate::math::generate(config);

    // 4) Render the plot and register it as the run's artifact.
    let plot_path = run_dir.join(PLOT_FILE_NAME);
    crate::plot::render_line_png(&series, &plot_path)?;
    recorder.attach_artifact(&plot_path, PLOT_FILE_NAME)?;

    // 5) Log one observation per sample, in ascending step order.
    for (x, y) in series.points() {
        recorder.log_scalar(METRIC_NAME, y, x)?;
    }

    Ok(TrialOutput {
        run_dir,
        plot_path,
        series,
    })
}
