//! File-backed run recorder.
//!
//! Records into the run's own directory:
//!
//! - `metrics.csv`: one `metric,step,value` row per logged scalar, appended
//!   as observations arrive
//! - `run.json`: manifest written by [`FileRecorder::finish`] with the run
//!   id, UTC start/finish times, the resolved configuration, and the list
//!   of attached artifact names

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::TrialConfig;
use crate::error::AppError;
use crate::recorder::RunRecorder;

/// File name of the scalar metrics log.
pub const METRICS_FILE_NAME: &str = "metrics.csv";

/// File name of the run manifest.
pub const MANIFEST_FILE_NAME: &str = "run.json";

/// Run manifest schema (`run.json`).
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    pub tool: String,
    pub run_id: String,
    pub started: DateTime<Utc>,
    pub finished: DateTime<Utc>,
    pub config: TrialConfig,
    pub artifacts: Vec<String>,
}

/// Recorder that persists scalars and the manifest under the run directory.
pub struct FileRecorder {
    run_id: String,
    dir: PathBuf,
    metrics: File,
    artifacts: Vec<String>,
    started: DateTime<Utc>,
}

impl FileRecorder {
    /// Derive a fresh run id from the current UTC time.
    ///
    /// Millisecond precision; unique enough for one run per process.
    pub fn fresh_run_id() -> String {
        format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S%3f"))
    }

    /// Create a recorder writing into `dir` (which must already exist).
    ///
    /// Opens `metrics.csv` and writes its header; an existing metrics file
    /// from a previous run into the same directory is truncated.
    pub fn create(run_id: impl Into<String>, dir: &Path) -> Result<Self, AppError> {
        let path = dir.join(METRICS_FILE_NAME);
        let mut metrics = File::create(&path).map_err(|e| {
            AppError::io(format!(
                "Failed to create metrics file '{}': {e}",
                path.display()
            ))
        })?;
        writeln!(metrics, "metric,step,value")
            .map_err(|e| AppError::io(format!("Failed to write metrics header: {e}")))?;

        Ok(Self {
            run_id: run_id.into(),
            dir: dir.to_path_buf(),
            metrics,
            artifacts: Vec::new(),
            started: Utc::now(),
        })
    }

    /// Write the `run.json` manifest and return its path.
    pub fn finish(&mut self, config: &TrialConfig) -> Result<PathBuf, AppError> {
        let manifest = RunManifest {
            tool: "decay".to_string(),
            run_id: self.run_id.clone(),
            started: self.started,
            finished: Utc::now(),
            config: *config,
            artifacts: self.artifacts.clone(),
        };

        let path = self.dir.join(MANIFEST_FILE_NAME);
        let file = File::create(&path).map_err(|e| {
            AppError::io(format!(
                "Failed to create run manifest '{}': {e}",
                path.display()
            ))
        })?;
        serde_json::to_writer_pretty(file, &manifest)
            .map_err(|e| AppError::io(format!("Failed to write run manifest: {e}")))?;

        Ok(path)
    }
}

impl RunRecorder for FileRecorder {
    fn run_id(&self) -> &str {
        &self.run_id
    }

    fn attach_artifact(&mut self, path: &Path, name: &str) -> Result<(), AppError> {
        if !path.is_file() {
            return Err(AppError::io(format!(
                "Artifact '{name}' does not exist at '{}'.",
                path.display()
            )));
        }
        self.artifacts.push(name.to_string());
        Ok(())
    }

    fn log_scalar(&mut self, metric: &str, value: f64, step: f64) -> Result<(), AppError> {
        writeln!(self.metrics, "{metric},{step},{value}")
            .map_err(|e| AppError::io(format!("Failed to write scalar for '{metric}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "decay-trial-recorder-{tag}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn fresh_run_ids_have_expected_prefix() {
        let id = FileRecorder::fresh_run_id();
        assert!(id.starts_with("run-"));
        assert!(id.len() > "run-".len());
    }

    #[test]
    fn writes_metrics_rows_in_order() {
        let dir = scratch_dir("metrics");
        let mut rec = FileRecorder::create("run-t", &dir).unwrap();
        rec.log_scalar("y", 13.0, 0.0).unwrap();
        rec.log_scalar("y", 9.0, 1.0).unwrap();
        drop(rec);

        let text = std::fs::read_to_string(dir.join(METRICS_FILE_NAME)).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "metric,step,value");
        assert_eq!(lines[1], "y,0,13");
        assert_eq!(lines[2], "y,1,9");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn attach_artifact_requires_existing_file() {
        let dir = scratch_dir("artifact");
        let mut rec = FileRecorder::create("run-t", &dir).unwrap();

        let err = rec
            .attach_artifact(&dir.join("missing.png"), "missing.png")
            .unwrap_err();
        assert_eq!(err.exit_code(), 3);

        let real = dir.join("real.png");
        std::fs::write(&real, b"png").unwrap();
        rec.attach_artifact(&real, "real.png").unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn finish_writes_manifest_with_config_and_artifacts() {
        let dir = scratch_dir("manifest");
        let mut rec = FileRecorder::create("run-t", &dir).unwrap();
        let plot = dir.join("output_plot.png");
        std::fs::write(&plot, b"png").unwrap();
        rec.attach_artifact(&plot, "output_plot.png").unwrap();

        let config = TrialConfig::default();
        let path = rec.finish(&config).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["run_id"], "run-t");
        assert_eq!(json["config"]["a"], 10.0);
        assert_eq!(json["config"]["samples"], 100);
        assert_eq!(json["artifacts"][0], "output_plot.png");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
