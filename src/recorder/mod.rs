//! Run recording capability.
//!
//! The trial pipeline does not talk to a tracking backend directly; it is
//! handed a `RunRecorder` and reports through it. That keeps the pipeline
//! testable (record into memory) and the backend swappable (files today,
//! a remote tracker tomorrow) without global observer registration.

use std::path::{Path, PathBuf};

use crate::error::AppError;

pub mod file;

pub use file::FileRecorder;

/// Capability interface the pipeline reports through.
///
/// Per run the pipeline attaches exactly one artifact (the rendered plot)
/// and then logs one scalar per sample point, in ascending step order.
pub trait RunRecorder {
    /// Opaque identifier of this run; names the run's output directory.
    fn run_id(&self) -> &str;

    /// Register a file as a named artifact of the run.
    fn attach_artifact(&mut self, path: &Path, name: &str) -> Result<(), AppError>;

    /// Append one `(step, value)` observation under `metric`.
    fn log_scalar(&mut self, metric: &str, value: f64, step: f64) -> Result<(), AppError>;
}

/// One logged scalar observation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarEntry {
    pub metric: String,
    pub value: f64,
    pub step: f64,
}

/// In-memory recorder for tests and embedding.
#[derive(Debug)]
pub struct MemoryRecorder {
    run_id: String,
    pub artifacts: Vec<(PathBuf, String)>,
    pub scalars: Vec<ScalarEntry>,
}

impl MemoryRecorder {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            artifacts: Vec::new(),
            scalars: Vec::new(),
        }
    }
}

impl RunRecorder for MemoryRecorder {
    fn run_id(&self) -> &str {
        &self.run_id
    }

    fn attach_artifact(&mut self, path: &Path, name: &str) -> Result<(), AppError> {
        self.artifacts.push((path.to_path_buf(), name.to_string()));
        Ok(())
    }

    fn log_scalar(&mut self, metric: &str, value: f64, step: f64) -> Result<(), AppError> {
        self.scalars.push(ScalarEntry {
            metric: metric.to_string(),
            value,
            step,
        });
        Ok(())
    }
}
