//! Domain types for a single trial run.

pub mod types;

pub use types::{METRIC_NAME, PLOT_FILE_NAME, SampleSeries, TrialConfig};
