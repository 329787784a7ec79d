//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while the trial runs
//! - persisted into the run manifest (`run.json`)
//! - reloaded later for comparisons across runs

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Metric name under which per-sample observations are logged.
pub const METRIC_NAME: &str = "y";

/// File name (and artifact name) of the rendered plot.
pub const PLOT_FILE_NAME: &str = "output_plot.png";

/// Resolved configuration of one trial: `y = a * exp(-tau * x) + b` sampled
/// at `samples` evenly spaced points of `x` over `[0, 1]`.
///
/// Built from `Default` plus caller overrides before the run starts; not
/// mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Amplitude of the decay term.
    pub a: f64,
    /// Decay rate. Negative and zero values are accepted (growth / constant).
    pub tau: f64,
    /// Vertical offset.
    pub b: f64,
    /// Number of sample points over `[0, 1]`.
    pub samples: usize,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            a: 10.0,
            tau: 0.5,
            b: 3.0,
            samples: 100,
        }
    }
}

impl TrialConfig {
    /// Reject configurations the pipeline cannot run.
    ///
    /// `samples == 0` and non-finite parameters fail here, before any
    /// filesystem effect. Negative `tau` is allowed: the curve formula is
    /// well defined for it.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.samples == 0 {
            return Err(AppError::config("samples must be >= 1."));
        }
        for (name, value) in [("A", self.a), ("tau", self.tau), ("B", self.b)] {
            if !value.is_finite() {
                return Err(AppError::config(format!(
                    "{name} must be finite, got {value}."
                )));
            }
        }
        Ok(())
    }
}

/// The sampled curve of one trial.
///
/// `x` and `y` have equal length; `x` is strictly increasing over `[0, 1]`
/// (a single `0.0` when `samples = 1`). Created once by the curve generator
/// and read-only afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SampleSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate `(x, y)` pairs in sample order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = TrialConfig::default();
        assert_eq!(c.a, 10.0);
        assert_eq!(c.tau, 0.5);
        assert_eq!(c.b, 3.0);
        assert_eq!(c.samples, 100);
    }

    #[test]
    fn validate_accepts_defaults_and_single_sample() {
        assert!(TrialConfig::default().validate().is_ok());
        let one = TrialConfig {
            samples: 1,
            ..TrialConfig::default()
        };
        assert!(one.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_samples() {
        let c = TrialConfig {
            samples: 0,
            ..TrialConfig::default()
        };
        let err = c.validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn validate_rejects_non_finite_parameters() {
        for bad in [
            TrialConfig {
                a: f64::NAN,
                ..TrialConfig::default()
            },
            TrialConfig {
                tau: f64::INFINITY,
                ..TrialConfig::default()
            },
            TrialConfig {
                b: f64::NEG_INFINITY,
                ..TrialConfig::default()
            },
        ] {
            assert!(bad.validate().is_err());
        }
    }

    #[test]
    fn validate_permits_negative_tau() {
        let c = TrialConfig {
            tau: -2.0,
            ..TrialConfig::default()
        };
        assert!(c.validate().is_ok());
    }

    #[test]
    fn points_zips_in_order() {
        let s = SampleSeries {
            x: vec![0.0, 0.5, 1.0],
            y: vec![3.0, 2.0, 1.0],
        };
        let pairs: Vec<_> = s.points().collect();
        assert_eq!(pairs, vec![(0.0, 3.0), (0.5, 2.0), (1.0, 1.0)]);
    }
}
