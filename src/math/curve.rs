//! Curve generation.
//!
//! The trial curve is `y = a * exp(-tau * x) + b` evaluated on an evenly
//! spaced unit grid. Generation is pure and deterministic, so it can be unit
//! tested directly and rerun bit-for-bit identically.

use crate::domain::{SampleSeries, TrialConfig};

/// Generate `n` evenly spaced points over `[0, 1]`, inclusive of both ends.
///
/// `x[i] = i / (n - 1)` for `n > 1`. The evenly-spaced formula is undefined
/// at `n = 1`, which is defined here as the single point `[0.0]`; `n = 0`
/// yields an empty grid.
pub fn linspace_unit(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = 1.0 / (n as f64 - 1.0);
            (0..n).map(|i| i as f64 * step).collect()
        }
    }
}

/// Evaluate the decay curve for `config` over the unit grid.
pub fn generate(config: &TrialConfig) -> SampleSeries {
    let x = linspace_unit(config.samples);
    let y = x
        .iter()
        .map(|&xi| config.a * (-config.tau * xi).exp() + config.b)
        .collect();
    SampleSeries { x, y }
}
