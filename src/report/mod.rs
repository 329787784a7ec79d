//! Terminal summary of a completed run.
//!
//! Formatting lives in one place so the pipeline stays clean and output
//! changes are localized.

use crate::app::pipeline::TrialOutput;
use crate::domain::TrialConfig;

/// Format the post-run summary printed by the `decay` binary.
pub fn format_run_summary(run_id: &str, config: &TrialConfig, output: &TrialOutput) -> String {
    let (y_min, y_max) = output
        .series
        .y
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| {
            (lo.min(y), hi.max(y))
        });

    let mut out = String::new();
    out.push_str("=== decay - exponential-decay trial ===\n");
    out.push_str(&format!("Run: {run_id}\n"));
    out.push_str(&format!(
        "Config: A={} tau={} B={} N={}\n",
        config.a, config.tau, config.b, config.samples
    ));
    out.push_str(&format!(
        "Series: n={} | y=[{y_min:.4}, {y_max:.4}]\n",
        output.series.len()
    ));
    out.push_str(&format!("Output: {}\n", output.run_dir.display()));
    out.push_str(&format!("Plot:   {}", output.plot_path.display()));
    out
}
