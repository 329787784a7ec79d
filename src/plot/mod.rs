//! Plot rendering for the run's image artifact.

pub mod png;

pub use png::render_line_png;
