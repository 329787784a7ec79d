//! Numeric building blocks for trial runs.

pub mod curve;

pub use curve::{generate, linspace_unit};
