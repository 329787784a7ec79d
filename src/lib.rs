//! `decay-trial` library crate.
//!
//! The binary (`decay`) is a thin wrapper around this library so that:
//!
//! - the trial pipeline is testable without spawning processes
//! - the recorder seam is reusable (e.g., embedding the trial in a larger
//!   experiment harness with a different recorder backend)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod recorder;
pub mod report;
