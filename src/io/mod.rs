//! Filesystem concerns: run directory resolution.

pub mod outdir;
