// File: crates/chart-runner/src/error.rs
// Summary: Errors that stop a batch before or between generator runs.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("{} not found in {}", .marker, .dir.display())]
    MissingMarker { marker: String, dir: PathBuf },

    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to scan output directory {}: {source}", .path.display())]
    ScanOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
