// File: crates/chart-runner/src/lib.rs
// Summary: Batch runner library; config, subprocess execution, result records and the report.

pub mod batch;
pub mod config;
pub mod error;
pub mod process;
pub mod report;

pub use batch::{run_batch, run_until, BatchSummary, Outcome, RunResult};
pub use config::{Cli, RunnerConfig, DEFAULT_SCRIPTS};
pub use error::{Result, RunnerError};
pub use report::{FileCounts, Reporter};
