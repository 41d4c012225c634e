// File: crates/chart-runner/src/batch.rs
// Summary: Sequential batch over the generator list and the per-run / aggregate result records.

use std::future::Future;
use std::io::Write;
use std::time::{Duration, Instant};

use tracing::info;

use crate::config::RunnerConfig;
use crate::error::{Result, RunnerError};
use crate::process::run_generator;
use crate::report::{count_outputs, Reporter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    /// Non-zero exit; `code` is `None` when a signal ended the process.
    Failed { code: Option<i32> },
    TimedOut,
    SpawnFailed { reason: String },
    Missing,
}

#[derive(Clone, Debug)]
pub struct RunResult {
    pub name: String,
    pub outcome: Outcome,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

impl RunResult {
    pub fn new(name: impl Into<String>, outcome: Outcome, elapsed: Duration) -> Self {
        Self { name: name.into(), outcome, stdout: String::new(), stderr: String::new(), elapsed }
    }

    pub fn with_output(mut self, stdout: String, stderr: String) -> Self {
        self.stdout = stdout;
        self.stderr = stderr;
        self
    }

    pub fn succeeded(&self) -> bool {
        self.outcome == Outcome::Succeeded
    }

    /// Progress and completion lines worth echoing from a successful run.
    pub fn highlights(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines().filter(|l| l.contains('✅') || l.contains('🎉'))
    }
}

#[derive(Clone, Debug, Default)]
pub struct BatchSummary {
    pub results: Vec<RunResult>,
    pub elapsed: Duration,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn successful(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.successful()
    }

    pub fn failed_names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().filter(|r| !r.succeeded()).map(|r| r.name.as_str())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_succeeded() { 0 } else { 1 }
    }
}

/// Check the marker, prepare `output/`, then run every generator in order.
/// A failing generator never stops the batch.
pub async fn run_batch<W: Write>(config: &RunnerConfig, report: &mut Reporter<W>) -> Result<BatchSummary> {
    report.header("IT MARKET REPORT 2025 - VISUALIZATION GENERATOR")?;

    let marker = config.marker_path();
    if !marker.exists() {
        return Err(RunnerError::MissingMarker { marker: config.marker.clone(), dir: config.work_dir.clone() });
    }

    let out_dir = config.output_path();
    std::fs::create_dir_all(&out_dir).map_err(|source| RunnerError::OutputDir { path: out_dir.clone(), source })?;
    let out_dir = out_dir.canonicalize().unwrap_or(out_dir);
    report.success(&format!("Output directory: {}", out_dir.display()))?;
    report.info(&format!("Generator binaries: {}", config.bin_dir.display()))?;
    report.info(&format!("Running {} generators", config.scripts.len()))?;
    report.info("This takes about 2-3 minutes")?;

    let started = Instant::now();
    let n = config.scripts.len();
    let mut results = Vec::with_capacity(n);
    for (i, name) in config.scripts.iter().enumerate() {
        report.step(i + 1, n, name)?;
        let result = run_generator(name, &config.executable(name), &config.work_dir, config.timeout).await;
        info!(name = %name, outcome = ?result.outcome, elapsed_ms = result.elapsed.as_millis() as u64, "generator finished");
        report.result(&result, config.timeout)?;
        results.push(result);
    }
    let summary = BatchSummary { results, elapsed: started.elapsed() };

    let counts = count_outputs(&out_dir).map_err(|source| RunnerError::ScanOutput { path: out_dir.clone(), source })?;
    report.summary(&summary, &counts, &out_dir)?;
    Ok(summary)
}

/// Run the batch until it finishes or `cancel` resolves, reporting fatal
/// errors and interruption. Returns the process exit code.
pub async fn run_until<W, F>(config: &RunnerConfig, report: &mut Reporter<W>, cancel: F) -> Result<i32>
where
    W: Write,
    F: Future,
{
    let code = tokio::select! {
        biased;
        _ = cancel => {
            report.blank()?;
            report.warning("Interrupted by user")?;
            1
        }
        outcome = run_batch(config, report) => match outcome {
            Ok(summary) => summary.exit_code(),
            Err(RunnerError::MissingMarker { marker, .. }) => {
                report.error(&format!("{marker} not found!"))?;
                report.info("Run chart-runner from the workspace root")?;
                1
            }
            Err(e) => {
                report.error(&format!("Fatal error: {e}"))?;
                1
            }
        },
    };
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, outcome: Outcome) -> RunResult {
        RunResult::new(name, outcome, Duration::from_millis(10))
    }

    #[test]
    fn summary_counts_every_kind_of_failure() {
        let summary = BatchSummary {
            results: vec![
                result("a", Outcome::Succeeded),
                result("b", Outcome::Failed { code: Some(1) }),
                result("c", Outcome::TimedOut),
                result("d", Outcome::Missing),
                result("e", Outcome::SpawnFailed { reason: "denied".into() }),
            ],
            elapsed: Duration::from_secs(1),
        };
        assert_eq!(summary.successful(), 1);
        assert_eq!(summary.failed(), 4);
        assert_eq!(summary.failed_names().collect::<Vec<_>>(), ["b", "c", "d", "e"]);
        assert_eq!(summary.exit_code(), 1);
    }

    #[test]
    fn empty_batch_succeeds() {
        assert_eq!(BatchSummary::default().exit_code(), 0);
    }

    #[test]
    fn highlights_keep_progress_lines_only() {
        let r = result("a", Outcome::Succeeded).with_output(
            "🚀 start\n✅ Chart 1 saved\nnoise\n\n🎉 done\n".into(),
            String::new(),
        );
        assert_eq!(r.highlights().collect::<Vec<_>>(), ["✅ Chart 1 saved", "🎉 done"]);
    }
}
