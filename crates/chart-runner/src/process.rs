// File: crates/chart-runner/src/process.rs
// Summary: Runs one generator as a child process with captured output and a hard timeout.

use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tracing::debug;

use crate::batch::{Outcome, RunResult};

/// Run `exe` in `cwd`, closing stdin and capturing stdout/stderr as text.
///
/// On timeout the output future is dropped, and `kill_on_drop` takes the
/// child down with it.
pub async fn run_generator(name: &str, exe: &Path, cwd: &Path, timeout: Duration) -> RunResult {
    let started = Instant::now();
    if !exe.is_file() {
        debug!(exe = %exe.display(), "generator executable missing");
        return RunResult::new(name, Outcome::Missing, started.elapsed());
    }

    debug!(exe = %exe.display(), cwd = %cwd.display(), ?timeout, "spawning generator");
    let output = tokio::time::timeout(
        timeout,
        Command::new(exe)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output(),
    )
    .await;
    let elapsed = started.elapsed();

    match output {
        Ok(Ok(out)) => {
            let outcome = if out.status.success() { Outcome::Succeeded } else { Outcome::Failed { code: out.status.code() } };
            RunResult::new(name, outcome, elapsed).with_output(
                String::from_utf8_lossy(&out.stdout).into_owned(),
                String::from_utf8_lossy(&out.stderr).into_owned(),
            )
        }
        Ok(Err(e)) => RunResult::new(name, Outcome::SpawnFailed { reason: e.to_string() }, elapsed),
        Err(_) => {
            debug!(name, "generator timed out; child killed");
            RunResult::new(name, Outcome::TimedOut, elapsed)
        }
    }
}
