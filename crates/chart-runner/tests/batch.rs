// File: crates/chart-runner/tests/batch.rs
// Summary: Batch behavior against stand-in generator scripts (timeouts, failures, missing marker, file counts).
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use chart_runner::{run_batch, run_until, Outcome, Reporter, RunnerConfig, RunnerError};

// Writing an executable while another test forks can leave it busy (ETXTBSY).
static SERIAL: Mutex<()> = Mutex::new(());

fn script(bin: &Path, name: &str, body: &str) {
    let path = bin.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

struct Workspace {
    _root: tempfile::TempDir,
    config: RunnerConfig,
}

fn workspace(scripts: &[(&str, &str)], timeout: Duration) -> Workspace {
    let root = tempfile::tempdir().unwrap();
    let work = root.path().join("work");
    let bin = root.path().join("bin");
    std::fs::create_dir_all(&work).unwrap();
    std::fs::create_dir_all(&bin).unwrap();
    std::fs::write(work.join("Cargo.toml"), "[workspace]\n").unwrap();
    for (name, body) in scripts {
        script(&bin, name, body);
    }
    let config = RunnerConfig {
        work_dir: work,
        bin_dir: bin,
        timeout,
        scripts: scripts.iter().map(|(n, _)| n.to_string()).collect(),
        ..RunnerConfig::default()
    };
    Workspace { _root: root, config }
}

#[tokio::test]
async fn timed_out_generator_does_not_stop_the_batch() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = workspace(
        &[
            ("first", "echo '✅ one'"),
            ("slow", "sleep 30"),
            ("last", "echo '🎉 done'"),
        ],
        Duration::from_secs(1),
    );
    let mut rep = Reporter::new(Vec::new());
    let summary = run_batch(&ws.config, &mut rep).await.unwrap();

    let outcomes: Vec<_> = summary.results.iter().map(|r| r.outcome.clone()).collect();
    assert_eq!(outcomes, [Outcome::Succeeded, Outcome::TimedOut, Outcome::Succeeded]);
    assert_eq!(summary.failed_names().collect::<Vec<_>>(), ["slow"]);
    assert!(summary.results[1].elapsed < Duration::from_secs(10));
    assert_eq!(summary.exit_code(), 1);

    let text = String::from_utf8(rep.into_inner()).unwrap();
    assert!(text.contains("slow exceeded the timeout (1 s)"));
    assert!(text.contains("  🎉 done"));
}

#[tokio::test]
async fn missing_marker_runs_nothing() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let mut ws = workspace(&[("writer", "touch ran.flag")], Duration::from_secs(5));
    ws.config.marker = "requirements.txt".into();
    let mut rep = Reporter::new(Vec::new());

    let err = run_batch(&ws.config, &mut rep).await.unwrap_err();
    assert!(matches!(err, RunnerError::MissingMarker { .. }));
    assert!(!ws.config.work_dir.join("ran.flag").exists());
    assert!(!ws.config.output_path().exists());
}

#[tokio::test]
async fn five_of_six_succeed() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ok = "echo '✅ saved'";
    let ws = workspace(
        &[
            ("g1", ok),
            ("g2", ok),
            ("g3", ok),
            ("g4", ok),
            ("g5", ok),
            ("g6", "echo 'Traceback: boom' >&2; exit 1"),
        ],
        Duration::from_secs(10),
    );
    let mut rep = Reporter::new(Vec::new());
    let summary = run_batch(&ws.config, &mut rep).await.unwrap();

    assert_eq!(summary.successful(), 5);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.results[5].outcome, Outcome::Failed { code: Some(1) });
    assert_eq!(summary.exit_code(), 1);

    let text = String::from_utf8(rep.into_inner()).unwrap();
    assert!(text.contains("[6/6] g6"));
    assert!(text.contains("Successful: 5/6"));
    assert!(text.contains("Failed: 1/6"));
    assert!(text.contains("❌ g6"));
    assert!(text.contains("Traceback: boom"));
}

#[tokio::test]
async fn summary_counts_files_in_output() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = workspace(
        &[
            ("pngs", "touch output/a.png output/b.png; echo '✅ png'"),
            ("svg", "touch output/a.svg"),
            ("html", "touch output/a.html output/readme.txt"),
        ],
        Duration::from_secs(10),
    );
    let mut rep = Reporter::new(Vec::new());
    let summary = run_batch(&ws.config, &mut rep).await.unwrap();
    assert!(summary.all_succeeded());

    let text = String::from_utf8(rep.into_inner()).unwrap();
    assert!(text.contains("PNG images: 2"));
    assert!(text.contains("SVG vectors: 1"));
    assert!(text.contains("HTML interactive: 1"));
    assert!(text.contains("Total: 4 files"));
    assert!(text.contains("🎉 ALL VISUALIZATIONS CREATED SUCCESSFULLY!"));
}

#[tokio::test]
async fn missing_executable_is_a_failure_not_an_abort() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let mut ws = workspace(&[("present", "exit 0")], Duration::from_secs(5));
    ws.config.scripts = vec!["absent".into(), "present".into()];
    let mut rep = Reporter::new(Vec::new());
    let summary = run_batch(&ws.config, &mut rep).await.unwrap();

    assert_eq!(summary.results[0].outcome, Outcome::Missing);
    assert_eq!(summary.results[1].outcome, Outcome::Succeeded);
    let text = String::from_utf8(rep.into_inner()).unwrap();
    assert!(text.contains("Generator not found: absent"));
}

#[tokio::test]
async fn generators_get_closed_stdin() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    // `cat` returns at once on a closed stdin instead of waiting for input.
    let ws = workspace(&[("reader", "cat")], Duration::from_secs(5));
    let mut rep = Reporter::new(Vec::new());
    let summary = run_batch(&ws.config, &mut rep).await.unwrap();
    assert!(summary.all_succeeded());
}

#[tokio::test]
async fn report_names_the_binary_directory() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = workspace(&[("quiet", "exit 0")], Duration::from_secs(5));
    let mut rep = Reporter::new(Vec::new());
    run_batch(&ws.config, &mut rep).await.unwrap();

    let text = String::from_utf8(rep.into_inner()).unwrap();
    assert!(text.contains(&format!("Generator binaries: {}", ws.config.bin_dir.display())));
}

#[tokio::test]
async fn vanished_output_directory_is_a_scan_error() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = workspace(&[("cleaner", "rm -rf output")], Duration::from_secs(5));
    let mut rep = Reporter::new(Vec::new());

    let err = run_batch(&ws.config, &mut rep).await.unwrap_err();
    assert!(matches!(err, RunnerError::ScanOutput { .. }), "{err:?}");
    assert!(err.to_string().starts_with("failed to scan output directory"));
}

#[tokio::test]
async fn cancel_before_start_reports_interruption() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = workspace(&[("writer", "touch ran.flag")], Duration::from_secs(5));
    let mut rep = Reporter::new(Vec::new());

    let code = run_until(&ws.config, &mut rep, std::future::ready(())).await.unwrap();
    assert_eq!(code, 1);
    assert!(!ws.config.work_dir.join("ran.flag").exists());
    let text = String::from_utf8(rep.into_inner()).unwrap();
    assert!(text.contains("Interrupted by user"));
}

#[tokio::test]
async fn cancel_stops_a_running_generator() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = workspace(&[("slow", "sleep 30"), ("after", "touch after.flag")], Duration::from_secs(60));
    let mut rep = Reporter::new(Vec::new());

    let started = std::time::Instant::now();
    let cancel = tokio::time::sleep(Duration::from_millis(300));
    let code = run_until(&ws.config, &mut rep, cancel).await.unwrap();
    assert_eq!(code, 1);
    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(!ws.config.work_dir.join("after.flag").exists());
    let text = String::from_utf8(rep.into_inner()).unwrap();
    assert!(text.contains("[1/2] slow"));
    assert!(text.contains("Interrupted by user"));
}

#[tokio::test]
async fn uncancelled_run_returns_the_batch_exit_code() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let ws = workspace(&[("ok", "exit 0"), ("bad", "exit 3")], Duration::from_secs(5));
    let mut rep = Reporter::new(Vec::new());
    let code = run_until(&ws.config, &mut rep, std::future::pending::<()>()).await.unwrap();
    assert_eq!(code, 1);

    let ws = workspace(&[("ok", "exit 0")], Duration::from_secs(5));
    let mut rep = Reporter::new(Vec::new());
    let code = run_until(&ws.config, &mut rep, std::future::pending::<()>()).await.unwrap();
    assert_eq!(code, 0);
}

#[tokio::test]
async fn missing_marker_is_reported_with_a_hint() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let mut ws = workspace(&[("writer", "touch ran.flag")], Duration::from_secs(5));
    ws.config.marker = "requirements.txt".into();
    let mut rep = Reporter::new(Vec::new());

    let code = run_until(&ws.config, &mut rep, std::future::pending::<()>()).await.unwrap();
    assert_eq!(code, 1);
    let text = String::from_utf8(rep.into_inner()).unwrap();
    assert!(text.contains("requirements.txt not found!"));
    assert!(text.contains("Run chart-runner from the workspace root"));
}
