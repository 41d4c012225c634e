// File: crates/market-charts/tests/generators.rs
// Summary: Runs each generator binary in a scratch directory and checks the files it leaves in output/.

use std::collections::BTreeSet;
use std::path::Path;
use std::process::Command;

use market_charts::outputs;

fn listing(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn run(name: &str, exe: &str) {
    let tmp = tempfile::tempdir().unwrap();
    let expected: BTreeSet<String> = outputs::for_generator(name).unwrap().into_iter().collect();

    let out = Command::new(exe).current_dir(tmp.path()).output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(out.status.success(), "{name} failed: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout.contains('✅'), "{name} printed no progress lines");
    assert!(stdout.contains('🎉'), "{name} printed no completion line");

    let out_dir = tmp.path().join("output");
    assert_eq!(listing(&out_dir), expected);
    for file in &expected {
        let len = std::fs::metadata(out_dir.join(file)).unwrap().len();
        assert!(len > 0, "{file} is empty");
    }

    // Re-running overwrites in place.
    let again = Command::new(exe).current_dir(tmp.path()).output().unwrap();
    assert!(again.status.success());
    assert_eq!(listing(&out_dir), expected);
}

#[test]
fn job_market_writes_png_and_svg() {
    run("job-market-graphs", env!("CARGO_BIN_EXE_job-market-graphs"));
}

#[test]
fn programming_languages_writes_png_and_svg() {
    run("programming-languages-graphs", env!("CARGO_BIN_EXE_programming-languages-graphs"));
}

#[test]
fn salary_analysis_writes_png() {
    run("salary-analysis-graphs", env!("CARGO_BIN_EXE_salary-analysis-graphs"));
}

#[test]
fn layoffs_analysis_writes_png() {
    run("layoffs-analysis-graphs", env!("CARGO_BIN_EXE_layoffs-analysis-graphs"));
}

#[test]
fn regional_comparison_writes_png() {
    run("regional-comparison-graphs", env!("CARGO_BIN_EXE_regional-comparison-graphs"));
}

#[test]
fn salary_comparison_writes_png() {
    run("salary-comparison-graphs", env!("CARGO_BIN_EXE_salary-comparison-graphs"));
}

#[test]
fn additional_market_writes_png() {
    run("additional-market-graphs", env!("CARGO_BIN_EXE_additional-market-graphs"));
}

#[test]
fn interactive_dashboard_writes_html() {
    let tmp = tempfile::tempdir().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_interactive-dashboard"))
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(out.status.success());

    let page = std::fs::read_to_string(tmp.path().join("output/interactive_03_regional_salaries.html")).unwrap();
    assert!(page.contains("Salaries vs Cost of Living by region - 2025"));
    assert!(page.contains("<b>Almaty<\\/b>"));
    drop(tmp);

    run("interactive-dashboard", env!("CARGO_BIN_EXE_interactive-dashboard"));
}

#[test]
fn unwritable_output_directory_fails() {
    let tmp = tempfile::tempdir().unwrap();
    // A plain file where the directory should be.
    std::fs::write(tmp.path().join("output"), b"").unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_salary-analysis-graphs"))
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
}
