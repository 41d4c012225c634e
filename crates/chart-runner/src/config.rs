// File: crates/chart-runner/src/config.rs
// Summary: Runner settings and the optional command-line overrides.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Generators in the order they run.
pub const DEFAULT_SCRIPTS: &[&str] = &[
    "job-market-graphs",
    "programming-languages-graphs",
    "salary-analysis-graphs",
    "layoffs-analysis-graphs",
    "regional-comparison-graphs",
    "interactive-dashboard",
];

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// File that must exist in `work_dir` before anything runs.
    pub marker: String,
    /// Where generators run; they write into `output/` under it.
    pub work_dir: PathBuf,
    /// Resolved against `work_dir` when relative.
    pub output_dir: PathBuf,
    /// Directory holding the generator executables.
    pub bin_dir: PathBuf,
    pub timeout: Duration,
    pub scripts: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        // Generators are built next to the runner in the same target directory.
        let bin_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            marker: "Cargo.toml".into(),
            work_dir: PathBuf::from("."),
            output_dir: PathBuf::from("output"),
            bin_dir,
            timeout: DEFAULT_TIMEOUT,
            scripts: DEFAULT_SCRIPTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RunnerConfig {
    pub fn output_path(&self) -> PathBuf {
        self.work_dir.join(&self.output_dir)
    }

    pub fn marker_path(&self) -> PathBuf {
        self.work_dir.join(&self.marker)
    }

    /// Path of a generator executable, with the platform suffix.
    pub fn executable(&self, name: &str) -> PathBuf {
        self.bin_dir.join(format!("{name}{}", std::env::consts::EXE_SUFFIX))
    }
}

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "chart-runner",
    about = "Run every IT market chart generator and summarize the results",
    long_about = "Run every IT market chart generator and summarize the results.\n\n\
        Generator executables are looked up next to chart-runner unless --bin-dir is given.\n\
        Build them first with `cargo build --workspace`.",
    version
)]
pub struct Cli {
    /// Per-generator timeout in seconds.
    #[arg(long = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    /// Directory containing the generator executables.
    #[arg(long = "bin-dir")]
    pub bin_dir: Option<PathBuf>,

    /// File that must be present in the working directory.
    #[arg(long)]
    pub marker: Option<String>,
}

impl From<Cli> for RunnerConfig {
    fn from(cli: Cli) -> Self {
        let mut cfg = RunnerConfig::default();
        if let Some(secs) = cli.timeout_secs {
            cfg.timeout = Duration::from_secs(secs);
        }
        if let Some(dir) = cli.bin_dir {
            cfg.bin_dir = dir;
        }
        if let Some(marker) = cli.marker {
            cfg.marker = marker;
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keeps_defaults() {
        let cfg = RunnerConfig::from(Cli::parse_from(["chart-runner"]));
        assert_eq!(cfg.marker, "Cargo.toml");
        assert_eq!(cfg.timeout, Duration::from_secs(300));
        assert_eq!(cfg.scripts.len(), 6);
        assert_eq!(cfg.scripts[0], "job-market-graphs");
        assert_eq!(cfg.scripts[5], "interactive-dashboard");
    }

    #[test]
    fn help_mentions_building_the_generators() {
        use clap::CommandFactory;
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains("cargo build --workspace"));
        assert!(help.contains("--bin-dir"));
    }

    #[test]
    fn flags_override() {
        let cli = Cli::parse_from(["chart-runner", "--timeout-secs", "5", "--bin-dir", "/opt/bin", "--marker", "x.txt"]);
        let cfg = RunnerConfig::from(cli);
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.bin_dir, PathBuf::from("/opt/bin"));
        assert_eq!(cfg.marker_path(), PathBuf::from("./x.txt"));
    }
}
