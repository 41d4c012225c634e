// File: crates/chart-runner/src/main.rs
// Summary: Entry point; runs all generators once and exits 0 only when every one succeeded.
// Generators are looked up next to this executable, so build them first with
// `cargo build --workspace` (or pass --bin-dir).

use chart_runner::{run_until, Cli, Reporter, RunnerConfig};
use clap::Parser;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = RunnerConfig::from(Cli::parse());
    tracing::debug!(?config, "runner configuration");

    let mut report = Reporter::new(std::io::stdout());
    let code = run_until(&config, &mut report, tokio::signal::ctrl_c()).await?;
    std::process::exit(code)
}
