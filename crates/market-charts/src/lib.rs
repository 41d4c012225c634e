// File: crates/market-charts/src/lib.rs
// Summary: Shared generator harness, report palette and the advertised output file sets.

pub mod harness;
pub mod outputs;
pub mod palette;

pub use harness::Generator;

/// Diagnostics on stderr; `RUST_LOG` raises verbosity (default `warn`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
