//! Binary crate for the `wth` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The credential pre-flight check
//! - Wiring the core reporters to the terminal

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cmd = cli::Cli::parse();

    // Checked before anything touches the network.
    let api_key = match wth_core::config::api_key_from_env() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    match cmd.run(api_key).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize global tracing subscriber.
///
/// - Uses `RUST_LOG` if set (e.g. `RUST_LOG=wth_core=debug`)
/// - Otherwise only warnings, so stdout stays a clean report.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wth_cli=warn,wth_core=warn"));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
