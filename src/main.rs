use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use serde_json::Value as JsonValue;

use ultimate_crypto_toolkit::cli::Cli;
use ultimate_crypto_toolkit::{Outcome, Pipeline, PipelineConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            if cli.verbose {
                error!("Processing failed: {e:?}");
            } else {
                error!("Processing failed: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins; otherwise INFO, or DEBUG with `--verbose`.
fn init_logging(cli: &Cli) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log_level().as_str()),
    )
    .init();
}

fn run(cli: &Cli) -> Result<bool> {
    info!("Initializing processor");
    let mut pipeline = Pipeline::new(PipelineConfig::from(cli));

    let outcome = pipeline.execute().context("pipeline execution")?;
    match &outcome {
        Outcome::Invalid => warn!("Operation completed with warnings"),
        Outcome::Saved(path) => info!("Operation completed successfully: {}", path.display()),
        Outcome::Transformed(payload) => {
            print_payload(payload)?;
            info!("Operation completed successfully");
        }
    }

    Ok(outcome.is_success())
}

fn print_payload(payload: &JsonValue) -> Result<()> {
    match payload {
        JsonValue::String(text) => println!("{text}"),
        other => println!(
            "{}",
            serde_json::to_string_pretty(other).context("serializing result")?
        ),
    }
    Ok(())
}
