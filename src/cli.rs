use std::path::PathBuf;

use clap::Parser;

/// UltimateCryptoToolkit - lowercase the records of a JSON, CSV or text file
#[derive(Parser, Debug, Clone)]
#[command(name = "ultimate-crypto-toolkit")]
#[command(version)]
#[command(about = "Lowercase the records of a JSON, CSV or text file")]
#[command(after_help = "Example: ultimate-crypto-toolkit --input data.json --output result.json")]
pub struct Cli {
    /// Input file path (.json, .csv, anything else is read as text)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path; the result is printed to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Log level implied by the flags; `RUST_LOG` still wins when set.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
