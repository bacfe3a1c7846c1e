//! UltimateCryptoToolkit: load a JSON, CSV or text file, lowercase its
//! records and optionally write the result back out.
//!
//! ```no_run
//! use ultimate_crypto_toolkit::{Outcome, Pipeline, PipelineConfig};
//!
//! let mut pipeline = Pipeline::new(
//!     PipelineConfig::new()
//!         .with_input("data.json")
//!         .with_output("out/result.csv"),
//! );
//! match pipeline.execute()? {
//!     Outcome::Saved(path) => println!("wrote {}", path.display()),
//!     Outcome::Transformed(payload) => println!("{payload}"),
//!     Outcome::Invalid => eprintln!("bad paths"),
//! }
//! # Ok::<(), ultimate_crypto_toolkit::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod util;

pub use config::PipelineConfig;
pub use data::codec::{load, save};
pub use data::model::{render, Format, Payload};
pub use data::transform::transform;
pub use error::{Error, Result};
pub use pipeline::{Outcome, Pipeline, PipelineState};
pub use util::{generate_hash, generate_hash_default, validate_email, HashAlgorithm};
