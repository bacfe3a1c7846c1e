use std::path::PathBuf;

use log::{debug, error, warn};

use crate::config::PipelineConfig;
use crate::data::codec;
use crate::data::model::Payload;
use crate::data::transform::transform;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Run state
// ---------------------------------------------------------------------------

/// Lifecycle of a single run: `Created → Validated → {Succeeded, Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Created,
    Validated,
    Succeeded,
    Failed,
}

/// What a successful call to [`Pipeline::execute`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Path validation failed; nothing was loaded or written.
    Invalid,
    /// The transformed payload was written to this path.
    Saved(PathBuf),
    /// No output path was configured; the transformed payload is handed back.
    Transformed(Payload),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Invalid)
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// validate → load → transform → save, for one invocation.
#[derive(Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    state: PipelineState,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            state: PipelineState::Created,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Check the input exists and make sure the output directory does.
    ///
    /// Never errors: problems are logged and reported as `false`. Creating a
    /// missing output directory is a side effect of a successful check.
    pub fn validate(&mut self) -> bool {
        if let Some(input) = self.config.input() {
            if !input.exists() {
                warn!("Input file does not exist: {}", input.display());
                self.state = PipelineState::Failed;
                return false;
            }
        }

        if let Some(output) = self.config.output() {
            // `parent()` of a bare file name is "", i.e. the working directory.
            if let Some(dir) = output.parent().filter(|d| !d.as_os_str().is_empty()) {
                if !dir.exists() {
                    if let Err(e) = std::fs::create_dir_all(dir) {
                        error!("Failed to create output directory {}: {e}", dir.display());
                        self.state = PipelineState::Failed;
                        return false;
                    }
                    debug!("Created output directory {}", dir.display());
                }
            }
        }

        self.state = PipelineState::Validated;
        true
    }

    /// Run the whole pipeline.
    ///
    /// Validation failures come back as `Ok(Outcome::Invalid)`. Load and save
    /// failures are logged and returned as `Err`.
    pub fn execute(&mut self) -> Result<Outcome> {
        if !self.validate() {
            return Ok(Outcome::Invalid);
        }

        match self.process() {
            Ok(outcome) => {
                self.state = PipelineState::Succeeded;
                Ok(outcome)
            }
            Err(e) => {
                if self.config.is_verbose() {
                    error!("Processing error: {e:?}");
                } else {
                    error!("Processing error: {e}");
                }
                self.state = PipelineState::Failed;
                Err(e)
            }
        }
    }

    fn process(&self) -> Result<Outcome> {
        debug!("Starting data processing");

        let input = self.config.input().ok_or(Error::MissingInput)?;
        let data = codec::load(input)?;
        let processed = transform(&data);

        match self.config.output() {
            Some(output) => {
                codec::save(&processed, output)?;
                Ok(Outcome::Saved(output.to_path_buf()))
            }
            None => Ok(Outcome::Transformed(processed)),
        }
    }
}
