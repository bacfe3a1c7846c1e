use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Settings for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    verbose: bool,
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

impl From<&Cli> for PipelineConfig {
    fn from(cli: &Cli) -> Self {
        PipelineConfig {
            input: cli.input.clone(),
            output: cli.output.clone(),
            verbose: cli.verbose,
        }
    }
}
