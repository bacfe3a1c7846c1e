use std::io;
use std::path::PathBuf;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while loading, transforming or saving a payload.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// A `.json` / `.csv` file whose content does not parse.
    #[error("Malformed content in {}: {message}", path.display())]
    Format { path: PathBuf, message: String },

    /// The payload cannot be written in the requested format (e.g. CSV from a string).
    #[error("Unsupported payload: {0}")]
    UnsupportedPayload(String),

    /// Unknown digest name passed to the hash helper.
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The pipeline was asked to load without an input path.
    #[error("No input path provided")]
    MissingInput,

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Error::Format {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
