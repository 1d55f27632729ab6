//! Error types for `input-resolve`.

use camino::Utf8PathBuf;
use input_resolver::ResolveError;
use thiserror::Error;

/// Errors surfaced by the `input-resolve` pipeline.
#[derive(Debug, Error)]
pub enum InputResolveError {
    /// Layered configuration could not be extracted.
    #[error("failed to load configuration: {0}")]
    Config(Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found at {0}")]
    MissingConfig(Utf8PathBuf),

    /// A fixture or options file could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// File being read.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// A fixture or options file is not valid JSON.
    #[error("failed to parse JSON in {path}: {source}")]
    Json {
        /// File being parsed.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },

    /// The fixture has the wrong shape for the chosen processor.
    #[error("invalid fixture: {0}")]
    Fixture(String),

    /// Inline flags cannot be combined with the supplied options.
    #[error("invalid argument {arg}: {message}")]
    Argument {
        /// Flag at fault.
        arg: &'static str,
        /// Explanation of the problem.
        message: String,
    },

    /// The resolver rejected the fixture or options.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The report could not be serialised.
    #[error("failed to render output: {0}")]
    Render(#[source] serde_json::Error),

    /// Writing the report failed.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl From<figment::Error> for InputResolveError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl InputResolveError {
    pub(crate) fn io(path: &camino::Utf8Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_owned(),
            source,
        }
    }

    pub(crate) fn json(path: &camino::Utf8Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_owned(),
            source,
        }
    }
}
