//! Primary error enum for resolution and population flows.

use std::error::Error;

use thiserror::Error;

/// Shorthand for results produced by this crate.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while initialising a request from its input.
///
/// Missing values and mapping keys that the target does not declare are not
/// errors; they are skipped silently.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The processor was handed an input it cannot read.
    #[error("{processor} input processor expects {expected}")]
    UnsupportedInput {
        /// Name of the processor that rejected the input.
        processor: &'static str,
        /// Type name of the input the processor accepts.
        expected: &'static str,
    },

    /// An option key outside `order`, `map` and `restrict` was supplied.
    #[error("unrecognised option '{key}'; expected one of \"order\", \"map\" or \"restrict\"")]
    UnrecognizedOption {
        /// The first offending key.
        key: String,
    },

    /// A recognised option carried a value that cannot be interpreted.
    #[error("invalid value for option '{key}': {message}")]
    InvalidOption {
        /// Option key whose value was rejected.
        key: String,
        /// Human-readable explanation of the problem.
        message: String,
    },

    /// The request body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A resolved value could not be stored in a typed target field.
    #[error("cannot assign resolved value to field '{field}': {source}")]
    FieldAssignment {
        /// Target field that rejected the value.
        field: String,
        /// Underlying conversion failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Failure reported by a [`crate::Decoder`] while decoding a request body.
#[derive(Debug, Error)]
#[error("failed to decode {format} body: {source}")]
pub struct DecodeError {
    format: String,
    #[source]
    source: Box<dyn Error + Send + Sync>,
}

impl DecodeError {
    /// Wrap a decoder failure for `format`.
    pub fn new(format: impl Into<String>, source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            format: format.into(),
            source: source.into(),
        }
    }

    /// Format name the decoder was asked to read.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}
