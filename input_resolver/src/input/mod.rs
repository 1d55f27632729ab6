//! Input processors: validate options, read sources, resolve and populate.
//!
//! Every processor follows the same pipeline. Options are validated first, so
//! an unknown option key fails the call before any source is read or any field
//! is written. The processor then snapshots its input, resolves the winning
//! values and hands them to [`crate::populate`].
//!
//! Processors are object safe through [`InputProcessor`], which accepts the
//! raw input as [`Any`] so a caller holding a registry of processors can pass
//! whatever input it has; a processor handed an input it cannot read fails
//! with [`crate::ResolveError::UnsupportedInput`]. Each processor also offers
//! a typed entry point that returns the populated target for chaining.

mod array;
mod decode;
mod http;
mod json;

pub use array::ArrayInputProcessor;
pub use decode::{Decoder, JsonDecoder};
pub use http::HttpInputProcessor;
pub use json::JsonInputProcessor;

use std::any::Any;

use serde_json::Value;

use crate::{FieldTarget, ResolveResult};

/// A strategy for initialising a request object from some raw input.
pub trait InputProcessor {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Populate `target` from `input` according to `options`.
    ///
    /// `options` is the caller's raw options object; `null` means none.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResolveError::UnsupportedInput`] when `input` is not
    /// the type this processor reads, and propagates option, decoding and
    /// field assignment errors.
    fn initialize_request(
        &self,
        target: &mut dyn FieldTarget,
        input: &dyn Any,
        options: &Value,
    ) -> ResolveResult<()>;
}

#[cfg(test)]
mod tests;
