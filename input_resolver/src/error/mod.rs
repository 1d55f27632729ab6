//! Error types produced while resolving and applying request input.

mod constructors;
mod types;

pub use types::{DecodeError, ResolveError, ResolveResult};
