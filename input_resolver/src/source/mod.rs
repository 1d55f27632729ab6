//! Input sources and the snapshots the resolver reads from.
//!
//! A request carries up to seven independent flat mappings (query string,
//! body, uploaded files, cookies, server metadata, headers and routing
//! attributes). Each is identified by a [`SourceTag`]. The resolver never
//! talks to a request directly; it reads an immutable [`SourceSet`] captured
//! from a [`RequestEnvelope`] at the start of the call.

mod envelope;
mod set;
mod tag;

pub use envelope::{HttpRequest, ParameterBag, RequestEnvelope};
pub use set::SourceSet;
pub use tag::{SourceTag, UnknownSourceTag};
