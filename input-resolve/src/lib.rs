//! Library interface for the `input-resolve` diagnostic tool.
//!
//! Loads a request fixture from disk, resolves it with one of the
//! `input_resolver` processors and renders the winning values (optionally
//! with the slot each value came from) as JSON.

pub mod cli;
pub mod config;
pub mod error;
pub mod fixture;
pub mod run;

pub use cli::{Args, ProcessorKind};
pub use config::Settings;
pub use error::InputResolveError;
pub use run::{execute, render};
