//! Test helpers shared across crates in the workspace.
//!
//! Provides request envelope builders driven by JSON literals, scratch
//! fixture files, and a `figment::Jail` wrapper for configuration tests.

pub mod figment;
pub mod files;
pub mod request;

pub use files::FixtureDir;
pub use request::{request_from_json, slot_map};
