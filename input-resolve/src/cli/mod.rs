//! Command-line interface definitions for `input-resolve`.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Input processors the tool can drive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorKind {
    /// Resolve across the seven request slots.
    #[default]
    Http,
    /// Decode the fixture's `content` as a JSON body.
    Json,
    /// Treat the fixture object itself as the single mapping.
    Array,
}

impl ProcessorKind {
    /// Returns the CLI-friendly string for this processor.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Json => "json",
            Self::Array => "array",
        }
    }
}

/// Parsed CLI arguments for `input-resolve`.
#[derive(Debug, Parser)]
#[command(name = "input-resolve")]
#[command(about = "Resolve a request fixture and print the winning field values")]
#[command(version)]
pub struct Args {
    /// JSON fixture keyed by slot letter or name, with an optional `content`.
    #[arg(value_name = "FIXTURE")]
    pub fixture: Utf8PathBuf,
    /// Processor used to read the fixture [default: http].
    #[arg(long, value_enum)]
    pub processor: Option<ProcessorKind>,
    /// JSON file holding the options object.
    #[arg(long, value_name = "FILE")]
    pub options: Option<Utf8PathBuf>,
    /// Resolution order as slot letters, for example `GPC`.
    #[arg(long, value_name = "LETTERS")]
    pub order: Option<String>,
    /// Rename a source key onto a field (repeatable).
    #[arg(long = "map", value_name = "KEY=FIELD", value_parser = parse_pair)]
    pub renames: Vec<(String, String)>,
    /// Restrict a field to the given slots (repeatable).
    #[arg(long = "restrict", value_name = "FIELD=LETTERS", value_parser = parse_pair)]
    pub restrictions: Vec<(String, String)>,
    /// Populate a record declaring only these fields (repeatable).
    #[arg(long = "field", value_name = "NAME")]
    pub fields: Vec<String>,
    /// Report the slot each value was taken from.
    #[arg(long = "provenance")]
    pub should_report_provenance: bool,
    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub should_pretty_print: bool,
    /// Configuration file [default: input-resolve.toml].
    #[arg(long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,
}

/// Split `LEFT=RIGHT`, rejecting empty halves.
fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((left, right)) if !left.is_empty() && !right.is_empty() => {
            Ok((left.to_owned(), right.to_owned()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}
