//! Layered tool settings.
//!
//! Settings come from built-in defaults, then `input-resolve.toml` (or the
//! file given with `--config`), then `INPUT_RESOLVE_*` environment variables,
//! then command-line flags. Later layers win.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{Args, ProcessorKind};
use crate::error::InputResolveError;

/// Configuration file read when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "input-resolve.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "INPUT_RESOLVE_";

/// Settings that shape a run but are not part of the options object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Processor used when `--processor` is absent.
    pub processor: ProcessorKind,
    /// Resolution order used when neither `--order` nor the options file
    /// supplies one.
    pub order: Option<String>,
    /// Pretty-print the JSON output.
    pub pretty: bool,
    /// Include the provenance object.
    pub provenance: bool,
}

/// Flag values that override lower layers; unset flags are omitted.
#[derive(Serialize)]
struct FlagOverrides<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    processor: Option<ProcessorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pretty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provenance: Option<bool>,
}

impl<'a> FlagOverrides<'a> {
    fn from_args(args: &'a Args) -> Self {
        Self {
            processor: args.processor,
            order: args.order.as_deref(),
            pretty: args.should_pretty_print.then_some(true),
            provenance: args.should_report_provenance.then_some(true),
        }
    }
}

impl Settings {
    /// Merge every configuration layer for `args`.
    ///
    /// # Errors
    ///
    /// Returns [`InputResolveError::MissingConfig`] when `--config` names a
    /// file that does not exist, or [`InputResolveError::Config`] when a
    /// layer holds a value of the wrong type.
    pub fn load(args: &Args) -> Result<Self, InputResolveError> {
        let file = match args.config.as_deref() {
            Some(path) => {
                if !path.is_file() {
                    return Err(InputResolveError::MissingConfig(path.to_owned()));
                }
                Toml::file_exact(path)
            }
            None => Toml::file_exact(DEFAULT_CONFIG_FILE),
        };
        let settings: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(FlagOverrides::from_args(args)))
            .extract()?;
        debug!(
            processor = settings.processor.as_str(),
            order = settings.order.as_deref(),
            "loaded settings"
        );
        Ok(settings)
    }
}
