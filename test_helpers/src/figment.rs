//! Settings layers staged inside a `figment::Jail`.
//!
//! [`JailLayers`] collects the config files and environment variables a test
//! wants, writes them into a fresh jail and then runs the test body there.
//! [`with_jail`] is the bare form for tests that need no staged layers.

use std::fmt::Display;

use anyhow::{Result, anyhow};
use figment::Jail;

/// Config files and environment variables to stage before a jailed test body.
///
/// ```
/// use input_resolver_test_helpers::figment::{JailLayers, figment_error};
///
/// let order = JailLayers::new()
///     .file("input-resolve.toml", "order = \"GPC\"\n")
///     .var("INPUT_RESOLVE_PRETTY", "true")
///     .run(|_| std::fs::read_to_string("input-resolve.toml").map_err(figment_error))?;
/// assert!(order.contains("GPC"));
/// # Ok::<_, anyhow::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JailLayers {
    files: Vec<(String, String)>,
    vars: Vec<(String, String)>,
}

impl JailLayers {
    /// No files and no variables.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: Vec::new(),
            vars: Vec::new(),
        }
    }

    /// Write `contents` to `name`, relative to the jail directory.
    #[must_use]
    pub fn file(mut self, name: impl Into<String>, contents: impl Into<String>) -> Self {
        self.files.push((name.into(), contents.into()));
        self
    }

    /// Set the environment variable `key` for the duration of the jail.
    #[must_use]
    pub fn var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.push((key.into(), value.into()));
        self
    }

    /// Stage the layers in a new jail, then run `body` inside it.
    ///
    /// # Errors
    ///
    /// Returns an error when a file cannot be written or `body` fails.
    pub fn run<F, T>(&self, body: F) -> Result<T>
    where
        F: FnOnce(&mut Jail) -> figment::error::Result<T>,
    {
        with_jail(|jail| {
            for (name, contents) in &self.files {
                jail.create_file(name, contents)?;
            }
            for (key, value) in &self.vars {
                jail.set_env(key, value);
            }
            body(jail)
        })
    }
}

/// Run `body` in a fresh [`Jail`] and hand back what it produced.
///
/// # Errors
///
/// Returns an error when the jail cannot be created or `body` fails.
pub fn with_jail<F, T>(body: F) -> Result<T>
where
    F: FnOnce(&mut Jail) -> figment::error::Result<T>,
{
    let mut produced: Result<T> = Err(anyhow!("jail body did not run"));
    Jail::try_with(|jail| {
        produced = Ok(body(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!("jailed settings test failed: {err}"))?;
    produced
}

/// Wrap a displayable error so it can leave a jail body through `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as a map_err adapter, which hands over owned errors"
)]
pub fn figment_error<E: Display>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
