//! CLI entrypoint for `input-resolve`.

use std::io::Write;

use clap::Parser;
use input_resolve::{Args, InputResolveError, Settings, execute, render};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), InputResolveError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = Settings::load(&args)?;
    let report = execute(&args, &settings)?;
    let text = render(&report, settings.pretty)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}").map_err(InputResolveError::Output)
}
