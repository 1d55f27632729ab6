//! Drives a processor over a fixture and assembles the report.

use input_resolver::{
    ArrayInputProcessor, Decoder, FieldRecord, HttpInputProcessor, InputProcessor, JsonDecoder,
    JsonInputProcessor, RequestEnvelope, ResolveOptions, ResolvedFields, SourceSet, resolve,
    ResolveError, resolve_single,
};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::cli::{Args, ProcessorKind};
use crate::config::Settings;
use crate::error::InputResolveError;
use crate::fixture::{FixtureInput, read_json};

/// Resolve the fixture named by `args` and build the JSON report.
///
/// Without `--field` the report holds every resolved field. With it, the
/// values are populated into a [`FieldRecord`] declaring only those names
/// through the selected [`InputProcessor`]. When provenance is enabled the
/// report becomes `{"fields": ..., "provenance": ...}`.
///
/// # Errors
///
/// Returns an error when the fixture or options file cannot be loaded, the
/// inline flags conflict with the options file, or the resolver rejects the
/// input.
pub fn execute(args: &Args, settings: &Settings) -> Result<Value, InputResolveError> {
    let kind = settings.processor;
    let input = FixtureInput::load(&args.fixture, kind)?;
    let options = build_options(args, settings)?;
    debug!(processor = kind.as_str(), fixture = %args.fixture, "resolving fixture");

    let resolved = resolve_input(&input, &options)?;
    let fields = if args.fields.is_empty() {
        resolved
            .iter()
            .map(|(name, value)| (name.to_owned(), value.clone()))
            .collect()
    } else {
        let mut record = FieldRecord::new(&args.fields);
        processor(kind).initialize_request(&mut record, input.as_any(), &options)?;
        record.into_map()
    };

    if !settings.provenance {
        return Ok(Value::Object(fields));
    }
    let provenance: Map<String, Value> = resolved
        .provenances()
        .filter(|(name, _)| fields.contains_key(*name))
        .map(|(name, source)| (name.to_owned(), Value::from(source.to_string())))
        .collect();
    Ok(json!({ "fields": fields, "provenance": provenance }))
}

/// Combine the options file with the inline `--order`, `--map` and
/// `--restrict` flags. Inline values replace the file's entries key by key.
///
/// The configured default order only applies when neither `--order` nor the
/// options file supplies one. A non-object options value without inline flags
/// is passed through untouched so the resolver reports it.
///
/// # Errors
///
/// Returns an error when the options file cannot be loaded, or when inline
/// flags are combined with an options value that is not an object.
pub fn build_options(args: &Args, settings: &Settings) -> Result<Value, InputResolveError> {
    let mut options = args
        .options
        .as_deref()
        .map_or(Ok(Value::Null), read_json)?;
    let has_inline =
        args.order.is_some() || !args.renames.is_empty() || !args.restrictions.is_empty();
    if options.is_null() && (has_inline || settings.order.is_some()) {
        options = Value::Object(Map::new());
    }
    match &mut options {
        Value::Object(entries) => {
            if let Some(order) = &settings.order
                && (args.order.is_some() || !entries.contains_key("order"))
            {
                entries.insert(String::from("order"), Value::from(order.as_str()));
            }
            merge_pairs(entries, "map", "--map", &args.renames)?;
            merge_pairs(entries, "restrict", "--restrict", &args.restrictions)?;
        }
        _ if has_inline => {
            return Err(InputResolveError::Argument {
                arg: "--options",
                message: String::from("inline flags need an options object"),
            });
        }
        _ => {}
    }
    Ok(options)
}

fn merge_pairs(
    entries: &mut Map<String, Value>,
    key: &str,
    arg: &'static str,
    pairs: &[(String, String)],
) -> Result<(), InputResolveError> {
    if pairs.is_empty() {
        return Ok(());
    }
    let slot = entries
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()));
    let Value::Object(table) = slot else {
        return Err(InputResolveError::Argument {
            arg,
            message: format!("options file '{key}' entry is not an object"),
        });
    };
    for (name, value) in pairs {
        table.insert(name.clone(), Value::from(value.as_str()));
    }
    Ok(())
}

/// Run the resolution stage alone, keeping per-field provenance.
fn resolve_input(input: &FixtureInput, options: &Value) -> Result<ResolvedFields, InputResolveError> {
    let parsed = ResolveOptions::from_value(options)?;
    let resolved = match input {
        FixtureInput::Http(request) => resolve(&SourceSet::from_envelope(request), &parsed),
        FixtureInput::Json(request) => {
            let decoded = JsonDecoder
                .decode(request.content(), "json")
                .map_err(ResolveError::from)?;
            resolve_single(&decoded, parsed.map())
        }
        FixtureInput::Array(map) => resolve_single(map, parsed.map()),
    };
    Ok(resolved)
}

fn processor(kind: ProcessorKind) -> Box<dyn InputProcessor> {
    match kind {
        ProcessorKind::Http => Box::new(HttpInputProcessor),
        ProcessorKind::Json => Box::new(JsonInputProcessor::new()),
        ProcessorKind::Array => Box::new(ArrayInputProcessor),
    }
}

/// Serialise the report, pretty-printed when `pretty` is set.
///
/// # Errors
///
/// Returns [`InputResolveError::Render`] if serialisation fails.
pub fn render(report: &Value, pretty: bool) -> Result<String, InputResolveError> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
    .map_err(InputResolveError::Render)
}
